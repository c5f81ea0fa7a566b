//! Types shared between the showroom back-office client and its tooling:
//! REST envelope and resource DTOs, form validation, the NIC decoder and
//! the per-session capability set.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
