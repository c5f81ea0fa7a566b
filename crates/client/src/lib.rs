//! Back-office client for the bike showroom REST backend.
//!
//! One API module per backend resource under [`domain`], reports under
//! [`projections`], session/login and users under [`system`]. Everything
//! talks through an [`shared::api_client::ApiClient`] that carries the
//! session explicitly.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
