pub mod envelope;
pub mod nic;
pub mod paging;
pub mod validation;
