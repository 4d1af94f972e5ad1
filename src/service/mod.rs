//! Remote services, one trait per resource family

pub mod account;
pub mod ddosx;
pub mod ecloud;

pub use account::{AccountService, Invoice};
pub use ddosx::{DDoSXService, VerificationFile};
pub use ecloud::{ECloudService, Host, Site};
