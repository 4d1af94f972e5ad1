//! API client module

pub mod client;
pub mod params;
pub mod response;

pub use client::ApiClient;
pub use params::{Filtering, Operator, Pagination, RequestParameters, Sorting};
