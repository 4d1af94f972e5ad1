//! Command-line client for the UKFast cloud infrastructure API
//!
//! Commands resolve a service client, translate `--filter` / `--sort` flags
//! into [`api::RequestParameters`] and render what the API returns.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod helper;
pub mod output;
pub mod service;
