//!
//! Common types and utilities for the FavQs quote client.
//!
//! This crate aggregates:
//! - `error` — unified error type `ClientError`.
//! - `result` — handy `Result<T, ClientError>` alias.
//! - `quote` — quote payloads decoded from the API.
//! - `session` — session request/response payloads.
//! - `filters` — filter kinds and default filters.
//! - `config` — `ClientConfig` and its environment variables.
//! - `net` — endpoint paths and transport limits.
//! - `sampling` — random permutation and quote selection.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod filters;
pub mod net;
pub mod quote;
pub mod result;
pub mod sampling;
pub mod session;

pub use config::ClientConfig;
pub use error::ClientError;
pub use filters::FilterType;
pub use quote::{Quote, QuoteOfDay, QuotePage};
pub use result::Result;
