//! Quote Client — a small command-line client for the FavQs quote API.
//!
//! The library side holds everything the binary needs, so it can be driven from
//! tests against a mock backend:
//! - `api` — the session-authenticated `QuoteClient`.
//! - `args` — `clap` definitions of flags and subcommands.
//! - `output` — plain-text rendering of quotes.
//! - `app` — dispatch of a parsed command to the client.
#![warn(missing_docs)]
pub mod api;
pub mod app;
pub mod args;
pub mod output;

pub use api::QuoteClient;
pub use app::run;
pub use args::{Args, Command};
