//! Quote Client — prints quotes from favqs.com.
//!
//! The API key is read from `FAVQS_APIKEY`. `FAVQS_BASE_URL` points the client at
//! another API root, `FAVQS_LOGIN`/`FAVQS_PASSWORD` sign the session in as a user.
//!
//! Usage example (CLI):
//! ```bash
//! FAVQS_APIKEY=... quote_client single
//! FAVQS_APIKEY=... quote_client many --filter science --limit 3
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see the requests being made.
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use quote_client::{Args, run};
use quote_common::ClientConfig;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    let config = ClientConfig::from_env();

    let stdout = io::stdout();
    match run(&args, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?} failed: {:?}", args.command, e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
