//! Command dispatch: build the client, run the selected command, print the result.
//!
//! Nothing is written until the API calls have succeeded, so a failing command
//! never leaves partial quotes behind.
use std::io::Write;

use log::{debug, warn};
use quote_common::sampling::time_seeded_rng;
use quote_common::{ClientConfig, Result};

use crate::api::QuoteClient;
use crate::args::{Args, Command};
use crate::output::{write_quote, write_quotes};

/// Run the command selected in `args` against the API described by `config`.
pub fn run<W: Write + ?Sized>(args: &Args, config: &ClientConfig, out: &mut W) -> Result<()> {
    let client = QuoteClient::new(config)?;

    match args.command {
        Command::Single => {
            let qotd = client.get_quote_of_day()?;
            debug!("Quote of the day for {}", qotd.qotd_date);
            write_quote(out, &qotd.quote)?;
        }
        Command::Many => {
            let filter = resolve_filter(args, config);
            let quotes = client.get_quotes_with(filter, args.filter_type, args.limit, &mut time_seeded_rng())?;
            write_quotes(out, &quotes)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn resolve_filter<'a>(args: &'a Args, config: &'a ClientConfig) -> &'a str {
    if !args.random_filter {
        return &args.filter;
    }
    match config.random_default_filter() {
        Some(filter) => {
            debug!("Using random default filter '{}'", filter);
            filter
        }
        None => {
            warn!("No default filters configured, falling back to '{}'", args.filter);
            &args.filter
        }
    }
}
