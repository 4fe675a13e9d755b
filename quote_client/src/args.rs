//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. Filter options are global so
//! they can be given before or after the subcommand.
use clap::{Parser, Subcommand};
use quote_common::FilterType;
use quote_common::filters::DEFAULT_FILTER;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Print quotes from favqs.com", long_about = None)]
pub struct Args {
    /// Limits the quote categories.
    #[arg(short, long, global = true, default_value = DEFAULT_FILTER)]
    pub filter: String,

    /// The max number of quotes to return.
    #[arg(short, long, global = true, default_value_t = 1)]
    pub limit: usize,

    /// What the filter is matched against.
    #[arg(short = 't', long = "type", global = true, value_enum, default_value_t = FilterType::Tag)]
    pub filter_type: FilterType,

    /// Ignore --filter and pick one of the default filters at random.
    #[arg(short, long, global = true)]
    pub random_filter: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Prints the quote of the day.
    #[command(visible_alias = "s")]
    Single,
    /// Prints a list of quotes filtered by -f and limited by -l.
    #[command(visible_alias = "m")]
    Many,
}
