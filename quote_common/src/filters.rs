//! Quote filters and their defaults.
//!
//! `FilterType` doubles as a `clap` value enum for the CLI and renders to the
//! lowercase `type` query parameter through `strum`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Filter used by the CLI when none is given.
pub const DEFAULT_FILTER: &str = "science";

/// Filters offered by the random filter picker.
pub const DEFAULT_FILTERS: [&str; 3] = ["beauty", "inspirational", "art"];

/// What the `filter` query parameter is matched against.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterType {
    /// Quotes carrying the tag.
    #[default]
    Tag,
    /// Quotes by the author.
    Author,
    /// Quotes favorited by the user.
    User,
}

/// Owned copy of [`DEFAULT_FILTERS`].
pub fn default_filters() -> Vec<String> {
    DEFAULT_FILTERS.iter().map(|f| f.to_string()).collect()
}
