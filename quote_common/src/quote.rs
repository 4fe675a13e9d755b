//! Quote payloads returned by the FavQs API.
//!
//! All types are decoded from JSON with `serde_json` and consumed read-only. Every
//! field falls back to its default when the API omits it or sends `null`.
use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// API identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Number of users who favorited the quote.
    #[serde(deserialize_with = "null_as_default")]
    pub favorites_count: u64,
    /// Whether the body is a dialogue between several speakers.
    #[serde(deserialize_with = "null_as_default")]
    pub dialogue: bool,
    /// Whether the session user has favorited the quote.
    #[serde(deserialize_with = "null_as_default")]
    pub favorite: bool,
    /// Tags attached to the quote.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Permalink on favqs.com.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Upvote counter.
    #[serde(deserialize_with = "null_as_default")]
    pub upvotes_count: u64,
    /// Downvote counter.
    #[serde(deserialize_with = "null_as_default")]
    pub downvotes_count: u64,
    /// Quote author.
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// Author slug used in author links.
    #[serde(deserialize_with = "null_as_default")]
    pub author_permalink: String,
    /// Quote text.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

/// Response of `GET /qotd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteOfDay {
    /// Date the quote was picked for, as sent by the API.
    #[serde(deserialize_with = "null_as_default")]
    pub qotd_date: String,
    /// The quote itself.
    #[serde(deserialize_with = "null_as_default")]
    pub quote: Quote,
}

/// One page of `GET /quotes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuotePage {
    /// Page number, starting at 1.
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    /// True when no further pages exist.
    #[serde(deserialize_with = "null_as_default")]
    pub last_page: bool,
    /// Quotes in API order.
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: Vec<Quote>,
}
