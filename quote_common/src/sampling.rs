//! Random selection helpers.
//!
//! Every helper takes the random source as a parameter. Callers that want fresh,
//! uncorrelated randomness per call create a new generator with
//! [`time_seeded_rng`]; tests pass a seeded `StdRng` to get exact permutations.
use chrono::Utc;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::quote::Quote;

/// Create a generator seeded from the current wall-clock time.
pub fn time_seeded_rng() -> StdRng {
    let now = Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64;
    StdRng::seed_from_u64(seed)
}

/// Uniform random permutation of `0..n`.
pub fn permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indexes: Vec<usize> = (0..n).collect();
    indexes.shuffle(rng);
    indexes
}

/// Pick up to `max` quotes from `quotes` in random order.
///
/// `max` is clamped to the number of quotes. The permutation is sized to `max`, so
/// only the quotes at positions `0..max` of the input are eligible; they come back
/// reordered. An empty input yields an empty result.
pub fn select_quotes<R: Rng + ?Sized>(quotes: Vec<Quote>, max: usize, rng: &mut R) -> Vec<Quote> {
    let max = if max > quotes.len() {
        debug!("Requested {} quotes, only {} available", max, quotes.len());
        quotes.len()
    } else {
        max
    };

    let mut slots: Vec<Option<Quote>> = quotes.into_iter().take(max).map(Some).collect();
    permutation(max, rng)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Pick one entry of `filters` uniformly at random.
pub fn random_default_filter<'a, R: Rng + ?Sized>(filters: &'a [String], rng: &mut R) -> Option<&'a str> {
    permutation(filters.len(), rng)
        .first()
        .map(|&i| filters[i].as_str())
}
