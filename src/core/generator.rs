//! Phone number generator: a random Cellcard prefix plus a random
//! 6-digit suffix, with duplicate avoidance bounded by a retry budget.

use crate::errors::{AppError, AppResult};
use crate::models::PhoneGeneration;
use rand::Rng;
use std::collections::BTreeSet;

/// Cambodian Cellcard mobile prefixes.
pub const CELLCARD_PREFIXES: [&str; 10] = [
    "011", "012", "014", "017", "061", "076", "077", "078", "079", "085",
];

/// Retry budget when duplicates are not allowed.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Draw one 9-digit candidate.
pub fn draw<R: Rng>(rng: &mut R) -> String {
    let prefix = CELLCARD_PREFIXES[rng.gen_range(0..CELLCARD_PREFIXES.len())];
    let suffix: u32 = rng.gen_range(0..1_000_000);
    format!("{prefix}{suffix:06}")
}

/// Generate a phone number record.
///
/// With `allow_duplicates` false, candidates already in `generated`
/// are re-drawn up to [`MAX_ATTEMPTS`] times; exhausting the budget
/// fails without mutating anything. The caller inserts the returned
/// number into the session set.
pub fn generate<R: Rng>(
    rng: &mut R,
    generated: &BTreeSet<String>,
    allow_duplicates: bool,
) -> AppResult<PhoneGeneration> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = draw(rng);
        if allow_duplicates || !generated.contains(&candidate) {
            return Ok(PhoneGeneration::new(candidate));
        }
    }

    Err(AppError::GenerationExhausted(MAX_ATTEMPTS))
}
