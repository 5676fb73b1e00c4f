//! Quote rating bounds and the write-time clamp.
//!
//! A rating is never rejected. Anything that is not a JSON integer inside
//! `[MIN_RATING, MAX_RATING]` is replaced by [`DEFAULT_RATING`].

use serde_json::Value;

/// Rating assigned when none (or an unusable one) is supplied.
pub const DEFAULT_RATING: i32 = 1;
/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Whether `rating` lies inside the accepted bounds.
pub fn is_valid_rating(rating: i64) -> bool {
    (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating)
}

/// Clamp a raw JSON rating to a storable value.
pub fn clamp_rating(value: &Value) -> i32 {
    match value.as_i64() {
        Some(n) if is_valid_rating(n) => n as i32,
        _ => DEFAULT_RATING,
    }
}
