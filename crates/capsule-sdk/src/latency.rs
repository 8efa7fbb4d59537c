//! Simulated retrieval latency.
//!
//! The figure is cosmetic. It depends only on the cache flag and never on the payload.

/// Simulated retrieval time with a warm cache, in milliseconds.
pub const BASE_RETRIEVAL_MS: f64 = 18.0;
/// Slowdown applied when the cache is cold.
pub const COLD_CACHE_FACTOR: f64 = 3.2;

/// `round(18 * (cache_warm ? 1 : 3.2))`
#[allow(
    clippy::float_arithmetic,
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Both factors are small positive constants"
)]
#[must_use]
pub fn simulated_retrieval_ms(cache_warm: bool) -> u64 {
    let factor = if cache_warm { 1.0 } else { COLD_CACHE_FACTOR };
    (BASE_RETRIEVAL_MS * factor).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_and_cold_figures() {
        assert_eq!(simulated_retrieval_ms(true), 18);
        assert_eq!(simulated_retrieval_ms(false), 58);
    }
}
