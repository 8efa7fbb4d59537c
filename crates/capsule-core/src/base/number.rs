//! Decimal rendering for synthetic capsule parameters.

use std::num::FpCategory;

/// Magnitudes below this (other than zero) render in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;
/// Magnitudes at or above this render in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Render a number the way capsule leaf preimages spell it.
///
/// Integral values carry no fractional part (`500`, not `500.0`), fractions use the shortest
/// round-trip digits and negative zero collapses to `0`. Magnitudes below `1e-6` or from `1e21`
/// upwards switch to exponent notation with an explicit sign (`5e-7`, `1e+21`).
///
/// Non-finite values are rejected before leaf derivation and are rendered as Rust prints them.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.classify() == FpCategory::Zero {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude < EXPONENT_LOWER || magnitude >= EXPONENT_UPPER {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }

    format!("{value}")
}
