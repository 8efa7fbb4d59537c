//! Foundational primitive helpers.

mod number;

pub use number::format_number;
