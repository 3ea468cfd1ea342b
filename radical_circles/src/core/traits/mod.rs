//! Core/common traits for use in radical_circles.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
