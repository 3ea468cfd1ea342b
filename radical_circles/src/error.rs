//! Error type for circle construction and intersect queries.

use thiserror::Error;

/// Errors returned by fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Circle radius was zero, negative, or NaN.
    #[error("circle radius must be positive")]
    NonPositiveRadius,

    /// Coincident circles share every point, so the intersect points cannot be listed.
    #[error("coincident circles have infinitely many intersect points")]
    CoincidentCircles,
}

/// Result alias defaulting to the crate [Error].
pub type Result<T, E = Error> = std::result::Result<T, E>;
