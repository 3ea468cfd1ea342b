//! 2D vector algebra and closed form circle-circle intersect classification.
//!
//! Intersecting two [Circle]s yields a [CircleCircleIntersection] holding the center distance,
//! the [IntersectionType] (coincident, concentric contained, eccentric contained, internally
//! tangent, overlapping, externally tangent, or separate) and the geometry defined for that type:
//! the [RadicalLine] for circles with distinct centers plus the tangent or crossing points.
//!
//! # Examples
//!
//! ```
//! use radical_circles::*;
//!
//! let c1 = Circle::new(vec2(0.0, 0.0), 1.0)?;
//! let c2 = Circle::new(vec2(2.0, 0.0), 1.0)?;
//! let intr = circle_circle_intr(&c1, &c2);
//!
//! assert_eq!(intr.intersection_type(), IntersectionType::ExternallyTangent);
//! assert_eq!(intr.intersection_points()?, vec![vec2(1.0, 0.0)]);
//! # Ok::<(), radical_circles::Error>(())
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod error;

pub use crate::core::math::{
    circle_circle_intr, vec2, Circle, CircleCircleIntersection, CircleCircleIntr,
    IntersectionType, RadicalLine, Vector2,
};
pub use crate::core::traits::{FuzzyEq, Real};
pub use crate::error::{Error, Result};
