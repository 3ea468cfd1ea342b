//! Core math types: vectors, circles, and circle-circle intersects.
mod circle;
mod circle_circle_intersect;
mod vector2;

pub use circle::Circle;
pub use circle_circle_intersect::{
    circle_circle_intr, CircleCircleIntersection, CircleCircleIntr, IntersectionType, RadicalLine,
};
pub use vector2::{vec2, Vector2};
