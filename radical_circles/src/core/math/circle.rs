use super::Vector2;
use crate::core::traits::Real;
use crate::error::{Error, Result};
use std::{fmt, hash};

/// Circle defined by a center point and a strictly positive radius.
///
/// Equality and hashing are exact, see [Vector2] for the comparison rules.
#[derive(Debug, Copy, Clone)]
pub struct Circle<T = f64> {
    center: Vector2<T>,
    radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle, `radius` must be greater than zero.
    ///
    /// Returns [Error::NonPositiveRadius] for zero, negative, or NaN radius.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radical_circles::core::math::*;
    /// # use radical_circles::Error;
    /// let c = Circle::new(Vector2::new(1.0, 2.0), 0.5).unwrap();
    /// assert_eq!(c.radius(), 0.5);
    /// assert_eq!(Circle::new(Vector2::zero(), 0.0), Err(Error::NonPositiveRadius));
    /// assert_eq!(Circle::new(Vector2::zero(), f64::NAN), Err(Error::NonPositiveRadius));
    /// ```
    pub fn new(center: Vector2<T>, radius: T) -> Result<Self> {
        // written negated so NaN fails too
        if !(radius > T::zero()) {
            return Err(Error::NonPositiveRadius);
        }

        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Real> PartialEq for Circle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && self.radius.canonical_bits() == other.radius.canonical_bits()
    }
}

impl<T: Real> Eq for Circle<T> {}

impl<T: Real> hash::Hash for Circle<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.radius.canonical_bits().hash(state);
    }
}

impl<T: Real> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(c: {}, r: {})", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn radius_must_be_positive() {
        let c = vec2(3.0, -1.0);
        assert_eq!(Circle::new(c, 0.0), Err(Error::NonPositiveRadius));
        assert_eq!(Circle::new(c, -0.0), Err(Error::NonPositiveRadius));
        assert_eq!(Circle::new(c, -1.0), Err(Error::NonPositiveRadius));
        assert_eq!(Circle::new(c, f64::NAN), Err(Error::NonPositiveRadius));
        assert_eq!(Circle::new(c, f64::NEG_INFINITY), Err(Error::NonPositiveRadius));

        let tiny = Circle::new(c, 1e-9).unwrap();
        assert_eq!(tiny.center(), c);
        assert_eq!(tiny.radius(), 1e-9);
    }

    #[test]
    fn exact_equality() {
        let a = Circle::new(vec2(0.0, 0.0), 1.0).unwrap();
        let b = Circle::new(vec2(0.0, 0.0), 1.0).unwrap();
        let c = Circle::new(vec2(-0.0, 0.0), 1.0).unwrap();
        let d = Circle::new(vec2(0.0, 0.0), 1.0 + f64::EPSILON).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn display() {
        let c = Circle::new(vec2(1.0, 2.0), 0.5).unwrap();
        assert_eq!(c.to_string(), "Circle(c: Vector2(1, 2), r: 0.5)");
        assert_eq!(Error::NonPositiveRadius.to_string(), "circle radius must be positive");
    }
}
