use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and
/// compared by exact bit pattern.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + 'static
{
    /// Bit pattern used for exact value equality and hashing.
    ///
    /// Every NaN maps to the same canonical pattern, all other values (including `-0.0`) keep
    /// their own, so `+0.0` and `-0.0` compare unequal while any two NaNs compare equal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radical_circles::core::traits::*;
    /// assert_ne!(0.0f64.canonical_bits(), (-0.0f64).canonical_bits());
    /// assert_eq!(f64::NAN.canonical_bits(), (-f64::NAN).canonical_bits());
    /// assert_eq!(1.5f64.canonical_bits(), 1.5f64.to_bits());
    /// ```
    fn canonical_bits(self) -> u64;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            f32::NAN.to_bits() as u64
        } else {
            self.to_bits() as u64
        }
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
