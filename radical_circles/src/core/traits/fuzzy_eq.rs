/// Trait for tolerance based equality comparisons with floating point numbers.
///
/// Value types in this crate compare by exact bit pattern, this trait is the escape hatch for
/// results that come out of `sqrt`, `sin`/`cos` or division where the last bits are noise, e.g.
/// checking that a computed intersect point lies where expected.
///
/// # Examples
///
/// ```
/// # use radical_circles::core::traits::*;
/// let half_chord = (25.0f64 - 9.0).sqrt();
/// assert!(half_chord.fuzzy_eq(4.0));
///
/// let unit = (std::f64::consts::FRAC_PI_3.cos().powi(2) + std::f64::consts::FRAC_PI_3.sin().powi(2)).sqrt();
/// assert!(unit.fuzzy_eq_eps(1.0, 1e-12));
/// assert!(1e-10f64.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `|self - other| < fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `|self| < fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);
