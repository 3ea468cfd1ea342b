use crate::core::traits::Real;
use std::{fmt, hash, ops};

/// Immutable 2D vector (or point) value.
///
/// Equality and hashing are exact: both components are compared by
/// [canonical bit pattern](Real::canonical_bits), so `-0.0` and `0.0` differ and NaN equals NaN.
/// Use [Vector2::fuzzy_eq] for tolerance based comparisons.
#[derive(Debug, Copy, Clone)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Unit vector along the x axis (x = 1, y = 0).
    pub fn unit_x() -> Self {
        Vector2::new(T::one(), T::zero())
    }

    /// Unit vector along the y axis (x = 0, y = 1).
    pub fn unit_y() -> Self {
        Vector2::new(T::zero(), T::one())
    }

    /// Unit vector pointing at `angle` radians from the positive x axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radical_circles::core::math::*;
    /// let v = Vector2::from_angle(std::f64::consts::FRAC_PI_2);
    /// assert!(v.fuzzy_eq(Vector2::new(0.0, 1.0)));
    /// ```
    pub fn from_angle(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Vector2::new(c, s)
    }

    /// Vector of length `length` pointing at `angle` radians from the positive x axis.
    pub fn from_polar(angle: T, length: T) -> Self {
        let (s, c) = angle.sin_cos();
        Vector2::new(length * c, length * s)
    }

    /// Uniformly scale the vector by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize the vector (length = 1).
    ///
    /// Not guarded: normalizing a zero vector divides by zero and yields non-finite components.
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Counter clockwise perpendicular vector, `(-y, x)`.
    pub fn rot_plus_90(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Clockwise perpendicular vector, `(y, -x)`.
    pub fn rot_minus_90(&self) -> Self {
        vec2(self.y, -self.x)
    }

    /// Angle from the positive x axis in radians, in the range `(-PI, PI]`.
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T: Real> PartialEq for Vector2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.canonical_bits() == other.x.canonical_bits()
            && self.y.canonical_bits() == other.y.canonical_bits()
    }
}

impl<T: Real> Eq for Vector2<T> {}

impl<T: Real> hash::Hash for Vector2<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.x.canonical_bits().hash(state);
        self.y.canonical_bits().hash(state);
    }
}

impl<T: Real> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, _rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op _rhs.x, self.y $op _rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::collections::HashSet;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert_eq!(($v1 $op $v2), $expected);
            assert_eq!((&$v1 $op $v2), $expected);
            assert_eq!(($v1 $op &$v2), $expected);
            assert_eq!((&$v1 $op &$v2), $expected);
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        assert_eq!(-v1, vec2(-4.0, -5.0));
        assert_eq!(-&v1, vec2(-4.0, -5.0));
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = vec2(3.5, -7.25);
        let b = vec2(-0.5, 12.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn products_and_lengths() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.dot(vec2(2.0, -1.0)), 2.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.scale(-2.0), vec2(-6.0, -8.0));
        assert!(v.normalize().fuzzy_eq(vec2(0.6, 0.8)));
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        let n = Vector2::<f64>::zero().normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn rotations() {
        let v = vec2(2.0, 1.0);
        assert_eq!(v.rot_plus_90(), vec2(-1.0, 2.0));
        assert_eq!(v.rot_minus_90(), vec2(1.0, -2.0));
        assert_eq!(v.rot_plus_90().rot_minus_90(), v);
        assert_eq!(v.rot_minus_90().rot_plus_90(), v);
        assert_eq!(v.rot_plus_90().dot(v), 0.0);
    }

    #[test]
    fn angles_and_polar() {
        use std::f64::consts::{FRAC_PI_2, PI};
        assert_eq!(Vector2::<f64>::unit_x().angle(), 0.0);
        assert_eq!(Vector2::<f64>::unit_y().angle(), FRAC_PI_2);
        assert_eq!(vec2(-1.0, 0.0).angle(), PI);

        for i in 0..16 {
            let ang = f64::from(i) * PI / 8.0 - PI;
            assert_fuzzy_eq!(Vector2::from_angle(ang).length(), 1.0);
            let p = Vector2::from_polar(ang, 2.5);
            assert_fuzzy_eq!(p.length(), 2.5);
            assert!(Vector2::from_angle(ang).scale(2.5).fuzzy_eq(p));
        }

        assert!(Vector2::from_polar(PI, 3.0).fuzzy_eq(vec2(-3.0, 0.0)));
    }

    #[test]
    fn bit_exact_equality() {
        assert_ne!(vec2(0.0, 1.0), vec2(-0.0, 1.0));
        assert_eq!(vec2(f64::NAN, 1.0), vec2(f64::NAN, 1.0));
        assert_ne!(vec2(0.1 + 0.2, 0.0), vec2(0.3, 0.0));
        assert!(vec2(0.1 + 0.2, 0.0).fuzzy_eq(vec2(0.3, 0.0)));

        let set: HashSet<Vector2> = [vec2(1.0, 2.0), vec2(1.0, 2.0), vec2(-0.0, 0.0), vec2(0.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(vec2(1.5, -2.0).to_string(), "Vector2(1.5, -2)");
    }
}
