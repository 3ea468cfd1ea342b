/// Assert two values are fuzzy equal, `FuzzyEq` (or the inherent `fuzzy_eq` on
/// [Vector2](crate::core::math::Vector2)) must be in scope.
///
/// # Examples
///
/// ```
/// # use radical_circles::assert_fuzzy_eq;
/// # use radical_circles::core::traits::FuzzyEq;
/// assert_fuzzy_eq!((16.0f64).sqrt(), 4.0);
/// assert_fuzzy_eq!(0.1f64 + 0.2, 0.3, 1e-12);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}
