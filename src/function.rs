//! Small function helpers the point-free API is built from.

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C>(f: impl FnOnce(B) -> C, g: impl FnOnce(A) -> B) -> impl FnOnce(A) -> C {
  move |x| f(g(x))
}

/// Composes any number of unary functions, right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// ```
/// use rxlite::compose;
///
/// let f = compose!(|x: i32| x + 1, |x: i32| x * 2, |x: &str| x.len() as i32);
/// assert_eq!(f("abc"), 7);
/// ```
#[macro_export]
macro_rules! compose {
  ($f:expr $(,)?) => {
    $f
  };
  ($f:expr, $($rest:expr),+ $(,)?) => {
    $crate::function::compose($f, $crate::compose!($($rest),+))
  };
}

#[inline]
pub fn identity<T>(x: T) -> T { x }

/// A function ignoring its argument and returning a clone of `x`.
pub fn constant<A, T: Clone>(x: T) -> impl Fn(A) -> T { move |_| x.clone() }

/// Flattens one level of nesting.
pub fn flatten<I>(nested: I) -> Vec<<I::Item as IntoIterator>::Item>
where
  I: IntoIterator,
  I::Item: IntoIterator,
{
  nested.into_iter().flatten().collect()
}
