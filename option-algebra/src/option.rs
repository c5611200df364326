//! Constructors, combinators and eliminators over [`Option`].
//!
//! Every function here is total and pure, with one exception: the
//! re-exported [`try_catch`], which runs a thunk. The value being operated on is
//! always the first argument, so a pipeline reads as ordinary nested
//! calls or, equivalently, as the matching method chain on `Option`:
//!
//! ```rust
//! use option_algebra::option::{chain, filter, get_or_else, map, some};
//!
//! let doubled_positive = |x: i32| if x > 0 { Some(x * 2) } else { None };
//!
//! let r = get_or_else(
//!     filter(chain(map(some(20), |x| x + 1), doubled_positive), |x| *x < 100),
//!     || 0,
//! );
//! assert_eq!(r, 42);
//!
//! let same = Some(20)
//!     .map(|x| x + 1)
//!     .and_then(doubled_positive)
//!     .filter(|x| *x < 100)
//!     .unwrap_or(0);
//! assert_eq!(same, r);
//! ```
//!
//! Functions that duplicate a standard method delegate to it; they exist so
//! the whole surface is available in one place with one argument order.

use crate::nullable::Nullable;
use crate::{Eq, Monoid};
use either::Either;

pub use crate::catch::{try_catch, try_catch_result};

/// The two halves produced by [`partition`], [`partition_map`] and
/// [`separate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Separated<L, R> {
    /// The rejected (or `Left`) side.
    pub left: L,
    /// The accepted (or `Right`) side.
    pub right: R,
}

impl<L, R> Separated<L, R> {
    /// Build from both halves.
    pub fn new(left: L, right: R) -> Self {
        Separated { left, right }
    }
}

// Construction / recognition

/// `Some(value)`.
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// The empty value.
pub fn none<T>() -> Option<T> {
    None
}

/// Is `o` a `Some`?
pub fn is_some<T>(o: &Option<T>) -> bool {
    o.is_some()
}

/// Is `o` the `None`?
pub fn is_none<T>(o: &Option<T>) -> bool {
    o.is_none()
}

/// `None` if `value` is its type's null sentinel, `Some` otherwise.
///
/// See [`Nullable`] for the types that have one.
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> {
    value.into_option()
}

/// Build a constructor that keeps only the values satisfying `predicate`.
///
/// ```rust
/// use option_algebra::option::from_predicate;
///
/// let positive = from_predicate(|x: &i32| *x > 0);
/// assert_eq!(positive(5), Some(5));
/// assert_eq!(positive(0), None);
/// ```
pub fn from_predicate<T, P>(predicate: P) -> impl Fn(T) -> Option<T>
where
    P: Fn(&T) -> bool,
{
    move |x| if predicate(&x) { Some(x) } else { None }
}

/// The right side of `e`, if any.
pub fn from_either<L, R>(e: Either<L, R>) -> Option<R> {
    e.right()
}

/// Project the left side of `e`.
pub fn get_left<L, R>(e: Either<L, R>) -> Option<L> {
    e.left()
}

/// Project the right side of `e`.
pub fn get_right<L, R>(e: Either<L, R>) -> Option<R> {
    e.right()
}

// Transformation

/// Functor map.
///
/// Laws: `map(o, |x| x) == o` and
/// `map(map(o, g), f) == map(o, |x| f(g(x)))`.
pub fn map<A, B, F>(o: Option<A>, f: F) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    o.map(f)
}

/// Map with a function whose result may be null; null collapses to `None`.
///
/// ```rust
/// use option_algebra::option::{from_nullable, map_nullable};
///
/// struct Inner { b: Option<&'static str> }
/// struct User { a: Option<Inner> }
///
/// let user = User { a: Some(Inner { b: Some("some") }) };
/// assert_eq!(map_nullable(from_nullable(user.a), |a| a.b), Some("some"));
///
/// let user = User { a: Some(Inner { b: None }) };
/// assert_eq!(map_nullable(from_nullable(user.a), |a| a.b), None);
/// ```
pub fn map_nullable<A, N, F>(o: Option<A>, f: F) -> Option<N::Value>
where
    N: Nullable,
    F: FnOnce(A) -> N,
{
    o.and_then(|a| f(a).into_option())
}

/// Monadic bind.
///
/// Laws: `chain(o, some) == o`, `chain(some(x), f) == f(x)` and
/// `chain(chain(o, f), g) == chain(o, |x| chain(f(x), g))`.
pub fn chain<A, B, F>(o: Option<A>, f: F) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    o.and_then(f)
}

/// Like [`chain`], but keeps the original value. `None` from `f` still
/// propagates.
///
/// ```rust
/// use option_algebra::option::chain_first;
///
/// let checked = |x: &i32| x.checked_mul(1000);
/// assert_eq!(chain_first(Some(7), checked), Some(7));
/// assert_eq!(chain_first(Some(i32::MAX), checked), None);
/// ```
pub fn chain_first<A, B, F>(o: Option<A>, f: F) -> Option<A>
where
    F: FnOnce(&A) -> Option<B>,
{
    o.and_then(|a| match f(&a) {
        Some(_) => Some(a),
        None => None,
    })
}

/// Remove exactly one level of nesting.
pub fn flatten<T>(oo: Option<Option<T>>) -> Option<T> {
    oo.flatten()
}

/// Keep `o` only if its value satisfies `predicate`.
pub fn filter<T, P>(o: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    o.filter(predicate)
}

/// Wrap once more: `Some(v)` becomes `Some(Some(v))`, `None` stays `None`.
pub fn duplicate<T>(o: Option<T>) -> Option<Option<T>> {
    o.map(Some)
}

/// Comonadic extend: `f` sees the whole option, and is called only when it
/// is a `Some`.
///
/// ```rust
/// use option_algebra::option::extend;
///
/// assert_eq!(extend(Some(2), |o: &Option<i32>| o.is_some()), Some(true));
/// assert_eq!(extend(None::<i32>, |o: &Option<i32>| o.is_some()), None);
/// ```
pub fn extend<A, B, F>(o: Option<A>, f: F) -> Option<B>
where
    F: FnOnce(&Option<A>) -> B,
{
    if o.is_some() {
        Some(f(&o))
    } else {
        None
    }
}

// Combination

/// Apply a wrapped function to a wrapped value.
pub fn ap<A, B, F>(of: Option<F>, oa: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    of.zip(oa).map(|(f, a)| f(a))
}

/// Keep the left value when both sides are `Some`.
pub fn ap_first<A, B>(oa: Option<A>, ob: Option<B>) -> Option<A> {
    oa.zip(ob).map(|(a, _)| a)
}

/// Keep the right value when both sides are `Some`.
pub fn ap_second<A, B>(oa: Option<A>, ob: Option<B>) -> Option<B> {
    oa.zip(ob).map(|(_, b)| b)
}

/// `o` if it is a `Some`, otherwise the result of `that`.
///
/// `that` is only evaluated when `o` is `None`.
pub fn alt<T, F>(o: Option<T>, that: F) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    o.or_else(that)
}

// Folding / extraction

/// Total elimination.
///
/// ```rust
/// use option_algebra::option::fold;
///
/// assert_eq!(fold(Some(1), || 0, |x| x + 1), 2);
/// assert_eq!(fold(None, || 0, |x: i32| x + 1), 0);
/// ```
pub fn fold<A, B, N, S>(o: Option<A>, on_none: N, on_some: S) -> B
where
    N: FnOnce() -> B,
    S: FnOnce(A) -> B,
{
    match o {
        Some(a) => on_some(a),
        None => on_none(),
    }
}

/// The value, or `on_none()`.
pub fn get_or_else<T, F>(o: Option<T>, on_none: F) -> T
where
    F: FnOnce() -> T,
{
    o.unwrap_or_else(on_none)
}

/// `combine(initial, v)` for `Some(v)`, `initial` for `None`.
pub fn reduce<A, B, F>(o: Option<A>, initial: B, combine: F) -> B
where
    F: FnOnce(B, A) -> B,
{
    match o {
        Some(a) => combine(initial, a),
        None => initial,
    }
}

/// Map into a monoid; `None` maps to its identity.
///
/// ```rust
/// use option_algebra::option::fold_map;
/// use option_algebra::Concat;
///
/// assert_eq!(fold_map(Some(3), Concat, |n: i32| "x".repeat(n as usize)), "xxx");
/// assert_eq!(fold_map(None, Concat, |n: i32| "x".repeat(n as usize)), "");
/// ```
pub fn fold_map<A, M, I, F>(o: Option<A>, monoid: I, f: F) -> M
where
    I: Monoid<M>,
    F: FnOnce(A) -> M,
{
    match o {
        Some(a) => f(a),
        None => monoid.empty(),
    }
}

/// `predicate(v)` for `Some(v)`, `false` for `None`.
pub fn exists<T, P>(o: &Option<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> bool,
{
    o.as_ref().is_some_and(predicate)
}

/// Is `a` the value held by `o`, according to `eq`?
pub fn elem<T, E>(o: &Option<T>, eq: &E, a: &T) -> bool
where
    E: Eq<T> + ?Sized,
{
    o.as_ref().is_some_and(|v| eq.equals(a, v))
}

/// Same as [`flatten`].
pub fn compact<T>(oo: Option<Option<T>>) -> Option<T> {
    oo.flatten()
}

/// Move `None` into band as `N`'s null sentinel.
pub fn to_nullable<N: Nullable>(o: Option<N::Value>) -> N {
    N::from_option(o)
}

/// Same as [`to_nullable`]: `None` becomes `N`'s absent sentinel.
///
/// Rust has a single absent value per [`Nullable`] type, so "undefined"
/// and "null" coincide. `Some(v)` and `None` stay distinguishable.
///
/// ```rust
/// use option_algebra::option::to_undefined;
///
/// assert_eq!(to_undefined::<Option<i32>>(Some(1)), Some(1));
/// assert_eq!(to_undefined::<Option<i32>>(None), None);
/// assert!(to_undefined::<*const u8>(None).is_null());
/// ```
pub fn to_undefined<N: Nullable>(o: Option<N::Value>) -> N {
    N::from_option(o)
}

/// Split by `predicate`: a passing value lands on the right, a failing one
/// on the left.
///
/// ```rust
/// use option_algebra::option::partition;
/// use option_algebra::Separated;
///
/// let even = |x: &i32| x % 2 == 0;
/// assert_eq!(partition(Some(2), even), Separated::new(None, Some(2)));
/// assert_eq!(partition(Some(3), even), Separated::new(Some(3), None));
/// assert_eq!(partition(None, even), Separated::new(None, None));
/// ```
pub fn partition<T, P>(o: Option<T>, predicate: P) -> Separated<Option<T>, Option<T>>
where
    P: FnOnce(&T) -> bool,
{
    match o {
        Some(a) => {
            if predicate(&a) {
                Separated::new(None, Some(a))
            } else {
                Separated::new(Some(a), None)
            }
        }
        None => Separated::new(None, None),
    }
}

/// Route the value by the side of the `Either` that `f` produces.
pub fn partition_map<A, L, R, F>(o: Option<A>, f: F) -> Separated<Option<L>, Option<R>>
where
    F: FnOnce(A) -> Either<L, R>,
{
    separate(o.map(f))
}

/// Split an optional `Either` into its two optional sides.
pub fn separate<L, R>(o: Option<Either<L, R>>) -> Separated<Option<L>, Option<R>> {
    match o {
        Some(Either::Left(l)) => Separated::new(Some(l), None),
        Some(Either::Right(r)) => Separated::new(None, Some(r)),
        None => Separated::new(None, None),
    }
}

/// `Some` of all results if `f` succeeds on every item.
///
/// Stops at the first `None`: later items are not visited.
pub fn traverse<I, A, B, F>(items: I, f: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    items.into_iter().map(f).collect()
}

/// `Some` of all values if every item is a `Some`.
pub fn sequence<I, A>(items: I) -> Option<Vec<A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    items.into_iter().collect()
}
