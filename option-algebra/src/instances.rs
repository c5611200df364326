//! Typeclass instances for `Option<A>`, lifted from an instance on `A`.
//!
//! | Constructor | Instance | Identity | `Some ⊕ None` |
//! |---|---|---|---|
//! | [`get_eq`] | `Eq<Option<A>>` | | |
//! | [`get_ord`] | `Ord<Option<A>>` (`None` least) | | |
//! | [`get_monoid`] | `Monoid<Option<A>>` | `None` | `Some` |
//! | [`get_apply_semigroup`] | `Semigroup<Option<A>>` | | `None` |
//! | [`get_apply_monoid`] | `Monoid<Option<A>>` | `Some(empty)` | `None` |
//! | [`get_first_monoid`] | `Monoid<Option<A>>` | `None` | leftmost `Some` |
//! | [`get_last_monoid`] | `Monoid<Option<A>>` | `None` | rightmost `Some` |
//!
//! [`get_refinement`] is the odd one out: it turns a narrowing function
//! into a reusable type test.

use crate::{Eq, Monoid, Ord, Semigroup};
use std::cmp::Ordering;
use std::marker::PhantomData;

/// `Eq<Option<A>>` from `Eq<A>`. See [`get_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionEq<E> {
    base: E,
}

/// Two options are equal iff both are `None`, or both are `Some` with
/// payloads equal under `base`.
///
/// ```rust
/// use option_algebra::instances::get_eq;
/// use option_algebra::{Eq, Natural};
///
/// let e = get_eq(Natural);
/// assert!(e.equals(&None::<i32>, &None));
/// assert!(!e.equals(&Some(1), &None));
/// assert!(!e.equals(&Some(1), &Some(2)));
/// assert!(e.equals(&Some(1), &Some(1)));
/// ```
pub fn get_eq<E>(base: E) -> OptionEq<E> {
    OptionEq { base }
}

impl<A, E: Eq<A>> Eq<Option<A>> for OptionEq<E> {
    fn equals(&self, x: &Option<A>, y: &Option<A>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => self.base.equals(a, b),
            _ => false,
        }
    }
}

/// `Ord<Option<A>>` from `Ord<A>`. See [`get_ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionOrd<O> {
    base: O,
}

/// `None` is less than every `Some`; `Some`s compare by `base`.
///
/// ```rust
/// use option_algebra::instances::get_ord;
/// use option_algebra::{Natural, Ord};
/// use std::cmp::Ordering;
///
/// let o = get_ord(Natural);
/// assert_eq!(o.compare(&None::<i32>, &None), Ordering::Equal);
/// assert_eq!(o.compare(&Some(1), &None), Ordering::Greater);
/// assert_eq!(o.compare(&None, &Some(1)), Ordering::Less);
/// assert_eq!(o.compare(&Some(1), &Some(1)), Ordering::Equal);
/// assert_eq!(o.compare(&Some(2), &Some(1)), Ordering::Greater);
/// ```
pub fn get_ord<O>(base: O) -> OptionOrd<O> {
    OptionOrd { base }
}

impl<A, O: Eq<A>> Eq<Option<A>> for OptionOrd<O> {
    fn equals(&self, x: &Option<A>, y: &Option<A>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => self.base.equals(a, b),
            _ => false,
        }
    }
}

impl<A, O: Ord<A>> Ord<Option<A>> for OptionOrd<O> {
    fn compare(&self, x: &Option<A>, y: &Option<A>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.base.compare(a, b),
        }
    }
}

/// Lifted monoid, `None` as identity. See [`get_monoid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionMonoid<S> {
    base: S,
}

/// `Monoid<Option<A>>` from any `Semigroup<A>`: `None` is the identity and
/// two `Some`s combine under `base`.
///
/// This freely adds an identity to a semigroup, so `base` need not be a
/// monoid itself.
///
/// ```rust
/// use option_algebra::instances::get_monoid;
/// use option_algebra::{Monoid, Semigroup, Sum};
///
/// let m = get_monoid(Sum);
/// assert_eq!(m.concat(&None, &None::<i32>), None);
/// assert_eq!(m.concat(&Some(1), &None), Some(1));
/// assert_eq!(m.concat(&None, &Some(2)), Some(2));
/// assert_eq!(m.concat(&Some(1), &Some(1)), Some(2));
/// assert_eq!(m.concat_all([Some(1), None, Some(3)]), Some(4));
/// ```
pub fn get_monoid<S>(base: S) -> OptionMonoid<S> {
    OptionMonoid { base }
}

impl<A: Clone, S: Semigroup<A>> Semigroup<Option<A>> for OptionMonoid<S> {
    fn concat(&self, x: &Option<A>, y: &Option<A>) -> Option<A> {
        match (x, y) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(self.base.concat(a, b)),
        }
    }
}

impl<A: Clone, S: Semigroup<A>> Monoid<Option<A>> for OptionMonoid<S> {
    fn empty(&self) -> Option<A> {
        None
    }
}

/// Short-circuiting semigroup. See [`get_apply_semigroup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplySemigroup<S> {
    base: S,
}

/// Combine under `base` when both sides are `Some`; any `None` makes the
/// result `None`.
///
/// ```rust
/// use option_algebra::instances::get_apply_semigroup;
/// use option_algebra::{Semigroup, Sum};
///
/// let s = get_apply_semigroup(Sum);
/// assert_eq!(s.concat(&None::<i32>, &None), None);
/// assert_eq!(s.concat(&Some(1), &None), None);
/// assert_eq!(s.concat(&None, &Some(1)), None);
/// assert_eq!(s.concat(&Some(1), &Some(2)), Some(3));
/// ```
pub fn get_apply_semigroup<S>(base: S) -> ApplySemigroup<S> {
    ApplySemigroup { base }
}

fn apply_concat<A, S: Semigroup<A>>(base: &S, x: &Option<A>, y: &Option<A>) -> Option<A> {
    match (x, y) {
        (Some(a), Some(b)) => Some(base.concat(a, b)),
        _ => None,
    }
}

impl<A, S: Semigroup<A>> Semigroup<Option<A>> for ApplySemigroup<S> {
    fn concat(&self, x: &Option<A>, y: &Option<A>) -> Option<A> {
        apply_concat(&self.base, x, y)
    }
}

/// Short-circuiting monoid. See [`get_apply_monoid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplyMonoid<M> {
    base: M,
}

/// [`get_apply_semigroup`] with identity `Some(base.empty())`.
///
/// ```rust
/// use option_algebra::instances::get_apply_monoid;
/// use option_algebra::{Monoid, Semigroup, Sum};
///
/// let m = get_apply_monoid(Sum);
/// assert_eq!(m.concat(&Some(1), &None), None);
/// assert_eq!(m.concat(&Some(1), &Some(1)), Some(2));
/// assert_eq!(m.concat(&Some(1), &m.empty()), Some(1));
/// ```
pub fn get_apply_monoid<M>(base: M) -> ApplyMonoid<M> {
    ApplyMonoid { base }
}

impl<A, M: Semigroup<A>> Semigroup<Option<A>> for ApplyMonoid<M> {
    fn concat(&self, x: &Option<A>, y: &Option<A>) -> Option<A> {
        apply_concat(&self.base, x, y)
    }
}

impl<A, M: Monoid<A>> Monoid<Option<A>> for ApplyMonoid<M> {
    fn empty(&self) -> Option<A> {
        Some(self.base.empty())
    }
}

/// Leftmost-`Some` monoid. See [`get_first_monoid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstMonoid;

/// Identity `None`; keeps the first `Some`.
///
/// ```rust
/// use option_algebra::instances::get_first_monoid;
/// use option_algebra::Semigroup;
///
/// let m = get_first_monoid();
/// assert_eq!(m.concat(&Some(1), &None), Some(1));
/// assert_eq!(m.concat(&None, &Some(1)), Some(1));
/// assert_eq!(m.concat(&Some(1), &Some(2)), Some(1));
/// assert_eq!(m.concat(&None::<i32>, &None), None);
/// ```
pub fn get_first_monoid() -> FirstMonoid {
    FirstMonoid
}

impl<A: Clone> Semigroup<Option<A>> for FirstMonoid {
    fn concat(&self, x: &Option<A>, y: &Option<A>) -> Option<A> {
        x.as_ref().or(y.as_ref()).cloned()
    }
}

impl<A: Clone> Monoid<Option<A>> for FirstMonoid {
    fn empty(&self) -> Option<A> {
        None
    }
}

/// Rightmost-`Some` monoid. See [`get_last_monoid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastMonoid;

/// Identity `None`; keeps the last `Some`.
pub fn get_last_monoid() -> LastMonoid {
    LastMonoid
}

impl<A: Clone> Semigroup<Option<A>> for LastMonoid {
    fn concat(&self, x: &Option<A>, y: &Option<A>) -> Option<A> {
        y.as_ref().or(x.as_ref()).cloned()
    }
}

impl<A: Clone> Monoid<Option<A>> for LastMonoid {
    fn empty(&self) -> Option<A> {
        None
    }
}

/// A type test derived from a narrowing function. See [`get_refinement`].
pub struct Refinement<C: ?Sized, A: ?Sized, F> {
    classify: F,
    _marker: PhantomData<fn(&C) -> Option<&A>>,
}

// Bounded on `F` only: `C` and `A` appear behind a function pointer.

impl<C: ?Sized, A: ?Sized, F: Clone> Clone for Refinement<C, A, F> {
    fn clone(&self) -> Self {
        Refinement {
            classify: self.classify.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C: ?Sized, A: ?Sized, F: Copy> Copy for Refinement<C, A, F> {}

/// Turn `classify`, which narrows a `C` to its `A` part when there is
/// one, into a reusable test.
///
/// ```rust
/// use option_algebra::instances::get_refinement;
///
/// enum Shape {
///     Circle { radius: f64 },
///     Square { side: f64 },
/// }
///
/// let radius = get_refinement(|s: &Shape| match s {
///     Shape::Circle { radius } => Some(radius),
///     Shape::Square { .. } => None,
/// });
///
/// let shapes = [Shape::Circle { radius: 1.0 }, Shape::Square { side: 2.0 }];
/// assert!(radius.test(&shapes[0]));
/// assert!(!radius.test(&shapes[1]));
/// assert_eq!(radius.narrow(&shapes[0]), Some(&1.0));
/// assert_eq!(shapes.iter().filter(|s| radius.test(s)).count(), 1);
/// ```
pub fn get_refinement<C, A, F>(classify: F) -> Refinement<C, A, F>
where
    C: ?Sized,
    A: ?Sized,
    F: Fn(&C) -> Option<&A>,
{
    Refinement {
        classify,
        _marker: PhantomData,
    }
}

impl<C, A, F> Refinement<C, A, F>
where
    C: ?Sized,
    A: ?Sized,
    F: Fn(&C) -> Option<&A>,
{
    /// Does `c` belong to the narrowed variant?
    pub fn test(&self, c: &C) -> bool {
        (self.classify)(c).is_some()
    }

    /// The narrowed view of `c`, if it has one.
    pub fn narrow<'c>(&self, c: &'c C) -> Option<&'c A> {
        (self.classify)(c)
    }

    /// The test as a plain predicate closure.
    pub fn predicate(&self) -> impl Fn(&C) -> bool + '_ {
        move |c: &C| self.test(c)
    }
}
