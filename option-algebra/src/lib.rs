#![deny(missing_docs)]
//! # option-algebra — the algebra of optional values
//!
//! This crate treats [`Option<T>`](Option) as an algebraic data type and
//! provides its combinators together with the typeclass instances that
//! lift a base instance on `T` to one on `Option<T>`.
//!
//! Typeclasses are **records passed by value**, not traits implemented on
//! the carrier type. An instance is an ordinary value (usually a
//! zero-sized struct) and the carrier is a type parameter of the trait:
//!
//! - [`Eq<A>`]: equivalence on `A`
//! - [`Ord<A>`]: total order on `A`
//! - [`Semigroup<A>`]: associative `concat` on `A`
//! - [`Monoid<A>`]: semigroup with an identity element
//!
//! This lets one carrier have many instances (`i32` under [`Sum`] and
//! under [`Product`]) without newtype wrappers.
//!
//! ## Quick start
//!
//! ```rust
//! use option_algebra::instances::{get_apply_semigroup, get_monoid, get_ord};
//! use option_algebra::{Monoid, Natural, Ord, Semigroup, Sum};
//! use std::cmp::Ordering;
//!
//! // Lifted monoid: `None` is the identity, `Some`s combine.
//! let m = get_monoid(Sum);
//! assert_eq!(m.concat(&Some(1), &None), Some(1));
//! assert_eq!(m.concat(&Some(1), &Some(2)), Some(3));
//! assert_eq!(m.empty(), None::<i32>);
//!
//! // Apply semigroup: any `None` short-circuits.
//! let s = get_apply_semigroup(Sum);
//! assert_eq!(s.concat(&Some(1), &None), None);
//!
//! // `None` sorts before every `Some`.
//! let o = get_ord(Natural);
//! assert_eq!(o.compare(&None, &Some(i32::MIN)), Ordering::Less);
//! ```
//!
//! ## Modules
//!
//! - [`option`]: constructors, combinators and eliminators over `Option`
//! - [`instances`]: lifted `Eq`/`Ord`/`Semigroup`/`Monoid` instances and
//!   refinements
//! - [`nullable`]: types carrying an in-band null sentinel
//! - [`catch`]: converting a panicking thunk into `None`
//!
//! ## Base instances
//!
//! - [`Natural`]: `Eq`/`Ord` from the standard `PartialEq`/`Ord`
//! - [`Sum`], [`Product`]: numeric monoids (via `num-traits`)
//! - [`Concat`]: `String`/`Vec` concatenation monoid
//! - [`First`], [`Last`]: left/right projection semigroups
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`option::Separated`],
//!   [`catch::Panicked`] and the zero-sized base instances.

// Make the current crate visible as `option_algebra` for consistency
extern crate self as option_algebra;

pub mod catch;
pub mod instances;
pub mod nullable;
pub mod option;

pub use catch::Panicked;
pub use nullable::Nullable;
pub use option::Separated;

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::ops::{Add, Mul};

/// An **equivalence** on `A`.
///
/// Laws (not enforced by type system):
///
/// - **Reflexive**: `equals(a, a)`
/// - **Symmetric**: `equals(a, b) == equals(b, a)`
/// - **Transitive**: `equals(a, b) && equals(b, c)` implies `equals(a, c)`
///
/// # Example
///
/// ```rust
/// use option_algebra::Eq;
///
/// // Case-insensitive string equality
/// struct IgnoreCase;
///
/// impl Eq<str> for IgnoreCase {
///     fn equals(&self, x: &str, y: &str) -> bool {
///         x.eq_ignore_ascii_case(y)
///     }
/// }
///
/// assert!(IgnoreCase.equals("Rust", "rUST"));
/// assert!(!IgnoreCase.equals("Rust", "Go"));
/// ```
pub trait Eq<A: ?Sized> {
    /// Are `x` and `y` equivalent?
    fn equals(&self, x: &A, y: &A) -> bool;
}

/// A **total order** on `A`.
///
/// Laws (not enforced by type system):
///
/// - **Totality**: exactly one of `Less`, `Equal`, `Greater`
/// - **Antisymmetry**: `compare(a, b) == compare(b, a).reverse()`
/// - **Transitivity**: `a ≤ b` and `b ≤ c` implies `a ≤ c`
/// - **Consistency**: `compare(a, b) == Equal` iff `equals(a, b)`
pub trait Ord<A: ?Sized>: Eq<A> {
    /// Compare `x` with `y`.
    ///
    /// `Ordering as i8` gives the conventional `-1`/`0`/`1`.
    fn compare(&self, x: &A, y: &A) -> Ordering;
}

/// A **semigroup** on `A`: an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `concat(concat(a, b), c) == concat(a, concat(b, c))`
///
/// # Example
///
/// ```rust
/// use option_algebra::Semigroup;
///
/// struct Max;
///
/// impl Semigroup<i32> for Max {
///     fn concat(&self, x: &i32, y: &i32) -> i32 {
///         *x.max(y)
///     }
/// }
///
/// assert_eq!(Max.concat(&Max.concat(&3, &5), &2), Max.concat(&3, &Max.concat(&5, &2)));
/// ```
pub trait Semigroup<A> {
    /// Combine two elements associatively.
    fn concat(&self, x: &A, y: &A) -> A;
}

/// A **monoid** on `A`: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `concat(concat(a, b), c) == concat(a, concat(b, c))`
/// - **Left identity**: `concat(empty(), a) == a`
/// - **Right identity**: `concat(a, empty()) == a`
///
/// # Example
///
/// ```rust
/// use option_algebra::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum.concat(&Sum.empty(), &7), 7);
/// assert_eq!(Sum.concat_all(vec![1, 2, 3]), 6);
/// assert_eq!(Sum.concat_all(Vec::<i32>::new()), 0);
/// ```
pub trait Monoid<A>: Semigroup<A> {
    /// The identity element.
    fn empty(&self) -> A;

    /// Fold an iterator using `concat`, starting from `empty`.
    fn concat_all<I>(&self, iter: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        iter.into_iter()
            .fold(self.empty(), |acc, x| self.concat(&acc, &x))
    }
}

// Instances can be passed by reference wherever they are expected by value.

impl<A: ?Sized, E: Eq<A> + ?Sized> Eq<A> for &E {
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

impl<A: ?Sized, O: Ord<A> + ?Sized> Ord<A> for &O {
    fn compare(&self, x: &A, y: &A) -> Ordering {
        (**self).compare(x, y)
    }
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for &S {
    fn concat(&self, x: &A, y: &A) -> A {
        (**self).concat(x, y)
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    fn empty(&self) -> A {
        (**self).empty()
    }
}

// Base instances

/// `Eq`/`Ord` instances taken from the standard `PartialEq`/`Ord` impls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Natural;

impl<A: PartialEq + ?Sized> Eq<A> for Natural {
    fn equals(&self, x: &A, y: &A) -> bool {
        x == y
    }
}

impl<A: std::cmp::Ord + ?Sized> Ord<A> for Natural {
    fn compare(&self, x: &A, y: &A) -> Ordering {
        x.cmp(y)
    }
}

/// Additive semigroup and monoid (`empty` is zero).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum;

impl<A: Add<Output = A> + Clone> Semigroup<A> for Sum {
    fn concat(&self, x: &A, y: &A) -> A {
        x.clone() + y.clone()
    }
}

impl<A: Zero + Clone> Monoid<A> for Sum {
    fn empty(&self) -> A {
        A::zero()
    }
}

/// Multiplicative semigroup and monoid (`empty` is one).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product;

impl<A: Mul<Output = A> + Clone> Semigroup<A> for Product {
    fn concat(&self, x: &A, y: &A) -> A {
        x.clone() * y.clone()
    }
}

impl<A: One + Clone> Monoid<A> for Product {
    fn empty(&self) -> A {
        A::one()
    }
}

/// Concatenation of strings and vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concat;

impl Semigroup<String> for Concat {
    fn concat(&self, x: &String, y: &String) -> String {
        let mut out = String::with_capacity(x.len() + y.len());
        out.push_str(x);
        out.push_str(y);
        out
    }
}

impl Monoid<String> for Concat {
    fn empty(&self) -> String {
        String::new()
    }
}

impl<T: Clone> Semigroup<Vec<T>> for Concat {
    fn concat(&self, x: &Vec<T>, y: &Vec<T>) -> Vec<T> {
        x.iter().chain(y).cloned().collect()
    }
}

impl<T: Clone> Monoid<Vec<T>> for Concat {
    fn empty(&self) -> Vec<T> {
        Vec::new()
    }
}

/// Keeps the left operand. Associative, but has no identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First;

impl<A: Clone> Semigroup<A> for First {
    fn concat(&self, x: &A, _y: &A) -> A {
        x.clone()
    }
}

/// Keeps the right operand. Associative, but has no identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last;

impl<A: Clone> Semigroup<A> for Last {
    fn concat(&self, _x: &A, y: &A) -> A {
        y.clone()
    }
}
