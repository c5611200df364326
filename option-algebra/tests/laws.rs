//! Property-based tests for the algebraic laws of the `Option` combinators
//! and of the lifted instances.

use either::Either::{Left, Right};
use option_algebra::instances::{
    get_apply_monoid, get_apply_semigroup, get_eq, get_first_monoid, get_last_monoid, get_monoid,
    get_ord,
};
use option_algebra::option::{
    ap, ap_first, ap_second, chain, flatten, fold, get_or_else, map, partition, partition_map,
    some,
};
use option_algebra::{Eq, Monoid, Natural, Ord, Semigroup, Sum};
use proptest::prelude::*;
use std::cmp::Ordering;

fn small() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-1_000_000i64..1_000_000)
}

fn half(x: i64) -> Option<i64> {
    if x % 2 == 0 {
        Some(x / 2)
    } else {
        None
    }
}

fn dec(x: i64) -> Option<i64> {
    if x > 0 {
        Some(x - 1)
    } else {
        None
    }
}

/// Equality modulo 5, to exercise a base `Eq` that is coarser than `==`.
struct Mod5;

impl Eq<i64> for Mod5 {
    fn equals(&self, x: &i64, y: &i64) -> bool {
        x.rem_euclid(5) == y.rem_euclid(5)
    }
}

// =============================================================================
// Functor and monad
// =============================================================================

proptest! {
    #[test]
    fn functor_identity(o in small()) {
        prop_assert_eq!(map(o, |x| x), o);
    }

    #[test]
    fn functor_composition(o in small()) {
        let f = |x: i64| x.wrapping_mul(3);
        let g = |x: i64| x.wrapping_add(7);
        prop_assert_eq!(map(map(o, g), f), map(o, |x| f(g(x))));
    }

    #[test]
    fn monad_left_identity(x in any::<i64>()) {
        prop_assert_eq!(chain(some(x), half), half(x));
    }

    #[test]
    fn monad_right_identity(o in small()) {
        prop_assert_eq!(chain(o, some), o);
    }

    #[test]
    fn monad_associativity(o in small()) {
        prop_assert_eq!(chain(chain(o, half), dec), chain(o, |x| chain(half(x), dec)));
    }

    #[test]
    fn flatten_removes_one_level(x in any::<i64>()) {
        prop_assert_eq!(flatten(some(some(x))), some(x));
        prop_assert_eq!(flatten(some(None::<i64>)), None);
        prop_assert_eq!(flatten(flatten(some(some(some(x))))), some(x));
    }

    #[test]
    fn get_or_else_round_trip(x in any::<i64>(), d in any::<i64>()) {
        prop_assert_eq!(get_or_else(some(x), || d), x);
        prop_assert_eq!(get_or_else(None, || d), d);
    }

    #[test]
    fn fold_is_total(o in small()) {
        let r = fold(o, || 0, |x| x + 1);
        prop_assert_eq!(r, o.map_or(0, |x| x + 1));
    }
}

// =============================================================================
// Apply family
// =============================================================================

proptest! {
    #[test]
    fn ap_family_short_circuits(a in small(), b in small()) {
        let both = a.is_some() && b.is_some();
        let f = a.map(|x| move |y: i64| x.wrapping_sub(y));
        prop_assert_eq!(ap(f, b).is_some(), both);
        prop_assert_eq!(ap_first(a, b).is_some(), both);
        prop_assert_eq!(ap_second(a, b).is_some(), both);
        if both {
            prop_assert_eq!(ap_first(a, b), a);
            prop_assert_eq!(ap_second(a, b), b);
        }
    }
}

// =============================================================================
// Partition
// =============================================================================

proptest! {
    #[test]
    fn partition_is_exclusive(o in small()) {
        let s = partition(o, |x| *x >= 0);
        let count = usize::from(s.left.is_some()) + usize::from(s.right.is_some());
        prop_assert_eq!(count, usize::from(o.is_some()));
        prop_assert_eq!(s.left.or(s.right), o);
    }

    #[test]
    fn partition_map_is_exclusive(o in small()) {
        let s = partition_map(o, |x| if x % 3 == 0 { Left(x) } else { Right(x.to_string()) });
        let count = usize::from(s.left.is_some()) + usize::from(s.right.is_some());
        prop_assert_eq!(count, usize::from(o.is_some()));
    }
}

// =============================================================================
// Eq and Ord
// =============================================================================

proptest! {
    #[test]
    fn eq_is_an_equivalence(a in small(), b in small(), c in small()) {
        let e = get_eq(Mod5);
        prop_assert!(e.equals(&a, &a));
        prop_assert_eq!(e.equals(&a, &b), e.equals(&b, &a));
        if e.equals(&a, &b) && e.equals(&b, &c) {
            prop_assert!(e.equals(&a, &c));
        }
    }

    #[test]
    fn ord_puts_none_below_every_some(x in any::<i64>()) {
        let o = get_ord(Natural);
        prop_assert_eq!(o.compare(&None, &Some(x)), Ordering::Less);
        prop_assert_eq!(o.compare(&Some(x), &None), Ordering::Greater);
    }

    #[test]
    fn ord_agrees_with_base_on_somes(x in any::<i64>(), y in any::<i64>()) {
        let o = get_ord(Natural);
        prop_assert_eq!(o.compare(&Some(x), &Some(y)), x.cmp(&y));
    }

    #[test]
    fn ord_is_antisymmetric_and_consistent(a in small(), b in small()) {
        let o = get_ord(Natural);
        prop_assert_eq!(o.compare(&a, &b), o.compare(&b, &a).reverse());
        prop_assert_eq!(o.compare(&a, &b) == Ordering::Equal, o.equals(&a, &b));
    }
}

// =============================================================================
// Monoids
// =============================================================================

fn assert_monoid_laws<M>(
    m: &M,
    a: &Option<i64>,
    b: &Option<i64>,
    c: &Option<i64>,
) -> Result<(), TestCaseError>
where
    M: Monoid<Option<i64>>,
{
    prop_assert_eq!(m.concat(&m.concat(a, b), c), m.concat(a, &m.concat(b, c)));
    prop_assert_eq!(m.concat(&m.empty(), a), *a);
    prop_assert_eq!(m.concat(a, &m.empty()), *a);
    Ok(())
}

proptest! {
    #[test]
    fn lifted_monoid_laws(a in small(), b in small(), c in small()) {
        assert_monoid_laws(&get_monoid(Sum), &a, &b, &c)?;
    }

    #[test]
    fn apply_monoid_laws(a in small(), b in small(), c in small()) {
        assert_monoid_laws(&get_apply_monoid(Sum), &a, &b, &c)?;
    }

    #[test]
    fn first_monoid_laws(a in small(), b in small(), c in small()) {
        assert_monoid_laws(&get_first_monoid(), &a, &b, &c)?;
    }

    #[test]
    fn last_monoid_laws(a in small(), b in small(), c in small()) {
        assert_monoid_laws(&get_last_monoid(), &a, &b, &c)?;
    }

    #[test]
    fn apply_semigroup_is_associative_and_absorbing(a in small(), b in small(), c in small()) {
        let s = get_apply_semigroup(Sum);
        prop_assert_eq!(s.concat(&s.concat(&a, &b), &c), s.concat(&a, &s.concat(&b, &c)));
        prop_assert_eq!(s.concat(&a, &None), None);
        prop_assert_eq!(s.concat(&None, &a), None);
    }

    #[test]
    fn lifted_monoid_absorbs_none(a in small()) {
        let m = get_monoid(Sum);
        prop_assert_eq!(m.concat(&a, &None), a);
        prop_assert_eq!(m.concat(&None, &a), a);
    }
}
