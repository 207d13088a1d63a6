//! Property-based tests for the type class instances.
//!
//! - **Functor**: identity and composition
//! - **Applicative**: identity and homomorphism through `pure`/`map2`
//! - **Monad**: left identity, right identity, associativity
//! - **Bifunctor**: identity and first/second consistency
//! - **Semigroup**: associativity
//! - **Monoid**: left and right identity

use maybe_result::typeclass::{
    Applicative, Bifunctor, Functor, Monad, Monoid, Semigroup,
};
use maybe_result::{AggregateFailure, Failure, Maybe, Outcome, Unit};
use proptest::prelude::*;

type Checked<S> = Outcome<S, Failure>;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn failure_strategy() -> impl Strategy<Value = Failure> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(Failure::new),
        prop::collection::vec("[a-z]{1,6}", 2..4).prop_map(|messages| {
            Failure::Aggregate(AggregateFailure::from_failures(messages.into_iter().map(Failure::new)))
        }),
    ]
}

fn aggregate_strategy() -> impl Strategy<Value = AggregateFailure> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
        .prop_map(|messages| AggregateFailure::from_failures(messages.into_iter().map(Failure::new)))
}

fn outcome_strategy() -> impl Strategy<Value = Checked<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        failure_strategy().prop_map(Outcome::failure),
    ]
}

fn halve_even(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() }
}

fn checked_negate(value: i32) -> Checked<i32> {
    value
        .checked_neg()
        .map_or_else(|| Outcome::failure(Failure::new("overflow")), Outcome::success)
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.fmap(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_functor_composition(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(maybe.fmap(function1).fmap(function2), maybe.fmap(|x| function2(function1(x))));
    }

    #[test]
    fn prop_outcome_functor_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().fmap(|x| x), outcome);
    }

    #[test]
    fn prop_outcome_functor_composition(outcome in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| i64::from(n) * 3;
        prop_assert_eq!(
            outcome.clone().fmap(function1).fmap(function2),
            outcome.fmap(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_fmap_ref_agrees_with_fmap(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.fmap_ref(|x| x.wrapping_add(1)), outcome.fmap(|x| x.wrapping_add(1)));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_applicative_identity(maybe in maybe_strategy()) {
        let lifted: Maybe<()> = <Maybe<()>>::pure(());
        prop_assert_eq!(lifted.map2(maybe, |(), x| x), maybe);
    }

    #[test]
    fn prop_maybe_applicative_homomorphism(left: i32, right: i32) {
        let combined = <Maybe<()>>::pure(left).map2(Maybe::some(right), i32::wrapping_add);
        prop_assert_eq!(combined, <Maybe<()>>::pure(left.wrapping_add(right)));
    }

    #[test]
    fn prop_outcome_applicative_identity(outcome in outcome_strategy()) {
        let lifted: Checked<()> = <Checked<()>>::pure(());
        prop_assert_eq!(lifted.map2(outcome.clone(), |(), x| x), outcome);
    }

    #[test]
    fn prop_outcome_product_keeps_the_first_failure(left in outcome_strategy(), right in outcome_strategy()) {
        let expected = match (&left, &right) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::success((*a, *b)),
            (Outcome::Failure(failure), _) | (_, Outcome::Failure(failure)) => Outcome::failure(failure.clone()),
        };
        prop_assert_eq!(left.product(right), expected);
    }
}

// =============================================================================
// Monad
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_monad_left_identity(value: i32) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(halve_even), halve_even(value));
    }

    #[test]
    fn prop_maybe_monad_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.flat_map(<Maybe<()>>::pure), maybe);
    }

    #[test]
    fn prop_maybe_monad_associativity(maybe in maybe_strategy()) {
        let function = |n: i32| Maybe::some(n.wrapping_add(3));
        prop_assert_eq!(
            maybe.flat_map(halve_even).flat_map(function),
            maybe.flat_map(|x| halve_even(x).flat_map(function))
        );
    }

    #[test]
    fn prop_outcome_monad_left_identity(value: i32) {
        prop_assert_eq!(<Checked<()>>::pure(value).flat_map(checked_negate), checked_negate(value));
    }

    #[test]
    fn prop_outcome_monad_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().flat_map(<Checked<()>>::pure), outcome);
    }

    #[test]
    fn prop_outcome_monad_associativity(outcome in outcome_strategy()) {
        let function = |n: i32| -> Checked<i32> { Outcome::success(n / 2) };
        prop_assert_eq!(
            outcome.clone().flat_map(checked_negate).flat_map(function),
            outcome.flat_map(|x| checked_negate(x).flat_map(function))
        );
    }
}

// =============================================================================
// Bifunctor
// =============================================================================

proptest! {
    #[test]
    fn prop_bifunctor_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(outcome.clone(), |x| x, |f| f), outcome);
    }

    #[test]
    fn prop_bifunctor_first_second_consistency(outcome in outcome_strategy()) {
        let success = |n: i32| n.wrapping_mul(5);
        let failure = |f: Failure| f.message().len();
        let both = Bifunctor::bimap(outcome.clone(), success, failure);
        prop_assert_eq!(&both, &outcome.clone().first(success).second(failure));
        prop_assert_eq!(&both, &outcome.second(failure).first(success));
    }
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

proptest! {
    #[test]
    fn prop_failure_semigroup_associativity(
        a in failure_strategy(),
        b in failure_strategy(),
        c in failure_strategy(),
    ) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_aggregate_semigroup_associativity(
        a in aggregate_strategy(),
        b in aggregate_strategy(),
        c in aggregate_strategy(),
    ) {
        let left = Semigroup::combine(Semigroup::combine(a.clone(), b.clone()), c.clone());
        let right = Semigroup::combine(a, Semigroup::combine(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_aggregate_monoid_identity(value in aggregate_strategy()) {
        prop_assert_eq!(Semigroup::combine(AggregateFailure::empty(), value.clone()), value.clone());
        prop_assert_eq!(Semigroup::combine(value.clone(), AggregateFailure::empty()), value);
    }

    #[test]
    fn prop_maybe_semigroup_associativity(
        a in prop::option::of(failure_strategy()),
        b in prop::option::of(failure_strategy()),
        c in prop::option::of(failure_strategy()),
    ) {
        let (a, b, c) = (Maybe::from(a), Maybe::from(b), Maybe::from(c));
        let left = Semigroup::combine(Semigroup::combine(a.clone(), b.clone()), c.clone());
        let right = Semigroup::combine(a, Semigroup::combine(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_monoid_identity(value in prop::option::of(failure_strategy())) {
        let value = Maybe::from(value);
        prop_assert_eq!(Semigroup::combine(Maybe::empty(), value.clone()), value.clone());
        prop_assert_eq!(Semigroup::combine(value.clone(), Maybe::empty()), value);
    }

    #[test]
    fn prop_combine_all_matches_reduce_all(values in prop::collection::vec(aggregate_strategy(), 1..6)) {
        let combined = AggregateFailure::combine_all(values.clone());
        prop_assert_eq!(Some(combined), AggregateFailure::reduce_all(values));
    }
}

#[test]
fn unit_is_a_trivial_monoid() {
    assert_eq!(Semigroup::combine(Unit, Unit::empty()), Unit);
    assert!(Unit.is_empty_value());
}
