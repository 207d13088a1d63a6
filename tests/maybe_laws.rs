//! Property-based tests for the `Maybe` combinators.
//!
//! - **Identity**: `m.map(|x| x) == m`
//! - **Left Identity**: `Maybe::some(a).bind(f) == f(a)`
//! - **Right Identity**: `m.bind(Maybe::some) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! Plus the behavior of the absent branch and of the sequence helpers.

use std::cell::Cell;

use maybe_result::{Maybe, MaybeIteratorExt, MaybeValue, somes};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn halve_even(value: i32) -> Maybe<i32> {
    if value % 2 == 0 {
        Maybe::some(value / 2)
    } else {
        Maybe::none()
    }
}

fn positive(value: i32) -> Maybe<i32> {
    if value > 0 { Maybe::some(value) } else { Maybe::none() }
}

// =============================================================================
// Functor / Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_map_composition(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = maybe.map(function1).map(function2);
        let right = maybe.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_bind_left_identity(value: i32) {
        prop_assert_eq!(Maybe::some(value).bind(halve_even), halve_even(value));
    }

    #[test]
    fn prop_bind_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.bind(Maybe::some), maybe);
    }

    #[test]
    fn prop_bind_associativity(maybe in maybe_strategy()) {
        let left = maybe.bind(halve_even).bind(positive);
        let right = maybe.bind(|x| halve_even(x).bind(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_absent_value_never_invokes_the_function(any_function_input: i32) {
        let calls = Cell::new(0);
        let mapped = Maybe::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x.wrapping_add(any_function_input)
        });
        prop_assert!(mapped.is_none());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_exactly_one_branch_is_reported(maybe in maybe_strategy()) {
        prop_assert!(maybe.is_some() != maybe.is_none());
    }

    #[test]
    fn prop_fold_runs_exactly_one_function(maybe in maybe_strategy()) {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);
        maybe.fold(|_| some_calls.set(some_calls.get() + 1), || none_calls.set(none_calls.get() + 1));
        prop_assert_eq!(some_calls.get() + none_calls.get(), 1);
    }

    #[test]
    fn prop_bind_none_only_replaces_absent_values(maybe in maybe_strategy(), fallback: i32) {
        let replaced = maybe.bind_none(|| Maybe::some(fallback));
        let expected = if maybe.is_some() { maybe } else { Maybe::some(fallback) };
        prop_assert_eq!(replaced, expected);
    }

    #[test]
    fn prop_combine_is_present_only_when_both_are(left in maybe_strategy(), right in maybe_strategy()) {
        let combined = left.combine(right, i32::wrapping_add);
        prop_assert_eq!(combined.is_some(), left.is_some() && right.is_some());
    }

    #[test]
    fn prop_projection_round_trip(maybe in maybe_strategy()) {
        let restored: Maybe<i32> = maybe.into_maybe_value().into();
        prop_assert_eq!(restored, maybe);
    }

    #[test]
    fn prop_option_round_trip(option in any::<Option<i32>>()) {
        prop_assert_eq!(Maybe::from(option).into_option(), option);
    }
}

// =============================================================================
// Sequences
// =============================================================================

proptest! {
    #[test]
    fn prop_somes_matches_flattened_options(options in prop::collection::vec(any::<Option<i32>>(), 0..32)) {
        let expected: Vec<i32> = options.iter().flatten().copied().collect();
        let collected: Vec<i32> = somes(options.into_iter().map(Maybe::from)).collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn prop_somes_extension_agrees_with_free_function(options in prop::collection::vec(any::<Option<i32>>(), 0..32)) {
        let free: Vec<i32> = somes(options.iter().copied().map(Maybe::from)).collect();
        let extension: Vec<i32> = options.into_iter().map(Maybe::from).somes().collect();
        prop_assert_eq!(free, extension);
    }
}

#[test]
fn borrowed_projection_matches_the_branch() {
    let present = Maybe::some(7);
    match present.as_maybe_value() {
        MaybeValue::Some(value) => assert_eq!(**value.value(), 7),
        MaybeValue::None(_) => panic!("expected a present value"),
    }
}
