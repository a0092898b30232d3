#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == compose!(f, identity) == f`,
//!   and `compose!()` is the identity
//! - **Order**: `compose!(f, g)(x) == g(f(x))`
//!
//! ## Grouping Laws
//! - **Flattening**: a bracketed group behaves as if inlined
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(f, g)(x)`
//! - **Empty pipe**: `pipe!(x) == x`
//!
//! ## Maybe Laws
//! - **None passes through**, `Some` is mapped

use fnpipe::compose::{Stage, identity, maybe};
use fnpipe::{compose, pipe};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        let composed = compose!(identity, function);
        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        let composed = compose!(function, identity);
        prop_assert_eq!(composed(x), function(x));
    }

    /// Empty composition is the identity
    #[test]
    fn prop_compose_empty_is_identity(x in any::<i64>()) {
        let composed = compose!();
        prop_assert_eq!(composed(x), x);
    }

    /// Order Law: compose!(f, g)(x) == g(f(x))
    #[test]
    fn prop_compose_applies_left_first(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);
        let composed = compose!(function1, function2);
        prop_assert_eq!(composed(x), function2(function1(x)));
    }

    /// Associativity Law
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let left_associative = compose!(function1, compose!(function2, function3));
        let right_associative = compose!(compose!(function1, function2), function3);

        prop_assert_eq!(left_associative(x), right_associative(x));
    }
}

// =============================================================================
// Grouping Laws
// =============================================================================

proptest! {
    /// Groups flatten: compose!(f, [g, [h]]) == compose!(f, g, h)
    #[test]
    fn prop_groups_behave_inlined(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(7);
        let function2 = |n: i32| n.wrapping_mul(-2);
        let function3 = |n: i32| n ^ 0x55;

        let grouped = compose!(function1, [function2, [function3]]);
        let inline = compose!(function1, function2, function3);

        prop_assert_eq!(grouped(x), inline(x));
        prop_assert_eq!(pipe!(x, [function1, function2], function3), inline(x));
    }

    /// Runtime stage groups flatten the same way
    #[test]
    fn prop_runtime_groups_behave_inlined(x in any::<i32>(), offsets in prop::collection::vec(any::<i32>(), 0..8)) {
        let flat: Vec<Stage<'_, i32>> = offsets
            .iter()
            .map(|offset| Stage::function(move |n: i32| n.wrapping_mul(3).wrapping_add(*offset)))
            .collect();
        let (front, back) = offsets.split_at(offsets.len() / 2);
        let grouped = vec![
            Stage::group(front.iter().map(|offset| Stage::function(move |n: i32| n.wrapping_mul(3).wrapping_add(*offset)))),
            Stage::group([Stage::group(back.iter().map(|offset| Stage::function(move |n: i32| n.wrapping_mul(3).wrapping_add(*offset))))]),
        ];

        prop_assert_eq!(
            fnpipe::compose::pipe(x, &grouped),
            fnpipe::compose::pipe(x, &flat)
        );
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// pipe!(x, f, g) == compose!(f, g)(x)
    #[test]
    fn prop_pipe_compose_consistency(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(pipe!(x, function1, function2), compose!(function1, function2)(x));
    }

    /// pipe!(x) == x
    #[test]
    fn prop_pipe_without_functions(text in ".*") {
        prop_assert_eq!(pipe!(text.clone()), text);
    }
}

// =============================================================================
// Maybe Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_maps_some(value in proptest::option::of(any::<i16>())) {
        let widen = maybe(|n: i16| i32::from(n) * 2);
        prop_assert_eq!(widen(value), value.map(|n| i32::from(n) * 2));
    }
}
