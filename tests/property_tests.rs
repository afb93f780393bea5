//! Property-based tests for argument normalization.
//!
//! These use proptest to verify the normalization invariants hold across
//! randomly generated token arrays.

use proptest::prelude::*;

use chatbind::normalize::{completion_args, execution_args};

/// Strategy for a single chat token, empty tokens included.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{1,8}",
        1 => Just(String::new()),
        1 => "--[a-z]{1,8}",
    ]
}

/// Strategy for a raw split-argument array.
fn raw_args() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..8)
}

proptest! {
    /// Execution form never ends with an empty token.
    #[test]
    fn execution_never_ends_with_an_empty_token(raw in raw_args()) {
        let args = execution_args(&raw);
        prop_assert!(args.last().map_or(true, |tok| !tok.is_empty()));
    }

    /// Execution form is a prefix of the input: non-trailing tokens are
    /// untouched, including interior empties.
    #[test]
    fn execution_is_a_prefix_of_the_input(raw in raw_args()) {
        let args = execution_args(&raw);
        prop_assert!(args.len() <= raw.len());
        prop_assert_eq!(&raw[..args.len()], &args[..]);
    }

    /// Everything execution form drops is an empty trailing token.
    #[test]
    fn execution_only_drops_trailing_empties(raw in raw_args()) {
        let args = execution_args(&raw);
        prop_assert!(raw[args.len()..].iter().all(|tok| tok.is_empty()));
    }

    /// Execution normalization is idempotent.
    #[test]
    fn execution_is_idempotent(raw in raw_args()) {
        let once = execution_args(&raw);
        prop_assert_eq!(execution_args(&once), once.clone());
    }

    /// Completion form preserves non-empty input verbatim, including the
    /// partial final token.
    #[test]
    fn completion_preserves_nonempty_input(raw in raw_args()) {
        prop_assume!(!raw.is_empty());
        prop_assert_eq!(completion_args(&raw), raw);
    }

    /// Completion form always has an anchor token to complete against.
    #[test]
    fn completion_output_is_never_empty(raw in raw_args()) {
        prop_assert!(!completion_args(&raw).is_empty());
    }
}
