//! Property tests for the reversal algorithms

use proptest::prelude::*;
use textrev_core::{
    reverse_with_builder, reverse_with_recursion, reverse_with_recursion_limit, reverse_words,
    try_reverse_with_recursion, CoreError, Method, DEFAULT_RECURSION_LIMIT,
};

const SINGLE_STRING: [Method; 5] = [
    Method::Builder,
    Method::TwoPointers,
    Method::Recursion,
    Method::Stack,
    Method::Loop,
];

proptest! {
    #[test]
    fn single_string_methods_are_involutions(s in "\\PC{0,200}") {
        for method in SINGLE_STRING {
            prop_assert_eq!(method.apply(&method.apply(&s)), s.clone());
        }
    }

    #[test]
    fn single_string_methods_agree(s in "\\PC{0,200}") {
        let expected: String = s.chars().rev().collect();
        for method in SINGLE_STRING {
            prop_assert_eq!(method.apply(&s), expected.clone());
        }
    }

    #[test]
    fn word_reversal_is_an_involution(s in "[a-z ]{0,80}") {
        prop_assert_eq!(reverse_words(&reverse_words(&s)), s);
    }

    #[test]
    fn word_reversal_keeps_spaces_in_place(s in "[a-zA-Z ]{0,80}") {
        let reversed = reverse_words(&s);
        prop_assert_eq!(reversed.len(), s.len());
        let spaces = |t: &str| t.match_indices(' ').map(|(i, _)| i).collect::<Vec<_>>();
        prop_assert_eq!(spaces(&reversed), spaces(&s));
    }

    #[test]
    fn recursion_limit_does_not_change_output(s in "[a-z]{0,300}", limit in 1usize..64) {
        prop_assert_eq!(reverse_with_recursion_limit(&s, limit), reverse_with_builder(&s));
    }
}

#[test]
fn test_hello_world_words() {
    assert_eq!(reverse_words("hello world"), "olleh dlrow");
}

#[test]
fn test_double_space_words_unchanged() {
    assert_eq!(reverse_words("a  b"), "a  b");
}

#[test]
fn test_long_input_through_recursion() {
    // Far deeper than a single recursion chain could safely go
    let text = "abc".repeat(100_000);
    assert_eq!(reverse_with_recursion(&text), reverse_with_builder(&text));
}

#[test]
fn test_strict_recursion_rejects_long_input() {
    let text = "x".repeat(DEFAULT_RECURSION_LIMIT + 1);
    let err = try_reverse_with_recursion(&text, DEFAULT_RECURSION_LIMIT).unwrap_err();
    assert!(matches!(err, CoreError::RecursionLimitExceeded { .. }));
}
