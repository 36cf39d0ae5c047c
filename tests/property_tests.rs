//! Property-based tests for the evaluation frontend and harness generator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use codebattle::backend::harness::synthesize;
use codebattle::frontend::fragment::scan;
use codebattle::frontend::literal::{Literal, normalize};
use proptest::prelude::*;

/// Printable ASCII characters that survive naive JSON quoting.
fn printable_char() -> impl Strategy<Value = char> {
    prop::char::range(' ', '~').prop_filter("quote and backslash need escaping", |c| {
        *c != '"' && *c != '\\'
    })
}

proptest! {
    /// Property: integer arrays round-trip through normalize, order preserved
    #[test]
    fn int_arrays_round_trip(nums in prop::collection::vec(any::<i64>(), 0..64)) {
        let rendered = serde_json::to_string(&nums).unwrap();
        let literal = normalize(&rendered).unwrap();
        prop_assert_eq!(&literal, &Literal::IntArray(nums.clone()));

        // the canonical serialization parses back to an equal literal
        let reparsed = normalize(&literal.canonical_form()).unwrap();
        prop_assert_eq!(reparsed, literal);
    }

    /// Property: char arrays round-trip to the original bracketed quoted form
    #[test]
    fn char_arrays_round_trip(chars in prop::collection::vec(printable_char(), 1..32)) {
        let strings: Vec<String> = chars.iter().map(|c| c.to_string()).collect();
        let rendered = serde_json::to_string(&strings).unwrap();
        let literal = normalize(&rendered).unwrap();
        prop_assert_eq!(&literal, &Literal::CharArray(chars));

        // canonical serialization of an unmodified array is the original form
        prop_assert_eq!(literal.canonical_form(), rendered);
    }

    /// Property: the array-plus-target form parses both segments
    #[test]
    fn target_form_round_trips(
        nums in prop::collection::vec(any::<i64>(), 0..32),
        target in any::<i64>(),
    ) {
        let input = format!("{}, target = {}", serde_json::to_string(&nums).unwrap(), target);
        let literal = normalize(&input).unwrap();
        prop_assert_eq!(literal, Literal::IntArrayWithTarget { nums, target });
    }

    /// Property: a single trailing separator never changes the parse
    #[test]
    fn trailing_separator_is_tolerated(nums in prop::collection::vec(any::<i64>(), 0..32)) {
        let rendered = serde_json::to_string(&nums).unwrap();
        let with_sep = format!("{rendered},  ");
        prop_assert_eq!(normalize(&with_sep).unwrap(), normalize(&rendered).unwrap());
    }

    /// Property: normalize never panics, whatever the input
    #[test]
    fn normalize_never_panics(input in ".*") {
        let _ = normalize(&input);
    }

    /// Property: synthesis is a pure function of (code, literal)
    #[test]
    fn synthesis_is_pure(nums in prop::collection::vec(any::<i32>(), 0..16)) {
        let code = "int arraySum(vector<int>& nums) { return 0; }";
        let input = serde_json::to_string(&nums).unwrap();
        let literal = normalize(&input).unwrap();
        let signals = scan(code);
        let first = synthesize(code, &signals, &literal);
        let second = synthesize(code, &signals, &literal);
        prop_assert_eq!(first.as_str(), second.as_str());
    }

    /// Property: the fragment scan never panics on arbitrary text
    #[test]
    fn scan_never_panics(code in ".*") {
        let _ = scan(&code);
    }
}
