//! Property tests for match enumeration and segment tiling.

use devbelt::{Flags, Limits, Segment, build_segments, evaluate};
use proptest::prelude::*;

/// Patterns drawn from the shapes the playground sees most.
fn patterns() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(r"\d+"),
        Just(r"\w+"),
        Just("[a-z]{2,4}"),
        Just("a+b*"),
        Just("x*"),
        Just(r"\s"),
        Just(r"(\d)(\d)?"),
        Just("foo|bar|baz"),
    ]
}

proptest! {
    #[test]
    fn segments_tile_the_text(pattern in patterns(), text in ".{0,64}") {
        let result = evaluate(pattern, Flags::GLOBAL, &text, &Limits::default());
        prop_assert!(result.is_ok());
        let segments = build_segments(&text, &result.matches);
        let rebuilt: String = segments.iter().map(Segment::text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn matches_are_ordered_and_disjoint(pattern in patterns(), text in ".{0,64}") {
        let result = evaluate(pattern, Flags::GLOBAL, &text, &Limits::default());
        let records = &result.matches.records;
        for pair in records.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for record in records {
            prop_assert!(record.start <= record.end);
            prop_assert!(record.end <= text.len());
            prop_assert_eq!(&text[record.start..record.end], record.text.as_str());
        }
    }

    #[test]
    fn non_global_finds_at_most_one(pattern in patterns(), text in ".{0,64}") {
        let result = evaluate(pattern, Flags::empty(), &text, &Limits::default());
        prop_assert!(result.match_count() <= 1);
    }

    #[test]
    fn reevaluation_is_deterministic(pattern in patterns(), text in ".{0,64}") {
        let first = evaluate(pattern, Flags::GLOBAL, &text, &Limits::default());
        let second = evaluate(pattern, Flags::GLOBAL, &text, &Limits::default());
        prop_assert_eq!(&first.matches, &second.matches);
        prop_assert_eq!(first.is_truncated(), second.is_truncated());
    }

    #[test]
    fn match_cap_is_never_exceeded(text in "[ab]{0,64}", cap in 1usize..8) {
        let limits = Limits::new().max_matches(cap);
        let result = evaluate("a", Flags::GLOBAL, &text, &limits);
        prop_assert!(result.match_count() <= cap);
        if result.is_truncated() {
            prop_assert_eq!(result.match_count(), cap);
        }
    }

    #[test]
    fn flag_strings_round_trip(input in "[gimsu]{0,5}") {
        let flags = Flags::parse(&input).unwrap();
        let canonical = flags.to_string();
        prop_assert_eq!(Flags::parse(&canonical).unwrap(), flags);
    }
}
