use fuzzy_bitap::{Matcher, backward_index_of, forward_index_of};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

// A small alphabet keeps accidental near-matches likely.
fn arb_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'x']), 0..=max_len)
}

fn arb_pattern(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'x']), 1..=max_len)
}

fn arb_text_and_window() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(any::<u8>(), 1..48).prop_flat_map(|text| {
        let len = text.len();
        (0..len).prop_flat_map(move |loc| {
            let text = text.clone();
            (Just(text), Just(loc), 1..=len - loc)
        })
    })
}

fn naive_forward(text: &[u8], pattern: &[u8], from: isize) -> Option<usize> {
    if from > text.len() as isize - 1 {
        return None;
    }
    (from.max(0) as usize..=text.len()).find(|&i| text[i..].starts_with(pattern))
}

fn naive_backward(text: &[u8], pattern: &[u8], through: isize) -> Option<usize> {
    if through < 0 {
        return None;
    }
    (0..=text.len()).rev().find(|&i| {
        i as isize + pattern.len() as isize <= through + 1 && text[i..].starts_with(pattern)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn identical_text_is_found_at_zero(text in arb_text(64), loc in -100isize..100) {
        prop_assert_eq!(Matcher::default().locate(&text, &text, loc), Some(0));
    }

    #[test]
    fn empty_pattern_is_found_at_clamped_loc(text in arb_text(64), loc in -100isize..100) {
        let expected = loc.clamp(0, text.len() as isize) as usize;
        prop_assert_eq!(Matcher::default().locate(&text, b"", loc), Some(expected));
    }

    #[test]
    fn exact_window_is_found_at_loc((text, loc, len) in arb_text_and_window()) {
        let pattern = text[loc..loc + len].to_vec();
        let found = Matcher::new(0.0, 0).unwrap().locate(&text, &pattern, loc as isize);
        prop_assert_eq!(found, Some(loc));
    }

    #[test]
    fn empty_text_never_matches(pattern in arb_pattern(16), loc in -10isize..10) {
        prop_assert_eq!(Matcher::new(1.0, 1000).unwrap().locate(b"", &pattern, loc), None);
    }

    #[test]
    fn raising_threshold_keeps_matches(
        text in arb_text(30),
        pattern in arb_pattern(12),
        loc in -2isize..34,
        distance in prop::sample::select(vec![0usize, 1, 5, 10, 100, 1000]),
    ) {
        let thresholds = [0.0, 0.1, 0.25, 0.4, 0.5, 0.6, 0.75, 0.9, 1.0];
        let mut found_before = false;
        for threshold in thresholds {
            let found = Matcher::new(threshold, distance)
                .unwrap()
                .locate(&text, &pattern, loc)
                .is_some();
            prop_assert!(
                found || !found_before,
                "lost match when raising threshold to {}", threshold
            );
            found_before = found;
        }
    }

    #[test]
    fn fuzzy_match_lies_within_threshold(
        text in arb_text(30),
        pattern in arb_pattern(12),
        loc in 0isize..30,
    ) {
        let matcher = Matcher::new(0.5, 100).unwrap();
        if let Some(located) = matcher.find(&text, &pattern, loc) {
            prop_assert!(located.score <= 0.5);
            prop_assert!(located.offset <= text.len());
        }
    }

    #[test]
    fn forward_index_of_matches_naive_scan(
        text in arb_text(24),
        pattern in arb_text(4),
        from in -4isize..30,
    ) {
        prop_assert_eq!(
            forward_index_of(&text, &pattern, from),
            naive_forward(&text, &pattern, from)
        );
    }

    #[test]
    fn backward_index_of_matches_naive_scan(
        text in arb_text(24),
        pattern in arb_text(4),
        through in -4isize..30,
    ) {
        prop_assert_eq!(
            backward_index_of(&text, &pattern, through),
            naive_backward(&text, &pattern, through)
        );
    }
}
