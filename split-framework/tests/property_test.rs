//! Property-based tests for the algebraic guarantees of the split engine.

use proptest::prelude::*;
use split_framework::{join, split, split_n, split_to_vec, SplitOptions, Tokenizer};

/// Inputs over a small alphabet so delimiters actually occur.
fn input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab|,]{0,32}").unwrap()
}

fn options_strategy() -> impl Strategy<Value = SplitOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(c, f, a)| {
        SplitOptions::new()
            .compress_delimiters(c)
            .include_first_delimiter(f)
            .include_all_delimiters(a)
    })
}

proptest! {
    /// Eager split and a tokenizer sweep must produce identical sequences
    /// for every (input, options) combination.
    #[test]
    fn split_equals_tokenizer_sweep(input in input_strategy(), opts in options_strategy()) {
        let eager = split_to_vec(&'|', &input, opts);
        let lazy: Vec<_> = Tokenizer::with_options(&input, '|', opts).collect();
        prop_assert_eq!(eager, lazy);
    }

    /// split_n returns min(n, total token count) and emits a prefix of the
    /// full token sequence.
    #[test]
    fn split_n_count_invariant(input in input_strategy(), n in 0usize..12) {
        let full = split_to_vec(&'|', &input, SplitOptions::default());
        let mut bounded = Vec::new();
        let count = split_n(&'|', &input, n, |t| bounded.push(t), SplitOptions::default());
        prop_assert_eq!(count, n.min(full.len()));
        prop_assert_eq!(&bounded[..], &full[..count]);
    }

    /// Joining a plain split with the same delimiter reproduces the input.
    #[test]
    fn join_split_round_trip(input in input_strategy()) {
        let tokens = split_to_vec(&'|', &input, SplitOptions::default());
        if tokens.is_empty() {
            prop_assert_eq!(input, "");
        } else {
            prop_assert_eq!(join("|", tokens), input);
        }
    }

    /// Re-splitting an already maximally compressed string with compression
    /// on yields the same tokens as without the flag.
    #[test]
    fn compression_idempotence(input in input_strategy()) {
        let compress = SplitOptions::new().compress_delimiters(true);
        let once = split_to_vec(&'|', &input, compress);
        let compressed = join("|", once.iter().map(|t| t.text()));
        let plain: Vec<String> = split_to_vec(&'|', &compressed, SplitOptions::default())
            .into_iter().map(|t| t.to_string()).collect();
        let again: Vec<String> = split_to_vec(&'|', &compressed, compress)
            .into_iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(plain, again);
    }

    /// The scan never misses or duplicates input: token spans are ordered
    /// and within bounds.
    #[test]
    fn spans_are_monotonic(input in input_strategy(), opts in options_strategy()) {
        let mut last_end = 0usize;
        for tok in Tokenizer::with_options(&input, '|', opts) {
            prop_assert!(tok.start() <= tok.end());
            prop_assert!(tok.start() >= last_end);
            prop_assert!(tok.end() <= input.len());
            last_end = tok.end();
        }
    }

    /// Total count with split equals the callback invocation count.
    #[test]
    fn split_count_matches_emissions(input in input_strategy(), opts in options_strategy()) {
        let mut emitted = 0usize;
        let counted = split(&'|', &input, |_| emitted += 1, opts);
        prop_assert_eq!(counted, emitted);
    }
}
