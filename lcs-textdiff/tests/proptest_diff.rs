//! Property-based tests for the minus/plus diffs using proptest.

use lcs_textdiff::{lcs_length, CharDiff, Document, LcsTable, TextDocument};
use proptest::prelude::*;

// Small alphabet so that shared characters and ties are common.
fn text_strategy() -> impl Strategy<Value = String> {
    "[abc xy]{0,16}"
}

/// Returns true if `sub` is a subsequence of `full`.
fn is_subsequence(sub: &str, full: &str) -> bool {
    let mut rest = full.chars();
    sub.chars().all(|c| rest.any(|f| f == c))
}

/// Sorted characters of the concatenation of `parts`.
fn char_multiset(parts: &[&String]) -> Vec<char> {
    let mut chars: Vec<char> = parts.iter().flat_map(|p| p.chars()).collect();
    chars.sort_unstable();
    chars
}

/// Returns true if `full` is an interleaving of `kept` and `dropped`, i.e.
/// the positions of `full` split into a run spelling `kept` and a run
/// spelling `dropped`, both in order.
fn is_interleaving(full: &str, kept: &str, dropped: &str) -> bool {
    let full: Vec<char> = full.chars().collect();
    let kept: Vec<char> = kept.chars().collect();
    let dropped: Vec<char> = dropped.chars().collect();
    if full.len() != kept.len() + dropped.len() {
        return false;
    }

    // reach[k][d]: the first k + d chars of `full` split into kept[..k] and dropped[..d].
    let cols = dropped.len() + 1;
    let mut reach = vec![false; (kept.len() + 1) * cols];
    reach[0] = true;
    for k in 0..=kept.len() {
        for d in 0..=dropped.len() {
            if k + d == 0 {
                continue;
            }
            let c = full[k + d - 1];
            let via_kept = k > 0 && reach[(k - 1) * cols + d] && kept[k - 1] == c;
            let via_dropped = d > 0 && reach[k * cols + d - 1] && dropped[d - 1] == c;
            reach[k * cols + d] = via_kept || via_dropped;
        }
    }
    reach[kept.len() * cols + dropped.len()]
}

/// Naive LCS length for cross-checking the table.
fn naive_lcs(a: &[char], b: &[char]) -> usize {
    match (a.split_first(), b.split_first()) {
        (Some((x, a_rest)), Some((y, b_rest))) => {
            if x == y {
                1 + naive_lcs(a_rest, b_rest)
            } else {
                naive_lcs(a_rest, b).max(naive_lcs(a, b_rest))
            }
        }
        _ => 0,
    }
}

proptest! {
    #[test]
    fn prop_self_diff_is_empty(text in text_strategy()) {
        let doc = TextDocument::new(text);
        prop_assert_eq!(doc.minus_diff(&doc), "");
        prop_assert_eq!(doc.plus_diff(&doc), "");
    }

    #[test]
    fn prop_length_identities(a in text_strategy(), b in text_strategy()) {
        let diff = CharDiff::between(&a, &b);
        let lcs = lcs_length(&a, &b);
        prop_assert_eq!(diff.lcs_len, lcs);
        prop_assert_eq!(a.chars().count() - diff.minus.chars().count(), lcs);
        prop_assert_eq!(diff.plus.chars().count(), b.chars().count() - lcs);
    }

    #[test]
    fn prop_diffs_are_subsequences(a in text_strategy(), b in text_strategy()) {
        let diff = CharDiff::between(&a, &b);
        prop_assert!(is_subsequence(&diff.minus, &a));
        prop_assert!(is_subsequence(&diff.plus, &b));
    }

    #[test]
    fn prop_diffs_partition_the_inputs(a in text_strategy(), b in text_strategy()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let table = LcsTable::new(&ac, &bc);
        let common = table.common_subsequence();
        let minus = table.minus_diff();
        let plus = table.plus_diff();
        prop_assert_eq!(char_multiset(&[&common, &minus]), char_multiset(&[&a]));
        prop_assert_eq!(char_multiset(&[&common, &plus]), char_multiset(&[&b]));
    }

    #[test]
    fn prop_removing_minus_diff_leaves_common_subsequence(
        a in text_strategy(),
        b in text_strategy(),
    ) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let table = LcsTable::new(&ac, &bc);
        let common = table.common_subsequence();
        let minus = table.minus_diff();
        prop_assert!(is_interleaving(&a, &common, &minus), "a={:?} common={:?} minus={:?}", a, common, minus);
        prop_assert!(is_subsequence(&common, &b));
    }

    #[test]
    fn prop_removing_plus_diff_leaves_common_subsequence(
        a in text_strategy(),
        b in text_strategy(),
    ) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let table = LcsTable::new(&ac, &bc);
        let common = table.common_subsequence();
        let plus = table.plus_diff();
        prop_assert!(is_interleaving(&b, &common, &plus), "b={:?} common={:?} plus={:?}", b, common, plus);
        prop_assert!(is_subsequence(&common, &a));
    }

    #[test]
    fn prop_common_subsequence_is_an_lcs(a in text_strategy(), b in text_strategy()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let table = LcsTable::new(&ac, &bc);
        let common = table.common_subsequence();
        prop_assert!(is_subsequence(&common, &a));
        prop_assert!(is_subsequence(&common, &b));
        prop_assert_eq!(common.chars().count(), table.lcs_len());
    }

    #[test]
    fn prop_table_agrees_with_naive(a in "[ab]{0,8}", b in "[ab]{0,8}") {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        prop_assert_eq!(LcsTable::new(&ac, &bc).lcs_len(), naive_lcs(&ac, &bc));
    }
}
