// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the
//! O(nm) DP entirely. With query-vs-word comparisons dominated by
//! non-matches, this prunes most of the work before allocating anything.

/// Bounded Levenshtein distance: `Some(d)` if the strings are within `max`
/// edits of each other, `None` otherwise.
///
/// Two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If the minimum value in a DP row exceeds `max`, abandon the DP early
///
/// Both are sound: neither can reject a pair whose true distance is ≤ `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    // Character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return None;
    }
    if a_len == 0 {
        return Some(b_len);
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // No cell in later rows can drop below the row minimum
        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}
