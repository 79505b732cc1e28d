//! Longest common substring ("common sub-text").

/// Returns the longest contiguous run of characters shared by `a` and `b`.
///
/// When several runs share the maximal length, the one ending earliest in
/// `a` is returned. Returns an empty string when no character is shared.
/// Uses two rolling rows, so memory is O(n) rather than O(m·n).
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                0
            };
            if curr[j] > best_len {
                best_len = curr[j];
                best_end = i;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    a[best_end - best_len..best_end].iter().collect()
}
