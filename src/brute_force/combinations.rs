//! Lexicographic k-combination generation.

/// Advances `indices` in place to the next k-combination of `{0..n-1}`
/// in lexicographic order. Returns `false` once `indices` holds the
/// last combination (`{n-k..n-1}`).
///
/// `indices` must be strictly increasing with every entry below `n`;
/// the first combination is `{0..k-1}`.
pub(crate) fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        // Rightmost index that can still move right.
        if indices[i] != i + n - k {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut indices: Vec<usize> = (0..k).collect();
        let mut all = vec![indices.clone()];
        while next_combination(&mut indices, n) {
            all.push(indices.clone());
        }
        all
    }

    #[test]
    fn test_enumerates_4_choose_2() {
        let all = collect_all(4, 2);
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_counts_match_binomial() {
        assert_eq!(collect_all(6, 3).len(), 20);
        assert_eq!(collect_all(8, 1).len(), 8);
        assert_eq!(collect_all(5, 5).len(), 1);
    }

    #[test]
    fn test_full_combination_is_terminal() {
        let mut indices: Vec<usize> = (0..3).collect();
        assert!(!next_combination(&mut indices, 3));
    }
}
