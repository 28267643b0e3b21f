//! The ordering primitive every higher-level check runs on.

/// Whether `keys` is non-decreasing under its natural total order.
///
/// Single forward scan, no allocation. Empty and singleton slices are
/// trivially ordered. Occurrence lists can run to thousands of
/// entries, so this stays O(n).
pub fn is_sorted<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_are_ordered() {
        assert!(is_sorted::<u32>(&[]));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn non_decreasing_sequences_pass() {
        assert!(is_sorted(&[1, 2, 3]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(is_sorted(&["alpha", "beta", "beta", "gamma"]));
    }

    #[test]
    fn any_descent_fails() {
        assert!(!is_sorted(&[2, 1]));
        assert!(!is_sorted(&[1, 3, 2, 4]));
        assert!(!is_sorted(&["beta", "alpha"]));
    }

    #[test]
    fn ordering_is_case_sensitive_for_strings() {
        // 'Z' < 'a' in lexicographic byte order.
        assert!(is_sorted(&["Zebra", "apple"]));
        assert!(!is_sorted(&["apple", "Zebra"]));
    }

    #[test]
    fn tuple_keys_compare_lexicographically() {
        assert!(is_sorted(&[("a", 1, 0), ("a", 1, 2), ("a", 2, 0), ("b", 1, 0)]));
        assert!(!is_sorted(&[("a", 2, 0), ("a", 1, 9)]));
    }
}
