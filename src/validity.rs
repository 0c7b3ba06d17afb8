//! The single definition of a valid completion.
//!
//! Both the oracle and the test harnesses call [`is_valid`]; nothing else in
//! the crate re-derives run detection on full strings.

use crate::instance::Bit;

/// True iff no window `bits[i..i + k]` is constant.
///
/// Every one of the `n - k + 1` windows is checked against the full string.
/// When `k > n` there is no window, so the string is valid. A zero-width
/// window is trivially constant, so `k == 0` is never valid.
pub fn is_valid(bits: &[Bit], k: usize) -> bool {
    if k == 0 {
        return false;
    }
    if k > bits.len() {
        return true;
    }
    !bits
        .windows(k)
        .any(|w| w.iter().all(|&b| b == w[0]))
}

/// Number of positions where `a` and `b` differ.
pub fn hamming(a: &[Bit], b: &[Bit]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Bit::{One as I, Zero as O};

    #[test]
    fn alternating_is_valid_for_k2() {
        assert!(is_valid(&[O, I, O, I, O], 2));
        assert!(!is_valid(&[O, I, I, O], 2));
    }

    #[test]
    fn run_at_the_very_end_is_caught() {
        // The last window must be checked too.
        assert!(!is_valid(&[O, I, O, O, O], 3));
        assert!(is_valid(&[O, I, O, O, I], 3));
    }

    #[test]
    fn run_at_the_very_start_is_caught() {
        assert!(!is_valid(&[I, I, I, O, I], 3));
    }

    #[test]
    fn k_longer_than_string_is_always_valid() {
        assert!(is_valid(&[I, I, I], 4));
        assert!(is_valid(&[], 1));
    }

    #[test]
    fn k_equal_to_length_checks_single_window() {
        assert!(!is_valid(&[O, O, O], 3));
        assert!(is_valid(&[O, O, I], 3));
    }

    #[test]
    fn k_one_rejects_any_nonempty_string() {
        assert!(!is_valid(&[O], 1));
        assert!(!is_valid(&[O, I], 1));
    }

    #[test]
    fn zero_k_is_never_valid() {
        assert!(!is_valid(&[O, I], 0));
    }

    #[test]
    fn hamming_counts_mismatches() {
        assert_eq!(hamming(&[O, I, O], &[O, I, O]), 0);
        assert_eq!(hamming(&[O, I, O], &[I, I, I]), 2);
    }
}
