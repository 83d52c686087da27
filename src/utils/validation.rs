//! Centralized validation and helper functions.

/// Maximum number of contigs allowed in a single source (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Check if adding another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}

/// Helper function to convert a base count to f64 with explicit precision loss allowance
#[inline]
pub fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// `100 * count / total`, or `None` when `total` is zero
#[must_use]
pub fn percent(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(100.0 * count_to_f64(count) / count_to_f64(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contig_limit() {
        assert!(check_contig_limit(0).is_none());
        assert!(check_contig_limit(MAX_CONTIGS - 1).is_none());
        assert!(check_contig_limit(MAX_CONTIGS).is_some());
    }

    #[test]
    fn test_percent() {
        assert!((percent(1, 4).unwrap() - 25.0).abs() < 1e-9);
        assert!((percent(0, 4).unwrap()).abs() < 1e-9);
        assert!(percent(0, 0).is_none());
        assert!(percent(3, 0).is_none());
    }
}
