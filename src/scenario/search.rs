// Boundary search over an integer outcome domain.
//
// Within one scenario kind the predicate is monotone: conceding more runs or
// using more balls only ever moves your team's NRR, and with it the rank
// predicate, in one direction. The satisfying region is therefore a
// (possibly empty) prefix of the domain, and a single bisection of the
// true-to-false frontier finds its far edge. `linear_boundaries` is the
// straight-scan reference; the tests hold the binary implementation to it as
// a correctness oracle.

use crate::error::EngineError;

/// Boundaries of the satisfying prefix of `[low, high]` via binary search.
///
/// The predicate must be monotone over the domain: once it turns false it
/// stays false. Returns None for an empty domain or when even `low` fails
/// (a monotone predicate that fails at `low` fails everywhere).
pub fn binary_boundaries<F>(
    low: u32,
    high: u32,
    mut predicate: F,
) -> Result<Option<(u32, u32)>, EngineError>
where
    F: FnMut(u32) -> Result<bool, EngineError>,
{
    if low > high || !predicate(low)? {
        return Ok(None);
    }

    // Invariant: `lo` satisfies, everything above `hi` does not.
    let mut lo = low;
    let mut hi = high;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if predicate(mid)? {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(Some((low, lo)))
}

/// Reference implementation: scan the whole domain and report the first and
/// last satisfying values. Produces identical boundaries to
/// `binary_boundaries` whenever the predicate is monotone.
pub fn linear_boundaries<F>(
    low: u32,
    high: u32,
    mut predicate: F,
) -> Result<Option<(u32, u32)>, EngineError>
where
    F: FnMut(u32) -> Result<bool, EngineError>,
{
    if low > high {
        return Ok(None);
    }
    let mut first = None;
    let mut last = None;
    for value in low..=high {
        if predicate(value)? {
            if first.is_none() {
                first = Some(value);
            }
            last = Some(value);
        }
    }
    Ok(first.zip(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Predicate true for values up to and including `edge`.
    fn prefix(edge: i64) -> impl FnMut(u32) -> Result<bool, EngineError> {
        move |v| Ok((v as i64) <= edge)
    }

    #[test]
    fn finds_partial_prefix() {
        assert_eq!(binary_boundaries(0, 179, prefix(84)).unwrap(), Some((0, 84)));
        assert_eq!(linear_boundaries(0, 179, prefix(84)).unwrap(), Some((0, 84)));
    }

    #[test]
    fn finds_single_value_prefix() {
        assert_eq!(binary_boundaries(0, 100, prefix(0)).unwrap(), Some((0, 0)));
        assert_eq!(binary_boundaries(1, 120, prefix(1)).unwrap(), Some((1, 1)));
    }

    #[test]
    fn whole_domain_satisfies() {
        assert_eq!(binary_boundaries(1, 120, |_| Ok(true)).unwrap(), Some((1, 120)));
        assert_eq!(binary_boundaries(0, 0, |_| Ok(true)).unwrap(), Some((0, 0)));
    }

    #[test]
    fn nothing_satisfies() {
        assert_eq!(binary_boundaries(0, 100, |_| Ok(false)).unwrap(), None);
        assert_eq!(linear_boundaries(0, 100, |_| Ok(false)).unwrap(), None);
    }

    #[test]
    fn empty_domain_is_none() {
        assert_eq!(binary_boundaries(5, 4, |_| Ok(true)).unwrap(), None);
        assert_eq!(linear_boundaries(5, 4, |_| Ok(true)).unwrap(), None);
    }

    #[test]
    fn nonzero_domain_start() {
        assert_eq!(binary_boundaries(1, 120, prefix(53)).unwrap(), Some((1, 53)));
        assert_eq!(linear_boundaries(1, 120, prefix(53)).unwrap(), Some((1, 53)));
    }

    #[test]
    fn binary_matches_linear_on_every_prefix() {
        for edge in -1..=12i64 {
            let binary = binary_boundaries(0, 11, prefix(edge)).unwrap();
            let linear = linear_boundaries(0, 11, prefix(edge)).unwrap();
            assert_eq!(binary, linear, "prefix edge {edge}");
        }
    }

    #[test]
    fn trial_counts_stay_logarithmic() {
        let mut trials = 0u32;
        let result = binary_boundaries(0, 1_000_000, |v| {
            trials += 1;
            Ok(v <= 123_456)
        })
        .unwrap();
        assert_eq!(result, Some((0, 123_456)));
        assert!(trials <= 32, "expected O(log n) trials, got {trials}");
    }

    #[test]
    fn predicate_errors_propagate() {
        let failing = |_v: u32| -> Result<bool, EngineError> {
            Err(EngineError::InvalidInput("boom".into()))
        };
        assert!(binary_boundaries(0, 10, failing).is_err());
        assert!(linear_boundaries(0, 10, failing).is_err());
    }
}
