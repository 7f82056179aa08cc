//! Solution-quality reporting helpers.

/// Relative gap between a known-optimal profit and a heuristic's profit,
/// in percent: `(optimal - heuristic) / optimal * 100`.
///
/// Returns `f64::INFINITY` when the optimal profit is zero. Negative when
/// the heuristic profit exceeds the supposed optimum (usually a sign the
/// reference value is wrong).
pub fn relative_gap(optimal_profit: u64, heuristic_profit: u64) -> f64 {
    if optimal_profit == 0 {
        return f64::INFINITY;
    }
    (optimal_profit as f64 - heuristic_profit as f64) / optimal_profit as f64 * 100.0
}
