//! Reward accrual math.
//!
//! Pure functions with no environment dependency. Accrual is derived, never
//! stored: `owed = principal × rate × elapsed / period_length`, with the rate
//! carried in fixed point (scaled by [`PRECISION`]) and a single truncating
//! division at the end. Fractional remainders are not accrued and are not
//! carried forward.

use common::tiers::PRECISION;

/// Reward owed for `principal` staked at `rate_per_period` over `elapsed`
/// time units, with one period being `period_length` units.
///
/// Returns 0 for an empty position, a zero rate, zero elapsed time, or a
/// degenerate period length.
#[allow(clippy::arithmetic_side_effects)]
pub fn accrued(principal: i128, rate_per_period: i128, elapsed: u64, period_length: u64) -> i128 {
    if principal <= 0 || rate_per_period <= 0 || elapsed == 0 || period_length == 0 {
        return 0;
    }

    // period_length × PRECISION stays well inside i128 (u64::MAX × 10^12 is
    // below i128::MAX), so the divisor itself cannot saturate.
    let divisor = (period_length as i128).saturating_mul(PRECISION);

    principal
        .saturating_mul(rate_per_period)
        .saturating_mul(elapsed as i128)
        / divisor
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn full_period_at_unit_rate_pays_principal() {
        // rate = 1.0 reward per staked token per period.
        assert_eq!(accrued(1_000, PRECISION, 3_600, 3_600), 1_000);
    }

    #[test]
    fn payout_scales_linearly_with_elapsed_time() {
        assert_eq!(accrued(1_000, PRECISION, 1_800, 3_600), 500);
        assert_eq!(accrued(1_000, PRECISION, 7_200, 3_600), 2_000);
    }

    #[test]
    fn zero_elapsed_pays_zero() {
        assert_eq!(accrued(1_000, PRECISION, 0, 3_600), 0);
    }

    #[test]
    fn zero_rate_pays_zero() {
        assert_eq!(accrued(1_000, 0, 3_600, 3_600), 0);
    }

    #[test]
    fn empty_position_pays_zero() {
        assert_eq!(accrued(0, PRECISION, 3_600, 3_600), 0);
    }

    #[test]
    fn division_truncates() {
        // 99 tokens at 0.1/period for one period = 9.9, truncated to 9.
        assert_eq!(accrued(99, PRECISION / 10, 3_600, 3_600), 9);
        // The lost remainder is never carried forward: two half-periods pay
        // no more than the truncated sum of each.
        let half = accrued(99, PRECISION / 10, 1_800, 3_600);
        assert_eq!(half, 4); // 4.95 truncated
    }

    #[test]
    fn higher_rate_pays_strictly_more_at_equal_principal() {
        let low = accrued(1_000, PRECISION / 4, 3_600, 3_600);
        let mid = accrued(1_000, PRECISION / 2, 3_600, 3_600);
        let high = accrued(1_000, PRECISION, 3_600, 3_600);
        assert!(low < mid && mid < high);
    }

    #[test]
    fn large_positions_do_not_panic() {
        // saturating_mul clamps instead of wrapping; the result stays
        // non-negative for non-negative inputs.
        let owed = accrued(1_000_000_000_000_000, PRECISION, u64::MAX, 1);
        assert!(owed >= 0);
    }
}
