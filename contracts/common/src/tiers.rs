//! Reward-tier table.
//!
//! A tier table is an ordered [`Vec`] of [`TierDefinition`]s, highest
//! threshold first. Classification walks the list and returns the first tier
//! whose threshold the principal meets; the mandatory catch-all tier
//! (threshold 0) makes classification total over every non-negative
//! principal. Tables are validated once, at contract initialisation, and
//! never mutated afterwards.

use soroban_sdk::{contracterror, contracttype, Symbol, Vec};

/// Fixed-point scaling factor for tier rates.
///
/// `rate_per_period` is stored as reward tokens per staked token per period,
/// multiplied by this constant. Using 10^12 gives 12 decimal places of
/// precision without floating-point arithmetic.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── Types ────────────────────────────────────────────────────────────────────

/// One row of the tier table.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierDefinition {
    pub name: Symbol,
    /// Minimum principal required for this tier, inclusive.
    pub minimum_stake: i128,
    /// Reward tokens accrued per staked token per period, scaled by
    /// [`PRECISION`].
    pub rate_per_period: i128,
}

/// Tier-table configuration errors.
///
/// Any of these at initialisation means the deployment is misconfigured and
/// the contract must not become operational.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TierError {
    /// The table contains no tiers at all.
    EmptyTable = 100,
    /// Thresholds are not strictly decreasing from first to last.
    ThresholdOrder = 101,
    /// A tier carries a negative reward rate.
    NegativeRate = 102,
    /// The last tier does not have a zero threshold, so some principals
    /// would classify to no tier.
    MissingCatchAll = 103,
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Fail-fast configuration check, run once at initialisation.
///
/// A valid table is non-empty, strictly decreasing in `minimum_stake`, free
/// of negative rates, and ends in a catch-all tier with threshold 0. The
/// strictly-decreasing order plus the zero tail also rules out negative
/// thresholds anywhere in the table.
pub fn validate(table: &Vec<TierDefinition>) -> Result<(), TierError> {
    if table.is_empty() {
        return Err(TierError::EmptyTable);
    }

    let mut prev_threshold: Option<i128> = None;
    for tier in table.iter() {
        if tier.rate_per_period < 0 {
            return Err(TierError::NegativeRate);
        }
        if let Some(prev) = prev_threshold {
            if tier.minimum_stake >= prev {
                return Err(TierError::ThresholdOrder);
            }
        }
        prev_threshold = Some(tier.minimum_stake);
    }

    if table.last_unchecked().minimum_stake != 0 {
        return Err(TierError::MissingCatchAll);
    }

    Ok(())
}

/// Classify a principal against the table.
///
/// Returns the highest tier whose threshold does not exceed `principal`.
/// Total over all non-negative principals for a validated table.
pub fn classify(table: &Vec<TierDefinition>, principal: i128) -> TierDefinition {
    for tier in table.iter() {
        if principal >= tier.minimum_stake {
            return tier;
        }
    }
    // Only reachable for a negative principal, which the ledger never
    // produces; the catch-all tier is the conservative answer either way.
    table.last_unchecked()
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;

    use soroban_sdk::{vec, Env, Symbol, Vec};

    use super::*;

    fn tier(env: &Env, name: &str, minimum_stake: i128, rate_per_period: i128) -> TierDefinition {
        TierDefinition {
            name: Symbol::new(env, name),
            minimum_stake,
            rate_per_period,
        }
    }

    fn standard(env: &Env) -> Vec<TierDefinition> {
        vec![
            env,
            tier(env, "PLATINUM", 1_000, PRECISION),
            tier(env, "GOLD", 500, PRECISION / 2),
            tier(env, "SILVER", 100, PRECISION / 4),
            tier(env, "BRONZE", 0, PRECISION / 10),
        ]
    }

    #[test]
    fn standard_table_validates() {
        let env = Env::default();
        assert_eq!(validate(&standard(&env)), Ok(()));
    }

    #[test]
    fn empty_table_rejected() {
        let env = Env::default();
        let table: Vec<TierDefinition> = vec![&env];
        assert_eq!(validate(&table), Err(TierError::EmptyTable));
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let env = Env::default();
        let table = vec![
            &env,
            tier(&env, "GOLD", 500, PRECISION),
            tier(&env, "PLATINUM", 1_000, PRECISION),
            tier(&env, "BRONZE", 0, 0),
        ];
        assert_eq!(validate(&table), Err(TierError::ThresholdOrder));
    }

    #[test]
    fn equal_thresholds_rejected() {
        let env = Env::default();
        let table = vec![
            &env,
            tier(&env, "A", 500, PRECISION),
            tier(&env, "B", 500, PRECISION),
            tier(&env, "C", 0, 0),
        ];
        assert_eq!(validate(&table), Err(TierError::ThresholdOrder));
    }

    #[test]
    fn negative_rate_rejected() {
        let env = Env::default();
        let table = vec![
            &env,
            tier(&env, "GOLD", 500, -1),
            tier(&env, "BRONZE", 0, 0),
        ];
        assert_eq!(validate(&table), Err(TierError::NegativeRate));
    }

    #[test]
    fn missing_catch_all_rejected() {
        let env = Env::default();
        let table = vec![
            &env,
            tier(&env, "GOLD", 500, PRECISION),
            tier(&env, "SILVER", 100, PRECISION / 4),
        ];
        assert_eq!(validate(&table), Err(TierError::MissingCatchAll));
    }

    #[test]
    fn classify_picks_highest_qualifying_tier() {
        let env = Env::default();
        let table = standard(&env);

        assert_eq!(classify(&table, 1_000).name, Symbol::new(&env, "PLATINUM"));
        assert_eq!(classify(&table, 999).name, Symbol::new(&env, "GOLD"));
        assert_eq!(classify(&table, 500).name, Symbol::new(&env, "GOLD"));
        assert_eq!(classify(&table, 100).name, Symbol::new(&env, "SILVER"));
        assert_eq!(classify(&table, 99).name, Symbol::new(&env, "BRONZE"));
        assert_eq!(classify(&table, 0).name, Symbol::new(&env, "BRONZE"));
    }

    #[test]
    fn classify_is_total_below_every_threshold() {
        let env = Env::default();
        let table = standard(&env);
        // The smallest possible position still lands in the catch-all tier.
        assert_eq!(classify(&table, 1).name, Symbol::new(&env, "BRONZE"));
    }
}
