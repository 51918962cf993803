//! Property tests for the tier table.
//!
//! Pure-logic properties over arbitrary principals and table shapes; the
//! Soroban `Env` is only needed to construct host `Vec`/`Symbol` values.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::{vec, Env, Symbol, Vec};

use crate::tiers::{classify, validate, TierDefinition, PRECISION};

fn standard(env: &Env) -> Vec<TierDefinition> {
    vec![
        env,
        TierDefinition {
            name: Symbol::new(env, "PLATINUM"),
            minimum_stake: 1_000,
            rate_per_period: PRECISION,
        },
        TierDefinition {
            name: Symbol::new(env, "GOLD"),
            minimum_stake: 500,
            rate_per_period: PRECISION / 2,
        },
        TierDefinition {
            name: Symbol::new(env, "SILVER"),
            minimum_stake: 100,
            rate_per_period: PRECISION / 4,
        },
        TierDefinition {
            name: Symbol::new(env, "BRONZE"),
            minimum_stake: 0,
            rate_per_period: PRECISION / 10,
        },
    ]
}

proptest! {
    /// Increasing the principal never decreases the assigned tier.
    #[test]
    fn classify_is_monotonic(principal in 0i128..2_000_000, increase in 0i128..2_000_000) {
        let env = Env::default();
        let table = standard(&env);

        let before = classify(&table, principal);
        let after = classify(&table, principal + increase);

        prop_assert!(after.minimum_stake >= before.minimum_stake);
        prop_assert!(after.rate_per_period >= before.rate_per_period);
    }

    /// Every non-negative principal classifies to a tier whose threshold it
    /// actually meets.
    #[test]
    fn classify_is_total_and_sound(principal in 0i128..i128::MAX / 2) {
        let env = Env::default();
        let table = standard(&env);

        let tier = classify(&table, principal);
        prop_assert!(tier.minimum_stake <= principal);
    }

    /// Chopping the catch-all row off an otherwise valid table is always a
    /// configuration error.
    #[test]
    fn validate_requires_catch_all(lowest in 1i128..1_000_000) {
        let env = Env::default();
        let table = vec![
            &env,
            TierDefinition {
                name: Symbol::new(&env, "HIGH"),
                minimum_stake: lowest + 1,
                rate_per_period: PRECISION,
            },
            TierDefinition {
                name: Symbol::new(&env, "LOW"),
                minimum_stake: lowest,
                rate_per_period: PRECISION / 2,
            },
        ];

        prop_assert!(validate(&table).is_err());
    }
}
