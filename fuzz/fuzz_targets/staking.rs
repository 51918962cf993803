#![no_main]

use arbitrary::Arbitrary;
use common::tiers::{TierDefinition, PRECISION};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, Symbol,
};
use tiered_staking::{TieredStakingContract, TieredStakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u64 },
    WithdrawStake { amount: u64 },
    WithdrawReward,
    AdvanceTime { secs: u16 },
}

// Arbitrary deposit/withdraw/claim interleavings across several accounts.
// We're looking for unhandled panics (overflow, broken invariants in the
// accrual math), not full correctness; every call result is allowed to be
// an error.
fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let stake_id = stake_token.address();
    let reward_id = reward_token.address();

    let contract_id = env.register(TieredStakingContract, ());
    let client = TieredStakingContractClient::new(&env, &contract_id);

    let tiers = vec![
        &env,
        TierDefinition {
            name: Symbol::new(&env, "PLATINUM"),
            minimum_stake: 1_000,
            rate_per_period: PRECISION,
        },
        TierDefinition {
            name: Symbol::new(&env, "BRONZE"),
            minimum_stake: 0,
            rate_per_period: PRECISION / 10,
        },
    ];
    let _ = client.try_initialize(&stake_id, &reward_id, &tiers, &3_600u64, &0u64);

    StellarAssetClient::new(&env, &reward_id).mint(&contract_id, &i128::from(u64::MAX));

    let mut users = std::vec::Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &stake_id).mint(&user, &i128::from(u64::MAX));
        TokenClient::new(&env, &stake_id).approve(
            &user,
            &contract_id,
            &i128::from(u64::MAX),
            &100_000,
        );
        users.push(user);
    }

    let mut now: u64 = 0;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_deposit(caller, &(amount as i128));
            }
            FuzzAction::WithdrawStake { amount } => {
                let _ = client.try_withdraw_stake(caller, &(amount as i128));
            }
            FuzzAction::WithdrawReward => {
                let _ = client.try_withdraw_reward(caller);
            }
            FuzzAction::AdvanceTime { secs } => {
                now = now.saturating_add(u64::from(secs));
                env.ledger().set_timestamp(now);
            }
        }
    }

    // Conservation must hold under every interleaving.
    let custody = TokenClient::new(&env, &stake_id).balance(&contract_id);
    assert_eq!(custody, client.get_total_staked());
});
