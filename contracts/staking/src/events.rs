#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub stake_token: Address,
    pub reward_token: Address,
    pub period_length: u64,
    pub cooldown: u64,
    pub timestamp: u64,
}

/// Fired when an account deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub staker: Address,
    pub amount: i128,
    pub principal: i128,
    pub tier: Symbol,
    pub timestamp: u64,
}

/// Fired when an account withdraws staked principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub remaining_principal: i128,
    pub timestamp: u64,
}

/// Fired whenever accrued reward is paid out, whether through an explicit
/// claim or an implicit settlement during a deposit or stake withdrawal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a principal change moves an account to a different tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierChangedEvent {
    pub staker: Address,
    pub old_tier: Symbol,
    pub new_tier: Symbol,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    stake_token: Address,
    reward_token: Address,
    period_length: u64,
    cooldown: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            stake_token,
            reward_token,
            period_length,
            cooldown,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(env: &Env, staker: Address, amount: i128, principal: i128, tier: Symbol) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositedEvent {
            staker,
            amount,
            principal,
            tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    remaining_principal: i128,
) {
    env.events().publish(
        (symbol_short!("STK_WDRW"), staker.clone()),
        StakeWithdrawnEvent {
            staker,
            amount,
            remaining_principal,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), staker.clone()),
        RewardPaidEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_changed(env: &Env, staker: Address, old_tier: Symbol, new_tier: Symbol) {
    env.events().publish(
        (symbol_short!("TIER_CHG"), staker.clone()),
        TierChangedEvent {
            staker,
            old_tier,
            new_tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}
