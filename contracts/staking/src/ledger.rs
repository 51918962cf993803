//! Persistent stake ledger.
//!
//! Exclusive owner of [`StakeRecord`] lifetime: records are created on first
//! deposit, mutated only by the contract entry points, and removed once the
//! principal returns to zero. The module also maintains the running total of
//! all principals, which the tests use as a conservation witness against the
//! stake-token custody balance.

use common::tiers::TierDefinition;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Per-account records use tuple keys: (POSITION, owner).
const POSITION: Symbol = symbol_short!("POS");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

/// One account's staking position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub owner: Address,
    pub principal: i128,
    /// Tier assigned at the last principal change.
    pub tier: TierDefinition,
    /// Timestamp of the last settled accrual.
    pub last_checkpoint: u64,
    /// Timestamp of the most recent deposit; the withdrawal cooldown is
    /// measured from here.
    pub staked_at: u64,
}

pub fn get(env: &Env, owner: &Address) -> Option<StakeRecord> {
    env.storage().persistent().get(&(POSITION, owner.clone()))
}

pub fn put(env: &Env, record: &StakeRecord) {
    env.storage()
        .persistent()
        .set(&(POSITION, record.owner.clone()), record);
}

pub fn remove(env: &Env, owner: &Address) {
    env.storage().persistent().remove(&(POSITION, owner.clone()));
}

/// Sum of all recorded principals.
pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

pub fn add_to_total(env: &Env, amount: i128) {
    let new_total = total_staked(env).saturating_add(amount);
    env.storage().instance().set(&TOTAL_STAKED, &new_total);
}

pub fn sub_from_total(env: &Env, amount: i128) {
    let new_total = total_staked(env).saturating_sub(amount);
    env.storage().instance().set(&TOTAL_STAKED, &new_total);
}
