#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod token_adapter;

use common::tiers::{self, TierDefinition, TierError};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Vec,
};

use ledger::StakeRecord;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const TIER_TABLE: Symbol = symbol_short!("TIERS");
const PERIOD_LEN: Symbol = symbol_short!("PERIOD");
const COOLDOWN: Symbol = symbol_short!("COOLDOWN");

// ── Contract errors ──────────────────────────────────────────────────────────

/// Error codes, grouped by who has to act on them: caller errors (3–8),
/// operator errors (10–11), and configuration errors (20–23).
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Caller errors: no state is mutated, nothing is retried.
    InvalidAmount = 3,
    InsufficientAllowance = 4,
    InsufficientBalance = 5,
    NoPosition = 6,
    InsufficientStake = 7,
    CooldownActive = 8,

    // Operator errors: the contract's own custody is under-funded.
    RewardPoolExhausted = 10,
    InsufficientCustodyBalance = 11,

    // Configuration errors: fatal at initialisation.
    TokensIdentical = 20,
    InvalidPeriodLength = 21,
    EmptyTierTable = 22,
    InvalidTierTable = 23,
}

fn config_error(err: TierError) -> ContractError {
    match err {
        TierError::EmptyTable => ContractError::EmptyTierTable,
        TierError::ThresholdOrder | TierError::NegativeRate | TierError::MissingCatchAll => {
            ContractError::InvalidTierTable
        }
    }
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Snapshot of an account's position returned by `get_position`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub principal: i128,
    pub tier: TierDefinition,
    pub pending_reward: i128,
    pub last_checkpoint: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TieredStakingContract;

#[contractimpl]
impl TieredStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `stake_token`   – address of the token users deposit.
    /// * `reward_token`  – address of the token paid out as rewards.
    /// * `tier_table`    – reward tiers, highest threshold first; must end in
    ///                     a catch-all tier with threshold 0.
    /// * `period_length` – time units that make up one accrual period.
    /// * `cooldown`      – time units after a deposit before principal may be
    ///                     withdrawn (0 disables the cooldown).
    ///
    /// Any configuration error leaves the contract non-operational: every
    /// other entry point guards on initialisation.
    pub fn initialize(
        env: Env,
        stake_token: Address,
        reward_token: Address,
        tier_table: Vec<TierDefinition>,
        period_length: u64,
        cooldown: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if period_length == 0 {
            return Err(ContractError::InvalidPeriodLength);
        }
        tiers::validate(&tier_table).map_err(config_error)?;

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKE_TOKEN, &stake_token);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&TIER_TABLE, &tier_table);
        env.storage().instance().set(&PERIOD_LEN, &period_length);
        env.storage().instance().set(&COOLDOWN, &cooldown);

        events::publish_initialized(&env, stake_token, reward_token, period_length, cooldown);

        Ok(())
    }

    // ── Deposits ────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens and return the resulting tier.
    ///
    /// The pull is allowance-based: the staker must have pre-approved this
    /// contract as spender. An existing position is settled first, so the
    /// new principal never earns at the old tier's rate retroactively; a
    /// tier upgrade takes effect immediately on the new total.
    pub fn deposit(
        env: Env,
        staker: Address,
        amount: i128,
    ) -> Result<TierDefinition, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let stake_token = Self::stake_token_id(&env)?;
        let reward_token = Self::reward_token_id(&env)?;
        let table = Self::tier_config(&env)?;
        let period = Self::period_config(&env)?;
        let now = env.ledger().timestamp();

        // Settle the existing position before the principal changes.
        let (prev_principal, owed, old_tier) = match ledger::get(&env, &staker) {
            Some(record) => {
                let owed = rewards::accrued(
                    record.principal,
                    record.tier.rate_per_period,
                    now.saturating_sub(record.last_checkpoint),
                    period,
                );
                token_adapter::ensure_custody(
                    &env,
                    &reward_token,
                    owed,
                    ContractError::RewardPoolExhausted,
                )?;
                (record.principal, owed, Some(record.tier))
            }
            None => (0, 0, None),
        };

        // Last fallible step: allowance and balance shortfalls surface here,
        // before any state change.
        token_adapter::pull(&env, &stake_token, &staker, amount)?;

        let new_principal = prev_principal.saturating_add(amount);
        let new_tier = tiers::classify(&table, new_principal);
        ledger::put(
            &env,
            &StakeRecord {
                owner: staker.clone(),
                principal: new_principal,
                tier: new_tier.clone(),
                last_checkpoint: now,
                staked_at: now,
            },
        );
        ledger::add_to_total(&env, amount);

        // State is committed; the outbound settlement transfer comes last.
        token_adapter::push(&env, &reward_token, &staker, owed);

        events::publish_deposited(
            &env,
            staker.clone(),
            amount,
            new_principal,
            new_tier.name.clone(),
        );
        if owed > 0 {
            events::publish_reward_paid(&env, staker.clone(), owed);
        }
        if let Some(old) = old_tier {
            if old.name != new_tier.name {
                events::publish_tier_changed(&env, staker, old.name, new_tier.name.clone());
            }
        }

        Ok(new_tier)
    }

    // ── Stake withdrawal ────────────────────────────────────────────────────

    /// Withdraw `amount` of staked principal back to the staker.
    ///
    /// Pending reward is settled first; the remaining principal is
    /// re-classified (the record is removed entirely when it reaches zero).
    /// Returns the refunded amount.
    pub fn withdraw_stake(
        env: Env,
        staker: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let record = ledger::get(&env, &staker).ok_or(ContractError::NoPosition)?;
        if amount > record.principal {
            return Err(ContractError::InsufficientStake);
        }

        let now = env.ledger().timestamp();
        let cooldown: u64 = env.storage().instance().get(&COOLDOWN).unwrap_or(0);
        if now < record.staked_at.saturating_add(cooldown) {
            return Err(ContractError::CooldownActive);
        }

        let stake_token = Self::stake_token_id(&env)?;
        let reward_token = Self::reward_token_id(&env)?;
        let table = Self::tier_config(&env)?;
        let period = Self::period_config(&env)?;

        let owed = rewards::accrued(
            record.principal,
            record.tier.rate_per_period,
            now.saturating_sub(record.last_checkpoint),
            period,
        );

        // Both pushes must be covered before any state changes; a failure
        // here aborts the whole call with nothing mutated.
        token_adapter::ensure_custody(
            &env,
            &reward_token,
            owed,
            ContractError::RewardPoolExhausted,
        )?;
        token_adapter::ensure_custody(
            &env,
            &stake_token,
            amount,
            ContractError::InsufficientCustodyBalance,
        )?;

        let remaining = record.principal.saturating_sub(amount);
        let old_tier = record.tier.clone();
        let mut new_tier_name = None;
        if remaining == 0 {
            ledger::remove(&env, &staker);
        } else {
            let new_tier = tiers::classify(&table, remaining);
            if new_tier.name != old_tier.name {
                new_tier_name = Some(new_tier.name.clone());
            }
            ledger::put(
                &env,
                &StakeRecord {
                    owner: staker.clone(),
                    principal: remaining,
                    tier: new_tier,
                    last_checkpoint: now,
                    staked_at: record.staked_at,
                },
            );
        }
        ledger::sub_from_total(&env, amount);

        // State is committed; outbound transfers come last.
        token_adapter::push(&env, &reward_token, &staker, owed);
        token_adapter::push(&env, &stake_token, &staker, amount);

        events::publish_stake_withdrawn(&env, staker.clone(), amount, remaining);
        if owed > 0 {
            events::publish_reward_paid(&env, staker.clone(), owed);
        }
        if let Some(new_name) = new_tier_name {
            events::publish_tier_changed(&env, staker, old_tier.name, new_name);
        }

        Ok(amount)
    }

    // ── Reward withdrawal ───────────────────────────────────────────────────

    /// Pay out all reward accrued since the last checkpoint and return the
    /// amount paid.
    ///
    /// With zero elapsed time this is an idempotent no-op: it succeeds, pays
    /// nothing, and leaves the checkpoint where it was. A positive elapsed
    /// time always advances the checkpoint, even when truncation (or a
    /// zero-rate tier) makes the payout zero.
    pub fn withdraw_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let mut record = ledger::get(&env, &staker).ok_or(ContractError::NoPosition)?;

        let reward_token = Self::reward_token_id(&env)?;
        let period = Self::period_config(&env)?;
        let now = env.ledger().timestamp();

        let owed = rewards::accrued(
            record.principal,
            record.tier.rate_per_period,
            now.saturating_sub(record.last_checkpoint),
            period,
        );
        token_adapter::ensure_custody(
            &env,
            &reward_token,
            owed,
            ContractError::RewardPoolExhausted,
        )?;

        // Checkpoint advances before the outbound transfer.
        record.last_checkpoint = now;
        ledger::put(&env, &record);

        token_adapter::push(&env, &reward_token, &staker, owed);

        if owed > 0 {
            events::publish_reward_paid(&env, staker, owed);
        }

        Ok(owed)
    }

    // ── View functions ──────────────────────────────────────────────────────

    /// Tier for the account's current principal, recomputed at call time.
    pub fn get_tier_of(env: Env, account: Address) -> Option<TierDefinition> {
        let table: Vec<TierDefinition> = env.storage().instance().get(&TIER_TABLE)?;
        ledger::get(&env, &account).map(|record| tiers::classify(&table, record.principal))
    }

    /// Combined snapshot of an account's position, including the reward that
    /// would be paid by `withdraw_reward` right now.
    pub fn get_position(env: Env, account: Address) -> Option<PositionInfo> {
        let record = ledger::get(&env, &account)?;
        let period: u64 = env.storage().instance().get(&PERIOD_LEN).unwrap_or(0);
        let elapsed = env.ledger().timestamp().saturating_sub(record.last_checkpoint);

        Some(PositionInfo {
            principal: record.principal,
            pending_reward: rewards::accrued(
                record.principal,
                record.tier.rate_per_period,
                elapsed,
                period,
            ),
            tier: record.tier,
            last_checkpoint: record.last_checkpoint,
        })
    }

    /// Reward accrued since the account's last checkpoint, without mutation.
    pub fn get_pending_reward(env: Env, account: Address) -> i128 {
        Self::get_position(env, account)
            .map(|position| position.pending_reward)
            .unwrap_or(0)
    }

    /// Sum of all recorded principals.
    pub fn get_total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    pub fn get_tier_table(env: Env) -> Vec<TierDefinition> {
        env.storage()
            .instance()
            .get(&TIER_TABLE)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_period_length(env: Env) -> u64 {
        env.storage().instance().get(&PERIOD_LEN).unwrap_or(0)
    }

    pub fn get_cooldown(env: Env) -> u64 {
        env.storage().instance().get(&COOLDOWN).unwrap_or(0)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn stake_token_id(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn reward_token_id(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn tier_config(env: &Env) -> Result<Vec<TierDefinition>, ContractError> {
        env.storage()
            .instance()
            .get(&TIER_TABLE)
            .ok_or(ContractError::NotInitialized)
    }

    fn period_config(env: &Env) -> Result<u64, ContractError> {
        env.storage()
            .instance()
            .get(&PERIOD_LEN)
            .ok_or(ContractError::NotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
