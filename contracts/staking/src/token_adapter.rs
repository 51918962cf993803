//! Boundary to the two external token contracts.
//!
//! Pulls use the allowance flow: the staker must have pre-approved this
//! contract as spender, and a shortfall in allowance or balance is a caller
//! error reported before any transfer is attempted. Pushes draw from the
//! contract's own custody balance and are pre-checked with
//! [`ensure_custody`] so the transfer that follows a state commit cannot
//! fail.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Tokens of `token_id` the contract currently holds in custody.
pub fn custody_balance(env: &Env, token_id: &Address) -> i128 {
    token::Client::new(env, token_id).balance(&env.current_contract_address())
}

/// Verify the custody balance covers `amount`, mapping a shortfall to the
/// operator error for the token in question.
pub fn ensure_custody(
    env: &Env,
    token_id: &Address,
    amount: i128,
    shortfall: ContractError,
) -> Result<(), ContractError> {
    if amount > 0 && custody_balance(env, token_id) < amount {
        return Err(shortfall);
    }
    Ok(())
}

/// Pull `amount` of `token_id` from `from` into custody.
pub fn pull(
    env: &Env,
    token_id: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let custody = env.current_contract_address();
    let client = token::Client::new(env, token_id);

    if client.allowance(from, &custody) < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    client.transfer_from(&custody, from, &custody, &amount);
    Ok(())
}

/// Push `amount` of `token_id` from custody to `to`.
///
/// Callers must have verified custody via [`ensure_custody`] before
/// committing ledger state; by that point this transfer cannot fail.
pub fn push(env: &Env, token_id: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    token::Client::new(env, token_id).transfer(&env.current_contract_address(), to, &amount);
}
