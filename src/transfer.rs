//! Token movements in and out of the pool.
//!
//! Every transfer goes through the fallible client call so that a refusing
//! or failing token surfaces as `TransferFailed` instead of a trap.

use soroban_sdk::{token, Address, Env};

use crate::RegistryError;

/// Move `amount` from `from` into the pool.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), RegistryError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(RegistryError::TransferFailed),
    }
}

/// Move `amount` out of the pool to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), RegistryError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(RegistryError::TransferFailed),
    }
}

/// Value currently held by the registry.
pub fn pool_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
