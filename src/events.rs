//! Event emission helpers for the registry contract.
//!
//! Events are published only after every state change of the operation has
//! been applied, so a failed invocation never leaves one behind.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when a profile is registered.
pub fn emit_registered(env: &Env, address: &Address, name: &String, id: u64) {
    let topics = (Symbol::new(env, "registered"),);
    env.events()
        .publish(topics, (address.clone(), name.clone(), id));
}

/// Emit an event when value is credited to a ledger entry.
pub fn emit_deposited(env: &Env, address: &Address, amount: i128) {
    let topics = (Symbol::new(env, "deposited"),);
    env.events().publish(topics, (address.clone(), amount));
}

/// Emit an event when a ledger entry is paid out.
pub fn emit_withdrawn(env: &Env, address: &Address, amount: i128) {
    let topics = (Symbol::new(env, "withdrawn"),);
    env.events().publish(topics, (address.clone(), amount));
}

/// Emit an audit event for an admin operation.
///
/// `action` is one of `paused`, `unpaused`, `fee_set`, `oracle_set`,
/// `sweep` or `upgraded`.
pub fn emit_admin_action(env: &Env, admin: &Address, action: &str) {
    let topics = (Symbol::new(env, "admin_action"),);
    env.events()
        .publish(topics, (admin.clone(), Symbol::new(env, action)));
}
