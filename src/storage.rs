//! Storage key definitions and typed accessors for the registry contract.

use soroban_sdk::{contracttype, Address, Env};

use crate::profile::Profile;

/// Storage keys for the registry contract.
///
/// Admin state lives in instance storage; profiles and ledger entries are
/// keyed per address in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Contract administrator address.
    Admin,

    /// Token contract that holds the pooled value.
    Token,

    /// Current price oracle contract.
    Oracle,

    /// Registration fee in token base units.
    RegistrationFee,

    /// Global pause flag.
    Paused,

    /// Last assigned profile id. Zero until the first registration.
    ProfileCount,

    /// Set while a guarded payout is in flight.
    Locked,

    /// Maps Address to Profile struct.
    Profile(Address),

    /// Maps Address to deposited balance.
    Balance(Address),
}

/// Time-to-live for profile and ledger data in ledger entries.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_EXTEND: u32 = 2592000; // ~150 days

/// 0.005 of a 7-decimal native unit.
pub const DEFAULT_REGISTRATION_FEE: i128 = 50_000;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&RegistryKey::Admin)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Admin)
}

pub fn read_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Token)
}

pub fn read_oracle(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Oracle)
}

pub fn write_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&RegistryKey::Oracle, oracle);
}

pub fn read_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&RegistryKey::RegistrationFee)
        .unwrap_or(DEFAULT_REGISTRATION_FEE)
}

pub fn write_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&RegistryKey::RegistrationFee, &fee);
}

pub fn read_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&RegistryKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&RegistryKey::Paused, &paused);
}

pub fn read_profile_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::ProfileCount)
        .unwrap_or(0)
}

pub fn write_profile_count(env: &Env, count: u64) {
    env.storage().instance().set(&RegistryKey::ProfileCount, &count);
}

/// Absence of the key is the only "not registered" signal internally.
pub fn read_profile(env: &Env, owner: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Profile(owner.clone()))
}

pub fn has_profile(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryKey::Profile(owner.clone()))
}

pub fn write_profile(env: &Env, owner: &Address, profile: &Profile) {
    let key = RegistryKey::Profile(owner.clone());
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn read_balance(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&RegistryKey::Balance(owner.clone()))
        .unwrap_or(0)
}

/// Zeroed entries are kept as records rather than removed.
pub fn write_balance(env: &Env, owner: &Address, amount: i128) {
    let key = RegistryKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
