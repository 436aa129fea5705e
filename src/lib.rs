//! # Soroban Fee Registry
//!
//! One-time paid profile registration with a per-user deposit ledger.
//!
//! - Each address registers at most one immutable profile by paying the
//!   exact registration fee
//! - Registered addresses deposit into a pooled token balance and withdraw
//!   their full ledger balance
//! - An oracle converts token amounts into a quote currency for reporting
//! - The admin sets the fee and oracle, pauses all mutating operations, and
//!   can sweep the pool while paused
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&admin, &token, &oracle);
//!
//! let fee = client.registration_fee();
//! let id = client.register(&caller, &name, &30, &false, &fee);
//!
//! client.deposit(&caller, &1_000);
//! let paid_out = client.withdraw(&caller);
//! ```

#![no_std]

mod access;
mod events;
mod guard;
mod oracle;
mod profile;
mod storage;
mod transfer;
mod validation;

pub use oracle::{Asset, PriceData, PriceOracle, PriceOracleClient, MAX_PRICE_AGE};
pub use profile::Profile;
pub use storage::{RegistryKey, DEFAULT_REGISTRATION_FEE};
pub use validation::{validate_name, MAX_NAME_LENGTH, MIN_AGE, MIN_NAME_LENGTH};

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, BytesN, Env, String,
};

use crate::events::*;
use crate::guard::ReentrancyGuard;

/// Error codes for the registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not the admin.
    Unauthorized = 3,
    /// Mutating operations are paused.
    Paused = 4,
    /// Operation requires the contract to be paused.
    NotPaused = 5,
    /// Payment does not equal the registration fee.
    WrongFee = 6,
    /// Caller already has a profile.
    AlreadyRegistered = 7,
    /// Caller address cannot own a profile.
    InvalidIdentity = 8,
    /// Name is empty or longer than 32 bytes.
    InvalidName = 9,
    /// Registrant is younger than 18.
    Underage = 10,
    /// Caller has no profile.
    NotRegistered = 11,
    /// Amount must be greater than zero.
    ZeroAmount = 12,
    /// Nothing to withdraw.
    NoBalance = 13,
    /// Token transfer failed.
    TransferFailed = 14,
    /// A guarded payout is already in progress.
    Reentrant = 15,
    /// New fee equals the current fee.
    FeeUnchanged = 16,
    /// Fee must be greater than zero.
    InvalidFee = 17,
    /// Oracle address is the current one or the registry itself.
    InvalidOracle = 18,
    /// Oracle reported a non-positive price.
    InvalidPrice = 19,
    /// Oracle call failed or returned no price.
    OracleUnavailable = 20,
    /// Oracle price is older than the accepted age.
    StaleData = 21,
    /// Arithmetic overflow.
    Overflow = 22,
    /// Token address is the registry itself.
    InvalidToken = 23,
}

/// Snapshot of the admin-controlled configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    pub token: Address,
    pub oracle: Address,
    pub registration_fee: i128,
    pub paused: bool,
}

#[contract]
pub struct FeeRegistryContract;

#[contractimpl]
impl FeeRegistryContract {
    // ========== Initialization ==========

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to run admin operations
    /// * `token` - Token contract holding the pooled value
    /// * `oracle` - Price oracle used for conversions
    pub fn init(env: Env, admin: Address, token: Address, oracle: Address) -> Result<(), RegistryError> {
        if storage::is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }

        if token == env.current_contract_address() {
            return Err(RegistryError::InvalidToken);
        }

        if oracle == env.current_contract_address() {
            return Err(RegistryError::InvalidOracle);
        }

        admin.require_auth();
        env.storage().instance().set(&RegistryKey::Admin, &admin);
        env.storage().instance().set(&RegistryKey::Token, &token);
        storage::write_oracle(&env, &oracle);
        storage::write_fee(&env, DEFAULT_REGISTRATION_FEE);
        storage::write_paused(&env, false);
        storage::write_profile_count(&env, 0);

        Ok(())
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        storage::read_admin(&env).ok_or(RegistryError::NotInitialized)
    }

    /// Get the pooled token address.
    pub fn token(env: Env) -> Result<Address, RegistryError> {
        storage::read_token(&env).ok_or(RegistryError::NotInitialized)
    }

    /// Get the current oracle address.
    pub fn oracle(env: Env) -> Result<Address, RegistryError> {
        storage::read_oracle(&env).ok_or(RegistryError::NotInitialized)
    }

    /// Get the current registration fee.
    pub fn registration_fee(env: Env) -> i128 {
        storage::read_fee(&env)
    }

    /// Check whether mutating operations are paused.
    pub fn is_paused(env: Env) -> bool {
        storage::read_paused(&env)
    }

    /// Get the full admin configuration in one call.
    pub fn config(env: Env) -> Result<RegistryConfig, RegistryError> {
        Ok(RegistryConfig {
            admin: Self::admin(env.clone())?,
            token: Self::token(env.clone())?,
            oracle: Self::oracle(env.clone())?,
            registration_fee: storage::read_fee(&env),
            paused: storage::read_paused(&env),
        })
    }

    // ========== Registration ==========

    /// Register a profile for `caller`.
    ///
    /// `payment` must equal the current registration fee exactly; it is
    /// pulled from the caller into the pool.
    ///
    /// # Returns
    /// The assigned profile id.
    ///
    /// # Errors
    /// Checked in order: `Paused`, `WrongFee`, `AlreadyRegistered`,
    /// `InvalidIdentity`, `InvalidName`, `Underage`.
    pub fn register(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
        married: bool,
        payment: i128,
    ) -> Result<u64, RegistryError> {
        caller.require_auth();
        access::require_not_paused(&env)?;

        if payment != storage::read_fee(&env) {
            return Err(RegistryError::WrongFee);
        }

        if storage::has_profile(&env, &caller) {
            return Err(RegistryError::AlreadyRegistered);
        }

        if caller == env.current_contract_address() {
            return Err(RegistryError::InvalidIdentity);
        }

        if !validation::validate_name(&name) {
            return Err(RegistryError::InvalidName);
        }

        if !validation::validate_age(age) {
            return Err(RegistryError::Underage);
        }

        let token = Self::token(env.clone())?;

        let id = storage::read_profile_count(&env)
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        storage::write_profile_count(&env, id);

        let profile = Profile::new(name.clone(), age, married, id);
        storage::write_profile(&env, &caller, &profile);

        // The fee joins the pool without a ledger entry
        transfer::pull(&env, &token, &caller, payment)?;

        emit_registered(&env, &caller, &name, id);

        Ok(id)
    }

    // ========== Profile Queries ==========

    /// Get the profile for `address`.
    ///
    /// Unregistered addresses get the zero-valued profile with id 0.
    pub fn get_profile(env: Env, address: Address) -> Profile {
        storage::read_profile(&env, &address).unwrap_or_else(|| Profile::empty(&env))
    }

    /// Check whether `address` has a profile.
    pub fn is_registered(env: Env, address: Address) -> bool {
        storage::has_profile(&env, &address)
    }

    /// Number of profiles registered so far; also the last assigned id.
    pub fn profile_count(env: Env) -> u64 {
        storage::read_profile_count(&env)
    }

    // ========== Ledger ==========

    /// Credit `amount` to the caller's ledger entry.
    ///
    /// # Returns
    /// The caller's new balance.
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<i128, RegistryError> {
        caller.require_auth();
        access::require_not_paused(&env)?;

        if !storage::has_profile(&env, &caller) {
            return Err(RegistryError::NotRegistered);
        }

        if amount <= 0 {
            return Err(RegistryError::ZeroAmount);
        }

        let token = Self::token(env.clone())?;

        let balance = storage::read_balance(&env, &caller)
            .checked_add(amount)
            .ok_or(RegistryError::Overflow)?;
        storage::write_balance(&env, &caller, balance);

        transfer::pull(&env, &token, &caller, amount)?;

        emit_deposited(&env, &caller, amount);

        Ok(balance)
    }

    /// Pay out the caller's whole ledger balance.
    ///
    /// The entry is zeroed before the outbound transfer. A failed transfer
    /// fails the call and the zeroing is rolled back with it.
    ///
    /// # Returns
    /// The amount paid out.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, RegistryError> {
        caller.require_auth();
        access::require_not_paused(&env)?;

        let _guard = ReentrancyGuard::acquire(&env)?;

        let amount = storage::read_balance(&env, &caller);
        if amount <= 0 {
            return Err(RegistryError::NoBalance);
        }

        let token = Self::token(env.clone())?;

        storage::write_balance(&env, &caller, 0);
        transfer::push(&env, &token, &caller, amount)?;

        emit_withdrawn(&env, &caller, amount);

        Ok(amount)
    }

    /// Get the ledger balance of `address`.
    pub fn balance_of(env: Env, address: Address) -> i128 {
        storage::read_balance(&env, &address)
    }

    /// Get the total value held by the registry, fees included.
    pub fn pool_balance(env: Env) -> Result<i128, RegistryError> {
        let token = Self::token(env.clone())?;
        Ok(transfer::pool_balance(&env, &token))
    }

    // ========== Price Queries ==========

    /// Latest validated price of the pooled token.
    pub fn latest_price(env: Env) -> Result<PriceData, RegistryError> {
        let oracle = Self::oracle(env.clone())?;
        let asset = Asset::Stellar(Self::token(env.clone())?);
        oracle::latest_price(&env, &oracle, &asset)
    }

    /// Convert a token amount into the oracle's quote currency.
    pub fn convert(env: Env, amount: i128) -> Result<i128, RegistryError> {
        let oracle = Self::oracle(env.clone())?;
        let asset = Asset::Stellar(Self::token(env.clone())?);
        oracle::convert(&env, &oracle, &asset, amount)
    }

    // ========== Admin Functions ==========

    /// Flip the pause flag (admin only).
    ///
    /// # Returns
    /// The new paused state.
    pub fn toggle_pause(env: Env, caller: Address) -> Result<bool, RegistryError> {
        let admin = access::require_admin(&env, &caller)?;

        let paused = access::toggle_pause(&env);
        log!(&env, "pause toggled", paused);

        emit_admin_action(&env, &admin, if paused { "paused" } else { "unpaused" });

        Ok(paused)
    }

    /// Set the registration fee (admin only).
    pub fn set_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), RegistryError> {
        let admin = access::require_admin(&env, &caller)?;

        if new_fee == storage::read_fee(&env) {
            return Err(RegistryError::FeeUnchanged);
        }

        if !validation::validate_fee(new_fee) {
            return Err(RegistryError::InvalidFee);
        }

        storage::write_fee(&env, new_fee);
        log!(&env, "registration fee set", new_fee);

        emit_admin_action(&env, &admin, "fee_set");

        Ok(())
    }

    /// Point the registry at a different price oracle (admin only).
    pub fn set_oracle(env: Env, caller: Address, new_oracle: Address) -> Result<(), RegistryError> {
        let admin = access::require_admin(&env, &caller)?;

        let current = Self::oracle(env.clone())?;
        if new_oracle == current || new_oracle == env.current_contract_address() {
            return Err(RegistryError::InvalidOracle);
        }

        storage::write_oracle(&env, &new_oracle);
        log!(&env, "oracle set", new_oracle);

        emit_admin_action(&env, &admin, "oracle_set");

        Ok(())
    }

    /// Send the entire pool to the admin (admin only, while paused).
    ///
    /// Individual ledger entries are left untouched.
    ///
    /// # Returns
    /// The amount swept.
    pub fn emergency_withdraw(env: Env, caller: Address) -> Result<i128, RegistryError> {
        let admin = access::require_admin(&env, &caller)?;
        access::require_paused(&env)?;

        let _guard = ReentrancyGuard::acquire(&env)?;

        let token = Self::token(env.clone())?;
        let pool = transfer::pool_balance(&env, &token);
        if pool <= 0 {
            return Err(RegistryError::NoBalance);
        }

        transfer::push(&env, &token, &admin, pool)?;
        log!(&env, "pool swept", pool);

        emit_admin_action(&env, &admin, "sweep");

        Ok(pool)
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        let admin = access::require_admin(&env, &caller)?;

        emit_admin_action(&env, &admin, "upgraded");
        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }
}
