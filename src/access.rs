//! Admin and pause checks shared by every mutating entry point.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::RegistryError;

pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !storage::is_initialized(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

/// Fails with `Unauthorized` unless `caller` is the admin, then requires the
/// admin's signature.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, RegistryError> {
    let admin = storage::read_admin(env).ok_or(RegistryError::NotInitialized)?;

    if *caller != admin {
        return Err(RegistryError::Unauthorized);
    }

    caller.require_auth();
    Ok(admin)
}

pub fn require_not_paused(env: &Env) -> Result<(), RegistryError> {
    require_initialized(env)?;
    if storage::read_paused(env) {
        return Err(RegistryError::Paused);
    }
    Ok(())
}

pub fn require_paused(env: &Env) -> Result<(), RegistryError> {
    require_initialized(env)?;
    if !storage::read_paused(env) {
        return Err(RegistryError::NotPaused);
    }
    Ok(())
}

/// Flip the pause flag and return the new state. Legal from either state.
pub fn toggle_pause(env: &Env) -> bool {
    let paused = !storage::read_paused(env);
    storage::write_paused(env, paused);
    paused
}
