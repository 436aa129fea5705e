//! Reentrancy guard for operations that pay out of the pool.

use soroban_sdk::{log, Env};

use crate::storage::RegistryKey;
use crate::RegistryError;

/// Scoped lock held across a payout.
///
/// The lock flag is set on acquisition and cleared when the guard is
/// dropped, on every exit path of the guarded operation.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    /// Take the lock, or fail with `Reentrant` if a guarded operation is
    /// already in progress.
    pub fn acquire(env: &'a Env) -> Result<Self, RegistryError> {
        if Self::is_locked(env) {
            log!(env, "reentrant call rejected");
            return Err(RegistryError::Reentrant);
        }

        env.storage().instance().set(&RegistryKey::Locked, &true);
        Ok(Self { env })
    }

    /// Check whether a guarded operation is in progress.
    pub fn is_locked(env: &Env) -> bool {
        env.storage().instance().has(&RegistryKey::Locked)
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&RegistryKey::Locked);
    }
}
