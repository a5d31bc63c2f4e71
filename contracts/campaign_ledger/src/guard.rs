//! Ledger-wide reentrancy lock held for the duration of a payout.

use soroban_sdk::Env;

use crate::storage;
use crate::Error;

/// Holds the payout lock until dropped.
///
/// Acquisition fails with [`Error::Reentrant`] while another guard is alive,
/// and the lock is released on every exit path of the owning scope.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if storage::is_locked(env) {
            return Err(Error::Reentrant);
        }
        storage::set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        storage::set_locked(self.env, false);
    }
}
