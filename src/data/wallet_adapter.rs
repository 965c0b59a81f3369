use anyhow::{Context, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{AccountId, WalletStatus, WalletStatusError, WalletStatusSource};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_WALLET_EVENTS;

const ACCOUNT_BYTES: usize = 32;

/// Stand-in wallet adapter for running the page without a browser extension.
///
/// Share it behind an `Arc`: the UI keeps one handle to drive connect /
/// disconnect, the engine keeps another as its `WalletStatusSource`.
/// The account stays the same for as long as the connection lasts.
#[derive(Debug, Default)]
pub struct SimulatedWallet {
    account: Mutex<Option<AccountId>>,
}

impl SimulatedWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already connected under `account`.
    pub fn connected_as(account: impl Into<String>) -> Result<Self, WalletStatusError> {
        let wallet = Self::new();
        wallet.connect_with(account)?;
        Ok(wallet)
    }

    /// Connect under a freshly generated account id.
    /// Already connected: keeps and returns the current account.
    pub fn connect(&self) -> Result<AccountId> {
        if let Some(existing) = self.lock().clone() {
            return Ok(existing);
        }
        let account = random_account().context("Failed to generate a simulated wallet account")?;
        Ok(self.install(account))
    }

    /// Connect under a caller-chosen account id.
    /// Already connected: keeps and returns the current account.
    pub fn connect_with(&self, account: impl Into<String>) -> Result<AccountId, WalletStatusError> {
        let account = AccountId::new(account)?;
        Ok(self.install(account))
    }

    pub fn disconnect(&self) {
        let _previous = self.lock().take();
        #[cfg(debug_assertions)]
        if PRINT_WALLET_EVENTS {
            if let Some(account) = &_previous {
                log::info!("[wallet] disconnected {account}");
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.lock().is_some()
    }

    fn install(&self, account: AccountId) -> AccountId {
        let mut slot = self.lock();
        let current = slot.get_or_insert(account);
        #[cfg(debug_assertions)]
        if PRINT_WALLET_EVENTS {
            log::info!("[wallet] connected {current}");
        }
        current.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<AccountId>> {
        // Only ever holds a plain Option, so a poisoned lock is still usable
        self.account.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WalletStatusSource for SimulatedWallet {
    fn status(&self) -> WalletStatus {
        match self.lock().clone() {
            Some(account) => WalletStatus::connected(account),
            None => WalletStatus::disconnected(),
        }
    }
}

fn random_account() -> Result<AccountId> {
    let mut bytes = [0u8; ACCOUNT_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {e}"))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(AccountId::new(hex)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let wallet = SimulatedWallet::new();
        assert!(!wallet.is_connected());
        assert_eq!(wallet.status(), WalletStatus::disconnected());
    }

    #[test]
    fn generated_account_is_stable_while_connected() {
        let wallet = SimulatedWallet::new();
        let account = wallet.connect().unwrap();
        assert_eq!(account.as_str().len(), ACCOUNT_BYTES * 2);

        assert_eq!(wallet.connect().unwrap(), account);
        assert_eq!(wallet.connect_with("other").unwrap(), account);
        assert_eq!(wallet.status().account(), Some(&account));
    }

    #[test]
    fn disconnect_clears_account() {
        let wallet = SimulatedWallet::connected_as("abc123").unwrap();
        assert_eq!(wallet.status().account_id(), Some("abc123"));

        wallet.disconnect();
        assert!(!wallet.status().is_connected());
        assert_eq!(wallet.status().account_id(), None);

        // A reconnect may come back as someone else
        wallet.connect_with("def456").unwrap();
        assert_eq!(wallet.status().account_id(), Some("def456"));
    }

    #[test]
    fn blank_account_is_refused() {
        assert_eq!(
            SimulatedWallet::connected_as("").unwrap_err(),
            WalletStatusError::EmptyAccount
        );
    }
}
