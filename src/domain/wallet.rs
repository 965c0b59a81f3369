use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw wallet reports that break the "account iff connected" rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatusError {
    /// Adapter says connected but supplied no account id
    MissingAccount,
    /// Adapter supplied an account id while disconnected
    AccountWhileDisconnected(String),
    /// Account id was present but blank
    EmptyAccount,
}

impl fmt::Display for WalletStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletStatusError::MissingAccount => {
                write!(f, "Wallet reported connected without an account id")
            }
            WalletStatusError::AccountWhileDisconnected(account) => {
                write!(f, "Wallet reported account {} while disconnected", account)
            }
            WalletStatusError::EmptyAccount => write!(f, "Wallet account id is empty"),
        }
    }
}

impl std::error::Error for WalletStatusError {}

/// Public identifier of a connected wallet. Never blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(raw: impl Into<String>) -> Result<Self, WalletStatusError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(WalletStatusError::EmptyAccount);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `abcd..wxyz` form used by the header button and the pre-sale panel.
    pub fn abbreviated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}..{tail}")
    }
}

impl TryFrom<String> for AccountId {
    type Error = WalletStatusError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = WalletStatusError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AccountId> for String {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point-in-time snapshot of the wallet adapter.
///
/// The account is stored as an `Option`, so "connected" and "has an account"
/// cannot disagree. The wire shape is `{"connected": bool, "accountId": string|null}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(try_from = "RawWalletStatus", into = "RawWalletStatus")]
pub struct WalletStatus {
    account: Option<AccountId>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct RawWalletStatus {
    connected: bool,
    #[serde(default)]
    account_id: Option<String>,
}

impl WalletStatus {
    pub fn disconnected() -> Self {
        Self { account: None }
    }

    pub fn connected(account: AccountId) -> Self {
        Self {
            account: Some(account),
        }
    }

    /// Validates a report given as the adapter's two separate fields.
    pub fn from_parts(
        connected: bool,
        account_id: Option<String>,
    ) -> Result<Self, WalletStatusError> {
        match (connected, account_id) {
            (true, Some(raw)) => Ok(Self::connected(AccountId::new(raw)?)),
            (true, None) => Err(WalletStatusError::MissingAccount),
            (false, Some(raw)) => Err(WalletStatusError::AccountWhileDisconnected(raw)),
            (false, None) => Ok(Self::disconnected()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account.as_ref().map(AccountId::as_str)
    }

    pub fn short_label(&self) -> Option<String> {
        self.account.as_ref().map(AccountId::abbreviated)
    }
}

impl TryFrom<RawWalletStatus> for WalletStatus {
    type Error = WalletStatusError;

    fn try_from(raw: RawWalletStatus) -> Result<Self, Self::Error> {
        Self::from_parts(raw.connected, raw.account_id)
    }
}

impl From<WalletStatus> for RawWalletStatus {
    fn from(status: WalletStatus) -> Self {
        Self {
            connected: status.is_connected(),
            account_id: status.account.map(String::from),
        }
    }
}

/// Anything that can report the wallet's current connection.
///
/// Implementations must give `None` for the account exactly when disconnected
/// and keep the account stable while the connection lasts. Callers read a fresh
/// snapshot per decision instead of holding on to an earlier one.
pub trait WalletStatusSource {
    fn status(&self) -> WalletStatus;
}

/// A snapshot is its own (frozen) source.
impl WalletStatusSource for WalletStatus {
    fn status(&self) -> WalletStatus {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_disconnected() {
        let status = WalletStatus::default();
        assert!(!status.is_connected());
        assert_eq!(status.account_id(), None);
        assert_eq!(status.short_label(), None);
    }

    #[test]
    fn from_parts_enforces_account_invariant() {
        assert_eq!(
            WalletStatus::from_parts(true, None),
            Err(WalletStatusError::MissingAccount)
        );
        assert_eq!(
            WalletStatus::from_parts(false, Some("abc123".to_string())),
            Err(WalletStatusError::AccountWhileDisconnected("abc123".to_string()))
        );
        assert_eq!(
            WalletStatus::from_parts(true, Some("  ".to_string())),
            Err(WalletStatusError::EmptyAccount)
        );

        let status = WalletStatus::from_parts(true, Some("abc123".to_string())).unwrap();
        assert!(status.is_connected());
        assert_eq!(status.account_id(), Some("abc123"));
    }

    #[test]
    fn decodes_adapter_json() {
        let status: WalletStatus =
            serde_json::from_str(r#"{"connected":true,"accountId":"abc123"}"#).unwrap();
        assert_eq!(status.account_id(), Some("abc123"));

        let status: WalletStatus =
            serde_json::from_str(r#"{"connected":false,"accountId":null}"#).unwrap();
        assert!(!status.is_connected());

        let status: WalletStatus = serde_json::from_str(r#"{"connected":false}"#).unwrap();
        assert!(!status.is_connected());

        assert!(serde_json::from_str::<WalletStatus>(r#"{"connected":true,"accountId":null}"#).is_err());
    }

    #[test]
    fn encodes_adapter_json() {
        let status = WalletStatus::connected(AccountId::new("abc123").unwrap());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json, serde_json::json!({"connected": true, "accountId": "abc123"}));
    }

    #[test]
    fn short_label_abbreviates_long_accounts() {
        let long = AccountId::new("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
        assert_eq!(long.abbreviated(), "7xKX..gAsU");

        let short = AccountId::new("abc123").unwrap();
        assert_eq!(short.abbreviated(), "abc123");
    }
}
