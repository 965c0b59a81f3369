//! Pre-sale reservation decisions.
//!
//! A reservation is a client-side acknowledgment only. Nothing is signed,
//! sent or stored, so there is no pending state: each attempt is evaluated
//! on the spot from the wallet snapshot and the chosen ring.

use std::fmt;

use crate::domain::{RingVariant, VariantCatalog, WalletStatus, WalletStatusSource};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_RESERVATIONS;

use super::notify::{Notification, Notifier};
use super::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Expected and recoverable: the visitor has to connect a wallet
    WalletNotConnected,
    /// The selection names no configured ring. Indicates an integration bug.
    InvalidVariant(String),
}

impl RejectionReason {
    /// True when the visitor can fix it themselves (prompt to connect).
    pub fn is_actionable(&self) -> bool {
        matches!(self, RejectionReason::WalletNotConnected)
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::WalletNotConnected => {
                write!(f, "Please connect your wallet to participate in the pre-sale")
            }
            RejectionReason::InvalidVariant(key) => {
                write!(f, "Reservation failed: {:?} is not an available ring", key)
            }
        }
    }
}

impl std::error::Error for RejectionReason {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationOutcome {
    Accepted { variant: &'static RingVariant },
    Rejected { reason: RejectionReason },
}

impl ReservationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ReservationOutcome::Accepted { .. })
    }

    pub fn accepted_key(&self) -> Option<&'static str> {
        match self {
            ReservationOutcome::Accepted { variant } => Some(variant.key),
            ReservationOutcome::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            ReservationOutcome::Accepted { .. } => None,
            ReservationOutcome::Rejected { reason } => Some(reason),
        }
    }

    /// True when the page should nudge the visitor towards the connect button.
    pub fn needs_wallet(&self) -> bool {
        self.rejection().is_some_and(RejectionReason::is_actionable)
    }

    pub fn notification(&self) -> Notification {
        match self {
            ReservationOutcome::Accepted { variant } => Notification::success(format!(
                "Successfully registered for the {} ring pre-sale!",
                variant.label
            )),
            ReservationOutcome::Rejected { reason } => Notification::error(reason.to_string()),
        }
    }
}

/// Decide a single reservation attempt.
///
/// The wallet check comes first, so a disconnected wallet gets the same answer
/// whatever was selected. Pure: same inputs, same outcome, nothing mutated.
pub fn attempt_reservation(
    catalog: &VariantCatalog,
    selection: &str,
    wallet: &WalletStatus,
) -> ReservationOutcome {
    if !wallet.is_connected() {
        return ReservationOutcome::Rejected {
            reason: RejectionReason::WalletNotConnected,
        };
    }

    match catalog.get(selection) {
        Some(variant) => ReservationOutcome::Accepted { variant },
        None => ReservationOutcome::Rejected {
            reason: RejectionReason::InvalidVariant(selection.to_string()),
        },
    }
}

/// Handle a click on the reserve button.
///
/// Reads a fresh wallet snapshot (never a cached one), decides, and hands
/// the resulting message to `notifier`.
pub fn submit<S, N>(selection: &SelectionState, wallet: &S, notifier: &mut N) -> ReservationOutcome
where
    S: WalletStatusSource + ?Sized,
    N: Notifier + ?Sized,
{
    let status = wallet.status();
    let outcome = attempt_reservation(&selection.catalog(), selection.current_key(), &status);

    #[cfg(debug_assertions)]
    if PRINT_RESERVATIONS {
        match &outcome {
            ReservationOutcome::Accepted { variant } => log::info!(
                "[presale] accepted {} for {}",
                variant.key,
                status.account_id().unwrap_or("?")
            ),
            ReservationOutcome::Rejected { reason } => {
                log::info!("[presale] rejected {}: {reason}", selection.current_key())
            }
        }
    }
    if let ReservationOutcome::Rejected {
        reason: RejectionReason::InvalidVariant(key),
    } = &outcome
    {
        log::error!("Reservation attempted for unknown ring {key:?}");
    }

    notifier.notify(outcome.notification());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RING_CATALOG;
    use crate::domain::AccountId;
    use crate::engine::notify::NotificationLevel;
    use std::cell::RefCell;

    fn connected(account: &str) -> WalletStatus {
        WalletStatus::connected(AccountId::new(account).unwrap())
    }

    #[test]
    fn disconnected_wallet_is_always_rejected_first() {
        let wallet = WalletStatus::disconnected();
        for key in ["10M", "100M", "50M", ""] {
            assert_eq!(
                attempt_reservation(&RING_CATALOG, key, &wallet),
                ReservationOutcome::Rejected {
                    reason: RejectionReason::WalletNotConnected
                }
            );
        }
    }

    #[test]
    fn connected_wallet_accepts_every_configured_ring() {
        let wallet = connected("abc123");
        for variant in RING_CATALOG.iter() {
            let outcome = attempt_reservation(&RING_CATALOG, variant.key, &wallet);
            assert_eq!(outcome, ReservationOutcome::Accepted { variant });
            assert_eq!(outcome.accepted_key(), Some(variant.key));
        }
    }

    #[test]
    fn unknown_ring_is_rejected_as_invalid_variant() {
        let outcome = attempt_reservation(&RING_CATALOG, "50M", &connected("abc123"));
        assert_eq!(
            outcome.rejection(),
            Some(&RejectionReason::InvalidVariant("50M".to_string()))
        );
        assert!(!outcome.needs_wallet());
    }

    #[test]
    fn decision_is_deterministic_and_leaves_inputs_alone() {
        let wallet = connected("abc123");
        let before = wallet.clone();
        let first = attempt_reservation(&RING_CATALOG, "100M", &wallet);
        let second = attempt_reservation(&RING_CATALOG, "100M", &wallet);
        assert_eq!(first, second);
        assert_eq!(wallet, before);
        assert_eq!(RING_CATALOG.keys(), vec!["10M", "100M"]);
    }

    #[test]
    fn presale_walkthrough() {
        let mut selection = SelectionState::new(RING_CATALOG);
        assert_eq!(selection.current_key(), "10M");
        selection.select("100M").unwrap();
        assert_eq!(selection.current_key(), "100M");

        let rejected = attempt_reservation(&RING_CATALOG, "100M", &WalletStatus::disconnected());
        assert!(rejected.needs_wallet());

        let accepted = attempt_reservation(&RING_CATALOG, "100M", &connected("abc123"));
        assert_eq!(accepted.accepted_key(), Some("100M"));
    }

    #[test]
    fn notifications_use_page_wording() {
        let accepted = attempt_reservation(&RING_CATALOG, "10M", &connected("abc123"));
        assert_eq!(
            accepted.notification(),
            Notification::success("Successfully registered for the 10M Sats ring pre-sale!")
        );

        let rejected = attempt_reservation(&RING_CATALOG, "10M", &WalletStatus::disconnected());
        let note = rejected.notification();
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(
            note.message,
            "Please connect your wallet to participate in the pre-sale"
        );
    }

    /// Source whose answer can change between reads.
    struct FlakyWallet(RefCell<Vec<WalletStatus>>);

    impl WalletStatusSource for FlakyWallet {
        fn status(&self) -> WalletStatus {
            self.0.borrow_mut().remove(0)
        }
    }

    #[test]
    fn submit_rereads_wallet_every_time() {
        let wallet = FlakyWallet(RefCell::new(vec![
            connected("abc123"),
            WalletStatus::disconnected(),
        ]));
        let selection = SelectionState::new(RING_CATALOG);
        let mut toasts: Vec<Notification> = Vec::new();

        assert!(submit(&selection, &wallet, &mut toasts).is_accepted());
        assert!(submit(&selection, &wallet, &mut toasts).needs_wallet());

        let levels: Vec<NotificationLevel> = toasts.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Error]);
    }

    #[test]
    fn repeated_submissions_are_not_deduplicated() {
        let wallet = connected("abc123");
        let mut selection = SelectionState::new(RING_CATALOG);
        selection.select("100M").unwrap();
        let mut toasts: Vec<Notification> = Vec::new();

        for _ in 0..3 {
            assert_eq!(submit(&selection, &wallet, &mut toasts).accepted_key(), Some("100M"));
        }
        assert_eq!(toasts.len(), 3);
    }
}
