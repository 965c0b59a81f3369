use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::config::{PAGE, RING_CATALOG};
use crate::domain::{PageSection, VariantCatalog, WalletStatus, WalletStatusSource};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

use super::header::HeaderScrollState;
use super::notify::Notifier;
use super::reservation::{self, ReservationOutcome};
use super::selection::{SelectionError, SelectionState};
use super::visibility::{ObserverSupport, RegionHandle, VisibilityTracker};

/// The page's interaction state in one place.
///
/// Passive: the presentation layer pushes intents in (clicks, scroll offsets,
/// per-section visible fractions) and reads state back out every frame.
pub struct PageEngine {
    /// Wallet adapter. Read fresh on every query, never cached.
    wallet: Arc<dyn WalletStatusSource>,

    /// Tab shown in the product showcase
    pub showcase: SelectionState,
    /// Ring chosen in the pre-sale form
    pub presale: SelectionState,

    pub visibility: VisibilityTracker,
    pub header: HeaderScrollState,

    region_handles: HashMap<PageSection, RegionHandle>,
}

impl PageEngine {
    pub fn new(wallet: Arc<dyn WalletStatusSource>, support: ObserverSupport) -> Self {
        Self::with_catalog(wallet, support, RING_CATALOG)
    }

    pub fn with_catalog(
        wallet: Arc<dyn WalletStatusSource>,
        support: ObserverSupport,
        catalog: VariantCatalog,
    ) -> Self {
        let mut visibility = VisibilityTracker::new(support);
        let region_handles = PageSection::iter()
            .filter(PageSection::is_scroll_revealed)
            .map(|section| {
                let handle = visibility.register(section.anchor(), PAGE.reveal.threshold);
                (section, handle)
            })
            .collect();

        if support == ObserverSupport::Unavailable {
            log::warn!("No viewport observer available: revealing every section up front");
        }

        Self {
            wallet,
            showcase: SelectionState::new(catalog),
            presale: SelectionState::new(catalog),
            visibility,
            header: HeaderScrollState::default(),
            region_handles,
        }
    }

    // --- WALLET ---

    pub fn wallet_status(&self) -> WalletStatus {
        self.wallet.status()
    }

    /// UX guard for the submit button. `submit_reservation` re-checks anyway.
    pub fn can_submit(&self) -> bool {
        self.wallet_status().is_connected()
    }

    // --- SELECTION ---

    pub fn select_showcase(&mut self, key: &str) -> Result<(), SelectionError> {
        self.showcase.select(key)?;
        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[showcase] tab -> {key}");
        }
        Ok(())
    }

    pub fn select_presale_ring(&mut self, key: &str) -> Result<(), SelectionError> {
        self.presale.select(key)?;
        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[presale] ring -> {key}");
        }
        Ok(())
    }

    // --- RESERVATION ---

    pub fn submit_reservation<N: Notifier + ?Sized>(&self, notifier: &mut N) -> ReservationOutcome {
        reservation::submit(&self.presale, self.wallet.as_ref(), notifier)
    }

    // --- SCROLL ---

    /// Returns true if the section was revealed by this report.
    pub fn report_section_visibility(&mut self, section: PageSection, visible_fraction: f32) -> bool {
        match self.region_handles.get(&section) {
            Some(handle) => self.visibility.report_intersection(*handle, visible_fraction),
            None => false,
        }
    }

    /// Sections that never animate in are always revealed.
    pub fn is_section_revealed(&self, section: PageSection) -> bool {
        !section.is_scroll_revealed() || self.visibility.is_seen(section.anchor())
    }

    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.header.on_scroll(offset)
    }

    /// Tear down region tracking, handing back what had been seen.
    pub fn leave_page(&mut self) -> HashMap<PageSection, bool> {
        self.region_handles
            .drain()
            .filter_map(|(section, handle)| {
                self.visibility
                    .unregister(handle)
                    .map(|seen| (section, seen))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SimulatedWallet;
    use crate::engine::notify::Notification;

    fn engine_with(wallet: &Arc<SimulatedWallet>, support: ObserverSupport) -> PageEngine {
        let source: Arc<dyn WalletStatusSource> = wallet.clone();
        PageEngine::new(source, support)
    }

    #[test]
    fn registers_only_revealed_sections() {
        let engine = engine_with(&Arc::new(SimulatedWallet::new()), ObserverSupport::Available);
        assert_eq!(engine.visibility.len(), 3);
        assert!(engine.is_section_revealed(PageSection::Hero));
        assert!(engine.is_section_revealed(PageSection::Footer));
        assert!(!engine.is_section_revealed(PageSection::Products));
    }

    #[test]
    fn hero_reports_are_ignored() {
        let mut engine = engine_with(&Arc::new(SimulatedWallet::new()), ObserverSupport::Available);
        assert!(!engine.report_section_visibility(PageSection::Hero, 1.0));
        assert!(engine.report_section_visibility(PageSection::PreSale, 0.3));
        assert!(engine.is_section_revealed(PageSection::PreSale));
    }

    #[test]
    fn fail_open_reveals_everything() {
        let engine = engine_with(&Arc::new(SimulatedWallet::new()), ObserverSupport::Unavailable);
        assert!(PageSection::iter().all(|section| engine.is_section_revealed(section)));
    }

    #[test]
    fn showcase_and_presale_selections_are_independent() {
        let mut engine = engine_with(&Arc::new(SimulatedWallet::new()), ObserverSupport::Available);
        engine.select_showcase("100M").unwrap();
        assert_eq!(engine.showcase.current_key(), "100M");
        assert_eq!(engine.presale.current_key(), "10M");
        assert!(engine.select_presale_ring("50M").is_err());
        assert_eq!(engine.presale.current_key(), "10M");
    }

    #[test]
    fn submit_follows_live_wallet() {
        let wallet = Arc::new(SimulatedWallet::new());
        let mut engine = engine_with(&wallet, ObserverSupport::Available);
        let mut toasts: Vec<Notification> = Vec::new();

        engine.select_presale_ring("100M").unwrap();
        assert!(!engine.can_submit());
        assert!(engine.submit_reservation(&mut toasts).needs_wallet());

        wallet.connect_with("abc123").unwrap();
        assert!(engine.can_submit());
        assert_eq!(engine.submit_reservation(&mut toasts).accepted_key(), Some("100M"));

        wallet.disconnect();
        assert!(engine.submit_reservation(&mut toasts).needs_wallet());
        assert_eq!(toasts.len(), 3);
    }

    #[test]
    fn leave_page_hands_back_seen_flags() {
        let mut engine = engine_with(&Arc::new(SimulatedWallet::new()), ObserverSupport::Available);
        engine.report_section_visibility(PageSection::Products, 1.0);

        let seen = engine.leave_page();
        assert_eq!(seen.get(&PageSection::Products), Some(&true));
        assert_eq!(seen.get(&PageSection::Security), Some(&false));
        assert!(engine.visibility.is_empty());
    }
}
