use eframe::{Frame, egui};
use std::sync::Arc;

use crate::data::SimulatedWallet;
use crate::domain::{PageSection, WalletStatusSource};
use crate::engine::{ObserverSupport, PageEngine, ReservationOutcome};
use crate::engine::Notification;
use crate::engine::Notifier;
use crate::ui::toasts::ToastQueue;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// Startup options handed over from the command line (or the WASM shell).
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub observer: ObserverSupport,
    /// Connect the simulated wallet under this account before the first frame
    pub initial_account: Option<String>,
}

/// The pre-sale page: header, scrolling sections, toasts.
pub struct MillySatApp {
    pub(super) engine: PageEngine,
    /// Same wallet the engine reads from; the UI drives connect / disconnect
    pub(super) wallet: Arc<SimulatedWallet>,
    pub(super) toasts: ToastQueue,

    /// Section to bring into view on the next frame (nav clicks)
    pub(super) pending_scroll: Option<PageSection>,
    /// Pulse the connect prompt after a rejection for a missing wallet
    pub(super) highlight_connect: bool,
    pub(super) last_outcome: Option<ReservationOutcome>,
}

impl MillySatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        Self::from_options(options)
    }

    /// Builds the app without a rendering context.
    pub fn from_options(options: AppOptions) -> Self {
        let wallet = Arc::new(SimulatedWallet::new());
        let mut toasts = ToastQueue::default();

        if let Some(account) = options.initial_account.as_deref() {
            if let Err(e) = wallet.connect_with(account) {
                log::error!("Ignoring --account: {e}");
                toasts.notify(Notification::error(e.to_string()));
            }
        }

        let source: Arc<dyn WalletStatusSource> = wallet.clone();
        let engine = PageEngine::new(source, options.observer);

        Self {
            engine,
            wallet,
            toasts,
            pending_scroll: None,
            highlight_connect: false,
            last_outcome: None,
        }
    }

    pub(super) fn scroll_to(&mut self, section: PageSection) {
        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[nav] scroll to #{}", section.anchor());
        }
        self.pending_scroll = Some(section);
    }

    pub(super) fn toggle_wallet(&mut self) {
        if self.wallet.is_connected() {
            self.wallet.disconnect();
            return;
        }
        match self.wallet.connect() {
            Ok(_) => self.highlight_connect = false,
            Err(e) => {
                log::error!("Wallet connection failed: {e:#}");
                self.toasts
                    .notify(Notification::error(format!("Wallet connection failed: {e}")));
            }
        }
    }

    pub(super) fn submit_reservation(&mut self) {
        let outcome = self.engine.submit_reservation(&mut self.toasts);
        self.highlight_connect = outcome.needs_wallet();
        self.last_outcome = Some(outcome);
    }

    fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        // Ctrl+Enter submits even while the button is disabled; the engine
        // still refuses without a wallet
        let submit = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if submit {
            self.submit_reservation();
        }
    }
}

impl eframe::App for MillySatApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let seen = self.engine.leave_page();
        log::info!(
            "Leaving page ({} of {} sections revealed)",
            seen.values().filter(|&&revealed| revealed).count(),
            seen.len()
        );
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_header(ctx);
        self.render_page(ctx);
        self.toasts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_account_connects_wallet() {
        let app = MillySatApp::from_options(AppOptions {
            observer: ObserverSupport::Available,
            initial_account: Some("abc123".to_string()),
        });
        assert!(app.engine.can_submit());
        assert_eq!(app.engine.wallet_status().account_id(), Some("abc123"));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn blank_initial_account_is_reported() {
        let app = MillySatApp::from_options(AppOptions {
            observer: ObserverSupport::Available,
            initial_account: Some(" ".to_string()),
        });
        assert!(!app.engine.can_submit());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn rejected_submit_highlights_connect_prompt() {
        let mut app = MillySatApp::from_options(AppOptions::default());
        app.submit_reservation();
        assert!(app.highlight_connect);
        assert!(app.last_outcome.as_ref().is_some_and(ReservationOutcome::needs_wallet));

        app.toggle_wallet();
        assert!(!app.highlight_connect);
        app.submit_reservation();
        assert_eq!(
            app.last_outcome.as_ref().and_then(ReservationOutcome::accepted_key),
            Some("10M")
        );

        app.toggle_wallet();
        assert!(!app.engine.can_submit());
    }
}
