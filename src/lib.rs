#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;

// Re-export commonly used types
pub use data::SimulatedWallet;
pub use domain::{PageSection, RingVariant, VariantCatalog, WalletStatus, WalletStatusSource};
pub use engine::{
    ObserverSupport, PageEngine, ReservationOutcome, SelectionState, VisibilityTracker,
};
pub use ui::{AppOptions, MillySatApp};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pretend the viewport observer is unavailable (every section starts revealed)
    #[arg(long, default_value_t = false)]
    pub no_observer: bool,

    /// Start with the simulated wallet connected under this account id
    #[arg(long, value_name = "ID")]
    pub account: Option<String>,
}

impl From<&Cli> for AppOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            observer: if cli.no_observer {
                ObserverSupport::Unavailable
            } else {
                ObserverSupport::Available
            },
            initial_account: cli.account.clone(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, options: AppOptions) -> Box<dyn eframe::App> {
    Box::new(MillySatApp::new(cc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_observed_and_disconnected() {
        let cli = Cli::parse_from(["millysat"]);
        let options = AppOptions::from(&cli);
        assert_eq!(options.observer, ObserverSupport::Available);
        assert_eq!(options.initial_account, None);
    }

    #[test]
    fn cli_flags_map_to_options() {
        let cli = Cli::parse_from(["millysat", "--no-observer", "--account", "abc123"]);
        let options = AppOptions::from(&cli);
        assert_eq!(options.observer, ObserverSupport::Unavailable);
        assert_eq!(options.initial_account.as_deref(), Some("abc123"));
    }
}
