// User interface components
pub mod app;
pub mod config;
pub mod sections;
pub mod styles;
pub mod toasts;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::{AppOptions, MillySatApp};
pub use config::UI_CONFIG;
