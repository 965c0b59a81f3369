//! Configuration module for the MillySat page.

pub mod debug;
pub mod page;
pub mod products;

// Re-export commonly used items
pub use page::PAGE;
pub use products::RING_CATALOG;

/// Native window title
pub const APP_TITLE: &str = "MillySat - Bitcoin-secured rings";

/// Brand name shown in the header
pub const BRAND: &str = "MillySat";
