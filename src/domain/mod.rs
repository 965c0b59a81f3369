// Domain types and value objects
pub mod section;
pub mod variant;
pub mod wallet;

// Re-export commonly used types
pub use section::PageSection;
pub use variant::{RingVariant, VariantCatalog};
pub use wallet::{AccountId, WalletStatus, WalletStatusError, WalletStatusSource};
