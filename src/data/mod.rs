// External collaborators the page reads from
pub mod wallet_adapter;

// Re-export commonly used types
pub use wallet_adapter::SimulatedWallet;
