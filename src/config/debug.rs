//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! console stays quiet. All of them are further gated by `cfg(debug_assertions)`.

/// Emit UI interaction logs (tab switches, ring choice, nav clicks).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit a line whenever a page section is revealed for the first time.
pub const PRINT_VISIBILITY_EVENTS: bool = false;

/// Emit simulated wallet connect / disconnect events.
pub const PRINT_WALLET_EVENTS: bool = true;

/// Emit every reservation outcome.
pub const PRINT_RESERVATIONS: bool = true;
