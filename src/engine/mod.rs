pub mod core;
pub mod header;
pub mod notify;
pub mod reservation;
pub mod selection;
pub mod visibility;

// Re-export key components
pub use self::core::PageEngine;
pub use header::HeaderScrollState;
pub use notify::{Notification, NotificationLevel, Notifier};
pub use reservation::{RejectionReason, ReservationOutcome, attempt_reservation, submit};
pub use selection::{SelectionError, SelectionState};
pub use visibility::{ObserverSupport, RegionHandle, VisibilityTracker};
