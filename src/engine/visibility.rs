use std::collections::HashMap;

use crate::config::PAGE;
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_VISIBILITY_EVENTS;

/// Whether the host can tell us how much of a region is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverSupport {
    #[default]
    Available,
    /// No observation primitive. Every region counts as seen from the moment
    /// it is registered so content is never left permanently hidden.
    Unavailable,
}

/// Opaque ticket returned by `register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(u64);

#[derive(Debug, Clone)]
struct RegionState {
    handle: RegionHandle,
    threshold: f32,
    /// Sticky: flips to true once and stays there
    seen: bool,
}

impl RegionState {
    fn crosses(&self, visible_fraction: f32) -> bool {
        visible_fraction > 0.0 && visible_fraction >= self.threshold
    }
}

/// Tracks which page regions have been scrolled into view at least once.
///
/// The presentation layer owns the actual elements. It registers each region
/// under an id, then reports the element's visible fraction (0.0..=1.0) as the
/// viewport moves. Regions are independent of each other.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    support: ObserverSupport,
    regions: HashMap<String, RegionState>,
    ids_by_handle: HashMap<RegionHandle, String>,
    next_handle: u64,
}

impl VisibilityTracker {
    pub fn new(support: ObserverSupport) -> Self {
        Self {
            support,
            ..Default::default()
        }
    }

    pub fn observer_support(&self) -> ObserverSupport {
        self.support
    }

    /// Start tracking `region_id`.
    ///
    /// Re-registering an id that is still tracked keeps its seen flag and
    /// invalidates the previous handle.
    pub fn register(&mut self, region_id: impl Into<String>, threshold: f32) -> RegionHandle {
        let region_id = region_id.into();
        let threshold = sanitize_threshold(&region_id, threshold);

        let handle = RegionHandle(self.next_handle);
        self.next_handle += 1;

        let previously_seen = match self.regions.get(&region_id) {
            Some(existing) => {
                self.ids_by_handle.remove(&existing.handle);
                existing.seen
            }
            None => false,
        };
        let seen = previously_seen || self.support == ObserverSupport::Unavailable;

        self.regions.insert(
            region_id.clone(),
            RegionState {
                handle,
                threshold,
                seen,
            },
        );
        self.ids_by_handle.insert(handle, region_id);
        handle
    }

    /// Feed the element's current on-screen fraction.
    /// Returns true only on the report that first reveals the region.
    pub fn report_intersection(&mut self, handle: RegionHandle, visible_fraction: f32) -> bool {
        let Some(region_id) = self.ids_by_handle.get(&handle) else {
            return false;
        };
        let Some(region) = self.regions.get_mut(region_id) else {
            return false;
        };
        if region.seen || !region.crosses(visible_fraction) {
            return false;
        }

        region.seen = true;
        #[cfg(debug_assertions)]
        if PRINT_VISIBILITY_EVENTS {
            log::info!(
                "[reveal] {region_id} seen at {:.0}% visible",
                visible_fraction * 100.0
            );
        }
        true
    }

    /// Feed an already-evaluated "crossed the threshold" signal.
    pub fn report_crossing(&mut self, handle: RegionHandle, intersecting: bool) -> bool {
        self.report_intersection(handle, if intersecting { 1.0 } else { 0.0 })
    }

    /// Unknown ids read as not seen.
    pub fn is_seen(&self, region_id: &str) -> bool {
        self.regions
            .get(region_id)
            .map(|region| region.seen)
            .unwrap_or(false)
    }

    pub fn is_registered(&self, region_id: &str) -> bool {
        self.regions.contains_key(region_id)
    }

    pub fn handle_of(&self, region_id: &str) -> Option<RegionHandle> {
        self.regions.get(region_id).map(|region| region.handle)
    }

    /// Stop tracking and drop bookkeeping for the region behind `handle`.
    ///
    /// Returns the final seen flag so the caller can keep it, or `None` when
    /// the handle is stale or unknown (a no-op).
    pub fn unregister(&mut self, handle: RegionHandle) -> Option<bool> {
        let region_id = self.ids_by_handle.remove(&handle)?;
        self.regions.remove(&region_id).map(|region| region.seen)
    }

    pub fn seen_count(&self) -> usize {
        self.regions.values().filter(|region| region.seen).count()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn sanitize_threshold(region_id: &str, threshold: f32) -> f32 {
    if threshold.is_nan() {
        log::warn!(
            "Visibility threshold for {region_id} is NaN, using {}",
            PAGE.reveal.threshold
        );
        return PAGE.reveal.threshold;
    }
    if !(0.0..=1.0).contains(&threshold) {
        let clamped = threshold.clamp(0.0, 1.0);
        log::warn!("Visibility threshold {threshold} for {region_id} clamped to {clamped}");
        return clamped;
    }
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_starts_unseen_and_reveals_at_threshold() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let handle = tracker.register("products", 0.1);
        assert!(!tracker.is_seen("products"));

        assert!(!tracker.report_intersection(handle, 0.05));
        assert!(!tracker.is_seen("products"));

        assert!(tracker.report_intersection(handle, 0.1));
        assert!(tracker.is_seen("products"));
    }

    #[test]
    fn seen_flag_is_sticky() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let handle = tracker.register("presale", 0.1);

        assert!(tracker.report_crossing(handle, true));
        for _ in 0..3 {
            assert!(!tracker.report_crossing(handle, false));
            assert!(!tracker.report_intersection(handle, 0.0));
            assert!(tracker.is_seen("presale"));
        }
        // Only the first reveal is reported
        assert!(!tracker.report_intersection(handle, 1.0));
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let handle = tracker.register("security", 0.0);
        assert!(!tracker.report_intersection(handle, 0.0));
        assert!(tracker.report_intersection(handle, 0.01));
    }

    #[test]
    fn regions_are_independent() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let products = tracker.register("products", 0.1);
        let security = tracker.register("security", 0.1);
        tracker.register("presale", 0.1);

        tracker.report_intersection(security, 0.5);
        assert!(tracker.is_seen("security"));
        assert!(!tracker.is_seen("products"));
        assert!(!tracker.is_seen("presale"));

        tracker.report_intersection(products, 0.2);
        assert_eq!(tracker.seen_count(), 2);
    }

    #[test]
    fn missing_observer_fails_open() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Unavailable);
        let handle = tracker.register("products", 0.1);
        assert!(tracker.is_seen("products"));

        assert!(!tracker.report_intersection(handle, 0.0));
        assert!(tracker.is_seen("products"));
    }

    #[test]
    fn unregister_returns_final_state_and_drops_bookkeeping() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let unseen = tracker.register("security", 0.1);
        let seen = tracker.register("presale", 0.1);
        tracker.report_crossing(seen, true);

        assert_eq!(tracker.unregister(unseen), Some(false));
        assert_eq!(tracker.unregister(seen), Some(true));
        assert!(!tracker.is_registered("presale"));
        assert!(!tracker.is_seen("presale"));
        assert!(tracker.is_empty());

        // Second unregister is a quiet no-op
        assert_eq!(tracker.unregister(seen), None);
        assert!(!tracker.report_crossing(seen, true));
    }

    #[test]
    fn re_registering_keeps_seen_and_retires_old_handle() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let first = tracker.register("products", 0.1);
        tracker.report_crossing(first, true);

        let second = tracker.register("products", 0.5);
        assert_ne!(first, second);
        assert!(tracker.is_seen("products"));
        assert_eq!(tracker.handle_of("products"), Some(second));
        assert_eq!(tracker.unregister(first), None);
        assert!(tracker.is_registered("products"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn out_of_range_thresholds_are_clamped() {
        let mut tracker = VisibilityTracker::new(ObserverSupport::Available);
        let high = tracker.register("high", 3.0);
        assert!(!tracker.report_intersection(high, 0.99));
        assert!(tracker.report_intersection(high, 1.0));

        let low = tracker.register("low", -1.0);
        assert!(tracker.report_intersection(low, 0.001));

        let nan = tracker.register("nan", f32::NAN);
        assert!(!tracker.report_intersection(nan, 0.05));
        assert!(tracker.report_intersection(nan, PAGE.reveal.threshold));
    }
}
