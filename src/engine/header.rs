use crate::config::PAGE;

/// Solid vs transparent header, driven by the page scroll offset.
/// Unlike section reveals this flips back when the visitor scrolls up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScrollState {
    scrolled: bool,
    offset_threshold: f32,
}

impl HeaderScrollState {
    pub fn new(offset_threshold: f32) -> Self {
        Self {
            scrolled: false,
            offset_threshold,
        }
    }

    /// Returns true when the style changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let scrolled = offset > self.offset_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for HeaderScrollState {
    fn default() -> Self {
        Self::new(PAGE.header.scrolled_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_around_threshold() {
        let mut header = HeaderScrollState::new(20.0);
        assert!(!header.is_scrolled());

        assert!(!header.on_scroll(20.0));
        assert!(header.on_scroll(20.5));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(400.0));

        assert!(header.on_scroll(0.0));
        assert!(!header.is_scrolled());
    }
}
