//! Page behaviour knobs: scroll reveal, header, notifications.

/// Scroll-reveal settings
pub struct RevealConfig {
    /// Fraction of a section that must be on screen before it is revealed
    pub threshold: f32,
    /// Seconds the fade-in takes once a section is revealed
    pub fade_secs: f32,
}

/// Header behaviour
pub struct HeaderConfig {
    /// Scroll offset (points) past which the header switches to its solid style
    pub scrolled_offset: f32,
}

/// Toast settings
pub struct ToastConfig {
    pub lifetime_secs: u64,
    /// Oldest toasts are dropped beyond this
    pub max_visible: usize,
}

/// The Master Page Configuration
pub struct PageConfig {
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
    pub toast: ToastConfig,
}

pub const PAGE: PageConfig = PageConfig {
    reveal: RevealConfig {
        threshold: 0.1,
        fade_secs: 0.6,
    },
    header: HeaderConfig {
        scrolled_offset: 20.0,
    },
    toast: ToastConfig {
        lifetime_secs: 4,
        max_visible: 3,
    },
};
