use eframe::egui::{Align2, Area, Context, Frame, Id, Margin, RichText, Stroke};
use std::collections::VecDeque;
use std::time::Duration;
use web_time::Instant;

use crate::config::PAGE;
use crate::engine::{Notification, NotificationLevel, Notifier};
use crate::ui::config::UI_CONFIG;

struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Short-lived notifications stacked in the bottom-right corner.
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(lifetime: Duration, max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
            max_visible: max_visible.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|toast| &toast.notification)
    }

    /// Drop toasts older than the lifetime, as seen from `now`.
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
    }

    pub fn show(&mut self, ctx: &Context) {
        self.expire(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let color = match toast.notification.level {
                        NotificationLevel::Success => UI_CONFIG.colors.success,
                        NotificationLevel::Error => UI_CONFIG.colors.error,
                    };
                    Frame::popup(ui.style())
                        .stroke(Stroke::new(1.5, color))
                        .inner_margin(Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(RichText::new(&toast.notification.message).color(color));
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting so expired toasts disappear without input
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn push_at(&mut self, notification: Notification, shown_at: Instant) {
        self.toasts.push_back(Toast {
            notification,
            shown_at,
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(PAGE.toast.lifetime_secs),
            PAGE.toast.max_visible,
        )
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => log::info!("{}", notification.message),
            NotificationLevel::Error => log::warn!("{}", notification.message),
        }
        self.push_at(notification, Instant::now());
    }
}
