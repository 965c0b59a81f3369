use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small gray text for hints and fine print.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Body copy in the standard label color.
    fn label_body(&mut self, text: impl Into<String>);

    /// Large section title.
    fn label_header(&mut self, text: impl Into<String>);

    /// Smaller bold heading inside a section.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Small uppercase brand-colored line above a section title.
    fn label_kicker(&mut self, text: impl Into<String>);

    /// Renders a "✔ text" status line (Green).
    fn label_success(&mut self, text: impl Into<String>);

    /// Renders a "⚠ text" status line (Amber).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_body(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.label));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).size(30.0).strong().color(UI_CONFIG.colors.heading));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).size(17.0).strong().color(UI_CONFIG.colors.heading));
    }

    fn label_kicker(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(RichText::new(text).small().strong().color(UI_CONFIG.colors.accent));
    }

    fn label_success(&mut self, text: impl Into<String>) {
        self.label(RichText::new(format!("✔ {}", text.into())).strong().color(UI_CONFIG.colors.success));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(format!("⚠ {}", text.into())).strong().color(UI_CONFIG.colors.warning));
    }
}

/// Text color for an accent-filled button.
pub fn on_accent() -> Color32 {
    Color32::WHITE
}
