use eframe::egui::{Button, Context, Rect, RichText, Visuals};

use crate::ui::config::UI_CONFIG;
use crate::ui::styles::on_accent;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = UI_CONFIG.colors.page_background;
    visuals.window_fill = UI_CONFIG.colors.page_background;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent;
    visuals.hyperlink_color = UI_CONFIG.colors.accent;

    visuals.widgets.hovered.bg_stroke.color = UI_CONFIG.colors.accent;
    visuals.widgets.active.bg_stroke.color = UI_CONFIG.colors.accent;

    ctx.set_visuals(visuals);
}

/// Share of `element` that lies inside `viewport`, 0.0..=1.0.
pub fn visible_fraction(element: Rect, viewport: Rect) -> f32 {
    let area = element.area();
    if !element.is_positive() || area <= 0.0 {
        return 0.0;
    }
    let overlap = element.intersect(viewport);
    if !overlap.is_positive() {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Filled brand-colored button.
pub fn accent_button(text: &str) -> Button<'static> {
    Button::new(RichText::new(text.to_string()).strong().color(on_accent()))
        .fill(UI_CONFIG.colors.accent)
        .min_size([180.0, 36.0].into())
}
