use eframe::egui::{Align, Frame, Layout, Margin, RichText, Sense, Stroke, Ui};

use crate::config::BRAND;
use crate::domain::{PageSection, RingVariant};
use crate::ui::config::{SECURITY_FEATURES, UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::accent_button;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

use super::app::MillySatApp;

impl MillySatApp {
    pub(super) fn render_hero(&mut self, ui: &mut Ui) {
        ui.add_space(60.0);
        ui.label_kicker(UI_TEXT.hero_kicker);
        ui.add_space(8.0);
        ui.label(
            RichText::new(UI_TEXT.hero_title)
                .size(40.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(12.0);
        ui.label_body(UI_TEXT.hero_body);
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            if ui.add(accent_button(UI_TEXT.hero_discover)).clicked() {
                self.scroll_to(PageSection::Products);
            }
            if ui.button(UI_TEXT.hero_join).clicked() {
                self.scroll_to(PageSection::PreSale);
            }
        });
    }

    pub(super) fn render_showcase(&mut self, ui: &mut Ui) {
        ui.label_header(UI_TEXT.showcase_heading);
        ui.add_space(8.0);
        ui.label_body(UI_TEXT.showcase_body);
        ui.add_space(20.0);

        let catalog = self.engine.showcase.catalog();
        let mut clicked_key = None;
        ui.horizontal(|ui| {
            for variant in catalog.iter() {
                let selected = self.engine.showcase.is_selected(variant.key);
                if ui.selectable_label(selected, variant.name).clicked() {
                    clicked_key = Some(variant.key);
                }
            }
        });
        if let Some(key) = clicked_key {
            if let Err(e) = self.engine.select_showcase(key) {
                log::error!("{e}");
            }
        }

        ui.add_space(16.0);
        let variant = self.engine.showcase.current();
        card_frame(false).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.label(
                    RichText::new(format!("{} SATS", variant.key))
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                ui.label_subheader(variant.showcase_title);
                ui.add_space(10.0);

                ui.label_subheader(UI_TEXT.showcase_secured_heading);
                ui.label_body(variant.description);
                ui.add_space(8.0);

                ui.label_subheader(UI_TEXT.showcase_multisig_heading);
                ui.label_body(UI_TEXT.showcase_multisig_body);
                ui.add_space(8.0);

                ui.label_subheader(UI_TEXT.showcase_limited_heading);
                ui.label_subdued(format!(
                    "Only {} pieces will ever be crafted. Reserve yours in our exclusive pre-sale.",
                    variant.production_limit
                ));
                ui.add_space(8.0);
                if ui.add(accent_button(UI_TEXT.showcase_reserve)).clicked() {
                    self.scroll_to(PageSection::PreSale);
                }
            });
        });
    }

    pub(super) fn render_security(&mut self, ui: &mut Ui) {
        ui.label_kicker(UI_TEXT.security_kicker);
        ui.label_header(UI_TEXT.security_heading);
        ui.add_space(8.0);
        ui.label_body(UI_TEXT.security_body);
        ui.add_space(20.0);

        ui.columns(2, |columns| {
            for (i, (title, description)) in SECURITY_FEATURES.iter().enumerate() {
                let column = &mut columns[i % 2];
                card_frame(false).show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label_subheader(*title);
                    ui.label_body(*description);
                });
                column.add_space(12.0);
            }
        });

        ui.add_space(12.0);
        ui.label_subheader(UI_TEXT.security_promise_heading);
        ui.label_body(UI_TEXT.security_promise_body);
    }

    pub(super) fn render_presale(&mut self, ui: &mut Ui) {
        ui.label_kicker(UI_TEXT.presale_kicker);
        ui.label_header(UI_TEXT.presale_heading);
        ui.add_space(20.0);

        card_frame(false).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label_subheader(UI_TEXT.presale_select_label);
            ui.add_space(6.0);
            self.render_ring_cards(ui);
            ui.add_space(16.0);

            ui.label_subheader(UI_TEXT.presale_wallet_label);
            ui.add_space(6.0);
            self.render_wallet_panel(ui);
            ui.add_space(16.0);

            ui.separator();
            ui.horizontal(|ui| {
                ui.label_subdued(UI_TEXT.presale_terms);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // Visual guard only; the engine re-checks the wallet on submit
                    let enabled = self.engine.can_submit();
                    if ui.add_enabled(enabled, accent_button(UI_TEXT.presale_submit)).clicked() {
                        self.submit_reservation();
                    }
                });
            });
        });

        ui.add_space(24.0);
        ui.label_subheader(UI_TEXT.presale_timeline_heading);
        ui.label_body(UI_TEXT.presale_timeline_body);
    }

    fn render_ring_cards(&mut self, ui: &mut Ui) {
        let catalog = self.engine.presale.catalog();
        let mut clicked_key = None;

        ui.columns(catalog.len(), |columns| {
            for (column, variant) in columns.iter_mut().zip(catalog.iter()) {
                let selected = self.engine.presale.is_selected(variant.key);
                if ring_card(column, variant, selected) {
                    clicked_key = Some(variant.key);
                }
            }
        });

        if let Some(key) = clicked_key {
            if let Err(e) = self.engine.select_presale_ring(key) {
                log::error!("{e}");
            }
        }
    }

    fn render_wallet_panel(&mut self, ui: &mut Ui) {
        let status = self.engine.wallet_status();
        let highlight = self.highlight_connect && !status.is_connected();

        let stroke_color = if highlight {
            UI_CONFIG.colors.warning
        } else {
            UI_CONFIG.colors.subdued
        };
        Frame::new()
            .fill(UI_CONFIG.colors.card)
            .stroke(Stroke::new(1.0, stroke_color))
            .corner_radius(8)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                match status.account_id() {
                    Some(account) => {
                        ui.label_success(UI_TEXT.presale_connected);
                        ui.label_subdued(account);
                    }
                    None => {
                        ui.label_warning(UI_TEXT.presale_not_connected);
                        ui.label_subdued(UI_TEXT.presale_connect_hint);
                        ui.add_space(6.0);
                        self.wallet_button(ui);
                    }
                }
            });
    }

    pub(super) fn render_footer(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.add_space(16.0);
        ui.label_subheader(BRAND);
        ui.label_subdued(UI_TEXT.footer_blurb);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for section in [PageSection::Products, PageSection::Security, PageSection::PreSale] {
                if let Some(label) = section.nav_label() {
                    if ui.link(label).clicked() {
                        #[cfg(debug_assertions)]
                        if PRINT_UI_INTERACTIONS {
                            log::info!("[footer] {label}");
                        }
                        self.scroll_to(section);
                    }
                }
            }
        });
        ui.add_space(8.0);
        ui.label_subdued(UI_TEXT.footer_rights);
        ui.add_space(24.0);
    }
}

fn card_frame(selected: bool) -> Frame {
    let stroke = if selected {
        Stroke::new(2.0, UI_CONFIG.colors.accent)
    } else {
        Stroke::new(1.0, UI_CONFIG.colors.subdued.gamma_multiply(0.3))
    };
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .stroke(stroke)
        .corner_radius(10)
        .inner_margin(Margin::same(20))
}

/// One clickable pre-sale ring card. Returns true when clicked.
fn ring_card(ui: &mut Ui, variant: &RingVariant, selected: bool) -> bool {
    let response = card_frame(selected)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label_subheader(variant.name);
                if selected {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new("✔").color(UI_CONFIG.colors.accent));
                    });
                }
            });
            ui.label_body(variant.presale_blurb);
            ui.label_subdued(variant.limit_text());
        })
        .response
        .interact(Sense::click());
    response.clicked()
}
