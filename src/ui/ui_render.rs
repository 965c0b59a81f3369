use eframe::egui::{
    Align, CentralPanel, Context, Frame, Id, Layout, Margin, RichText, ScrollArea, TopBottomPanel,
    Ui,
};
use strum::IntoEnumIterator;

use crate::config::{BRAND, PAGE};
use crate::domain::PageSection;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::visible_fraction;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_VISIBILITY_EVENTS;

use super::app::MillySatApp;

impl MillySatApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        let scrolled = self.engine.header.is_scrolled();
        let header_frame = if scrolled {
            Frame::new()
                .fill(UI_CONFIG.colors.header_scrolled)
                .inner_margin(Margin::symmetric(24, 12))
        } else {
            Frame::new()
                .fill(UI_CONFIG.colors.page_background)
                .inner_margin(Margin::symmetric(24, 16))
        };

        TopBottomPanel::top("header")
            .frame(header_frame)
            .show_separator_line(scrolled)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = RichText::new(BRAND)
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading);
                    if ui.link(brand).clicked() {
                        self.scroll_to(PageSection::Hero);
                    }
                    ui.add_space(32.0);

                    for section in PageSection::iter() {
                        if let Some(label) = section.nav_label() {
                            if ui.link(RichText::new(label).color(UI_CONFIG.colors.label)).clicked() {
                                self.scroll_to(section);
                            }
                            ui.add_space(12.0);
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.wallet_button(ui);
                    });
                });
            });
    }

    /// Connect / disconnect toggle, labelled with the short account when connected.
    pub(super) fn wallet_button(&mut self, ui: &mut Ui) {
        let status = self.engine.wallet_status();
        let response = match status.short_label() {
            Some(label) => ui
                .button(RichText::new(label).strong().color(UI_CONFIG.colors.accent))
                .on_hover_text(UI_TEXT.wallet_disconnect_hint),
            None => ui.add(crate::ui::utils::accent_button(UI_TEXT.wallet_select)),
        };
        if response.clicked() {
            self.toggle_wallet();
        }
    }

    pub(super) fn render_page(&mut self, ctx: &Context) {
        let page_frame = Frame::new().fill(UI_CONFIG.colors.page_background);
        CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            let output = ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let viewport = ui.clip_rect();
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.content_max_width);
                        for section in PageSection::iter() {
                            self.render_tracked_section(ui, section, viewport);
                            ui.add_space(UI_CONFIG.section_spacing);
                        }
                    });
                });

            if self.engine.on_scroll(output.state.offset.y) {
                ctx.request_repaint();
            }
        });
    }

    /// Renders one section with its reveal fade and reports how much of it is on screen.
    fn render_tracked_section(&mut self, ui: &mut Ui, section: PageSection, viewport: eframe::egui::Rect) {
        let revealed = self.engine.is_section_revealed(section);
        let opacity = ui.ctx().animate_bool_with_time(
            Id::new(("reveal", section.anchor())),
            revealed,
            PAGE.reveal.fade_secs,
        );

        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                match section {
                    PageSection::Hero => self.render_hero(ui),
                    PageSection::Products => self.render_showcase(ui),
                    PageSection::Security => self.render_security(ui),
                    PageSection::PreSale => self.render_presale(ui),
                    PageSection::Footer => self.render_footer(ui),
                }
            })
            .response;

        if self.pending_scroll == Some(section) {
            response.scroll_to_me(Some(Align::TOP));
            self.pending_scroll = None;
        }

        let fraction = visible_fraction(response.rect, viewport);
        if self.engine.report_section_visibility(section, fraction) {
            #[cfg(debug_assertions)]
            if PRINT_VISIBILITY_EVENTS {
                log::info!("[reveal] #{} fading in", section.anchor());
            }
            ui.ctx().request_repaint();
        }
    }
}
