use chrono::Datelike;
use eframe::egui;

use crate::gui::theme::Theme;

/// Page footer: shop details with a collapsible contact block and the
/// copyright line.
pub struct Footer {
    city_open: bool,
}

impl Default for Footer {
    fn default() -> Self {
        Self { city_open: false }
    }
}

impl Footer {
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let ctx = ui.ctx().clone();

        ui.separator();
        ui.add_space(12.0);

        ui.label(theme.heading(&ctx, "VITRINE").size(18.0));
        ui.label(theme.muted(&ctx, "Premium vape shop since 2019"));
        ui.add_space(10.0);

        let arrow = if self.city_open { "▾" } else { "▸" };
        if ui
            .selectable_label(self.city_open, format!("{arrow} Warszawa — store & pickup"))
            .clicked()
        {
            self.city_open = !self.city_open;
        }

        if self.city_open {
            ui.indent("footer_contact", |ui| {
                ui.label("ul. Nowy Świat 21, 00-029 Warszawa");
                ui.label("tel. +48 22 123 45 67");
                ui.label("sklep@vitrine.pl");
                ui.label(theme.muted(&ctx, "Mon-Sat 10:00-20:00"));
            });
        }

        ui.add_space(14.0);
        let year = chrono::Local::now().year();
        ui.small(theme.muted(&ctx, &format!("© {year} Vitrine. Wszystkie prawa zastrzeżone.")));
        ui.add_space(18.0);
    }
}
