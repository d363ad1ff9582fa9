use eframe::egui;

use crate::{
    core::catalog,
    gui::{
        age_gate::{
            AgeGate,
            AgeGateAction,
        },
        carousel::BestSellersCarousel,
        footer::Footer,
        product_tabs::ProductTabs,
        reviews::ReviewsSection,
        settings::SettingsData,
        theme::{
            set_theme,
            Theme,
        },
        top_bar::{
            Section,
            TopBar,
            TopBarAction,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

/// Scroll distance after which the top bar switches to its heavy backdrop.
const SCROLLED_THRESHOLD: f32 = 50.0;

pub struct VitrineApp {
    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    age_gate: AgeGate,
    tabs: ProductTabs,
    carousel: BestSellersCarousel,
    reviews: ReviewsSection,
    footer: Footer,
    pending_scroll: Option<Section>,
    scrolled: bool,
}

impl VitrineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::vitrine();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        let age_gate = AgeGate::new(settings_data.age_confirmed);

        Self {
            settings_data,
            theme,
            age_gate,
            tabs: ProductTabs::default(),
            carousel: BestSellersCarousel::new(catalog::BEST_SELLERS.len()),
            reviews: ReviewsSection::default(),
            footer: Footer::default(),
            pending_scroll: None,
            scrolled: false,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, text: &str) {
        let ctx = ui.ctx().clone();
        ui.add_space(28.0);
        let response = ui.heading(self.theme.heading(&ctx, text).size(24.0));
        if self.pending_scroll == Some(section) {
            response.scroll_to_me(Some(egui::Align::Min));
            self.pending_scroll = None;
        }
        ui.add_space(10.0);
    }

    /// Zero-height scroll target for sections that draw their own header.
    fn section_anchor(&mut self, ui: &mut egui::Ui, section: Section) {
        let (rect, _) = ui.allocate_exact_size(egui::Vec2::ZERO, egui::Sense::hover());
        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::Min));
            self.pending_scroll = None;
        }
    }

    fn show_hero(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Taste the cloud.").size(32.0).strong());
            ui.label(self.theme.muted(&ctx, "Disposables, liquids and pod systems, shipped across Poland."));
            ui.add_space(12.0);
            if ui.button(egui::RichText::new("Shop now").size(16.0)).clicked() {
                self.pending_scroll = Some(Section::Products);
            }
        });
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(AgeGateAction::Confirmed) = self.age_gate.show(ctx) {
            self.settings_data.age_confirmed = true;
            self.save_settings();
        }

        // The theme switch in the bar mutates the egui preference; mirror
        // it into the settings file when it changes.
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }

        if let Some(TopBarAction::ScrollTo(section)) = TopBar::show(ctx, &self.theme, self.scrolled)
        {
            self.pending_scroll = Some(section);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_hero(ui);

                self.section_heading(ui, Section::Products, "Our Products");
                self.tabs.show(ui, &self.theme);

                // The carousel draws its own header row (it carries the
                // prev/next controls), so it only needs an anchor.
                ui.add_space(28.0);
                self.section_anchor(ui, Section::BestSellers);
                self.carousel.show(ui, &self.theme, catalog::BEST_SELLERS);

                self.section_heading(ui, Section::Reviews, "Customer Reviews");
                self.reviews.show(ui, &self.theme);

                self.section_anchor(ui, Section::Contact);
                self.footer.show(ui, &self.theme);
            });

            self.scrolled = output.state.offset.y > SCROLLED_THRESHOLD;
        });
    }
}
