use eframe::egui;

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    BestSellers,
    Reviews,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] =
        [Section::Products, Section::BestSellers, Section::Reviews, Section::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::BestSellers => "Best Sellers",
            Section::Reviews => "Reviews",
            Section::Contact => "Contact",
        }
    }
}

pub enum TopBarAction {
    ScrollTo(Section),
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, scrolled: bool) -> Option<TopBarAction> {
        let mut action = None;

        // Past the scroll threshold the bar gets a heavier backdrop so it
        // reads as floating over the page.
        let fill =
            if scrolled { theme.panel_fill_strong(ctx) } else { theme.panel_fill(ctx) };
        let frame = egui::Frame::new().fill(fill).inner_margin(egui::Margin::symmetric(16, 10));

        egui::TopBottomPanel::top("top_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(theme.heading(ctx, "VITRINE").size(20.0));
                ui.add_space(16.0);

                // Narrow windows collapse the nav behind a hamburger menu.
                // Escape and outside clicks close it, which egui gives us
                // for free with a menu button.
                let compact = ctx.screen_rect().width() < 720.0;
                if compact {
                    ui.menu_button("☰", |ui| {
                        for section in Section::ALL {
                            if ui.button(section.label()).clicked() {
                                action = Some(TopBarAction::ScrollTo(section));
                                ui.close();
                            }
                        }
                    });
                } else {
                    for section in Section::ALL {
                        if ui.selectable_label(false, section.label()).clicked() {
                            action = Some(TopBarAction::ScrollTo(section));
                        }
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.small(theme.muted(ctx, "18+"));
                });
            });
        });

        action
    }
}
