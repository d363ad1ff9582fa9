use eframe::egui;

use crate::gui::modal::{
    action_buttons,
    Modal,
    ModalConfig,
    ModalResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGateAction {
    Confirmed,
}

/// Blocks the page until the visitor confirms they are of age. The
/// confirmation is persisted by the caller, so the gate appears once per
/// installation; refusing shows the denial notice and closes the app.
pub struct AgeGate {
    modal: Modal<()>,
    refused: bool,
}

impl AgeGate {
    pub fn new(already_confirmed: bool) -> Self {
        let mut modal = Modal::new("Age Verification").with_config(ModalConfig {
            fixed_size: Some(egui::vec2(320.0, 140.0)),
            show_overlay: true,
            close_on_outside_click: false,
        });
        if !already_confirmed {
            modal.open();
        }

        Self { modal, refused: false }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<AgeGateAction> {
        if self.refused {
            self.show_refusal(ctx);
            return None;
        }

        let result = self.modal.show(ctx, |ui, _data| {
            ui.label("This store sells products intended for adult smokers.");
            ui.add_space(4.0);
            ui.strong("Are you 18 or older?");
            ui.add_space(12.0);
            action_buttons(ui, &(), "Yes, I am 18+", "No")
        })?;

        match result {
            ModalResult::Confirmed(()) => Some(AgeGateAction::Confirmed),
            ModalResult::Cancelled => {
                self.refused = true;
                None
            }
        }
    }

    fn show_refusal(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("age_refusal_overlay"))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_space(screen_rect.size());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(200));
            });

        egui::Window::new("Dostęp zabroniony")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Strona tylko dla osób 18+.");
                ui.add_space(12.0);
                if ui.button("Zamknij").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
    }
}
