use eframe::egui;

use crate::{
    core::catalog,
    gui::{
        reveal::Reveal,
        theme::Theme,
    },
};

const GRID_GAP: f32 = 16.0;
const MIN_CELL_WIDTH: f32 = 280.0;

/// Customer review cards, fading in the first time they scroll into view.
#[derive(Default)]
pub struct ReviewsSection {
    reveal: Reveal,
}

impl ReviewsSection {
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let ctx = ui.ctx().clone();
        self.reveal.observe(ui);
        let now = ui.input(|i| i.time);

        let reviews = catalog::REVIEWS;
        let avail = ui.available_width();
        let columns =
            (((avail + GRID_GAP) / (MIN_CELL_WIDTH + GRID_GAP)).floor() as usize).clamp(1, 3);
        let cell_width = (avail - GRID_GAP * (columns - 1) as f32) / columns as f32;

        for (row, chunk) in reviews.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_GAP;
                for (col, review) in chunk.iter().enumerate() {
                    let alpha = self.reveal.alpha(now, row * columns + col);
                    ui.scope(|ui| {
                        ui.set_opacity(alpha);
                        egui::Frame::new()
                            .fill(theme.card_fill(&ctx))
                            .corner_radius(10.0)
                            .inner_margin(egui::Margin::same(12))
                            .show(ui, |ui| {
                                ui.set_width(cell_width - 24.0);
                                ui.label(theme.bold(&ctx, &review.stars()));
                                ui.add_space(4.0);
                                ui.label(format!("\u{201c}{}\u{201d}", review.text));
                                ui.add_space(6.0);
                                ui.label(theme.muted(&ctx, &format!("— {}", review.author)));
                            });
                    });
                }
            });
            ui.add_space(GRID_GAP);
        }

        if !self.reveal.is_settled(now, reviews.len()) {
            ctx.request_repaint();
        }
    }
}
