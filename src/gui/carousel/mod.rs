pub mod state;

#[cfg(test)]
mod state_tests;

use std::time::Instant;

use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Rect,
    Sense,
    Stroke,
};
use state::{
    CarouselState,
    Command,
    ResizeDebounce,
    CARD_GAP,
};

use crate::{
    core::Product,
    gui::{
        reveal::Reveal,
        theme::{
            blend_colors,
            Theme,
        },
    },
};

const CARD_HEIGHT: f32 = 230.0;
const DOT_DIAMETER: f32 = 10.0;
const DOT_SPACING: f32 = 8.0;

/// The best-sellers carousel: a clipped track of product cards with
/// prev/next controls, pagination dots, pointer dragging and arrow-key
/// navigation. All index bookkeeping lives in [`CarouselState`]; this type
/// only feeds it commands and paints what it reads back.
pub struct BestSellersCarousel {
    state: CarouselState,
    debounce: ResizeDebounce,
    last_width: f32,
    reveal: Reveal,
}

impl BestSellersCarousel {
    pub fn new(card_count: usize) -> Self {
        Self {
            state: CarouselState::new(card_count, 0.0),
            debounce: ResizeDebounce::default(),
            last_width: 0.0,
            reveal: Reveal::default(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, cards: &[Product]) {
        let ctx = ui.ctx().clone();
        let avail = ui.available_width();

        self.watch_width(&ctx, avail);

        self.reveal.observe(ui);
        let now = ui.input(|i| i.time);

        // Header row with the prev/next controls on the right.
        ui.horizontal(|ui| {
            ui.heading(theme.heading(&ctx, "Best Sellers"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next =
                    ui.add_enabled(self.state.can_next(), egui::Button::new("›").min_size(egui::vec2(32.0, 32.0)));
                let prev =
                    ui.add_enabled(self.state.can_prev(), egui::Button::new("‹").min_size(egui::vec2(32.0, 32.0)));
                if next.clicked() {
                    self.state.apply(Command::Next);
                }
                if prev.clicked() {
                    self.state.apply(Command::Prev);
                }
            });
        });
        ui.add_space(8.0);

        let (track_rect, response) =
            ui.allocate_exact_size(egui::vec2(avail, CARD_HEIGHT), Sense::click_and_drag());

        self.handle_drag(ui, &response);

        let x_offset = self.track_translate(ui, track_rect);
        self.paint_track(ui, theme, track_rect, x_offset, cards, now);

        ui.add_space(10.0);
        self.show_dots(ui, theme, avail);

        self.handle_keys(&ctx, track_rect);

        if self.state.is_dragging() || !self.reveal.is_settled(now, cards.len()) {
            ctx.request_repaint();
        }
    }

    /// Feeds width changes through the debounce so a live window resize
    /// triggers one recomputation per quiescent period, not one per frame.
    fn watch_width(&mut self, ctx: &egui::Context, avail: f32) {
        let now = Instant::now();

        if self.last_width <= 0.0 {
            // First layout: commit directly, nothing to coalesce yet.
            self.state.apply(Command::ResizeCommit(avail));
            self.last_width = avail;
        } else if (avail - self.last_width).abs() > 0.5 {
            self.debounce.observe(avail, now);
            self.last_width = avail;
        }

        if let Some(width) = self.debounce.poll(now) {
            self.state.apply(Command::ResizeCommit(width));
        }

        if let Some(deadline) = self.debounce.deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn handle_drag(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let pointer_x = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .map(|p| p.x);

        if response.drag_started() {
            if let Some(x) = pointer_x {
                self.state.apply(Command::DragStart(x));
            }
        } else if response.dragged() {
            if let Some(x) = pointer_x {
                self.state.apply(Command::DragMove(x));
            }
        }

        if response.drag_stopped() {
            self.state.apply(Command::DragEnd);
        }

        // Stuck-drag guard: a pointer that vanished (left the window,
        // released elsewhere) always ends the session.
        if self.state.is_dragging() && !ui.input(|i| i.pointer.any_down()) {
            self.state.apply(Command::DragEnd);
        }
    }

    /// Current horizontal translation of the track. Pinned to the pointer
    /// while dragging; otherwise a linear glide toward the committed slide.
    fn track_translate(&self, ui: &egui::Ui, track_rect: Rect) -> f32 {
        let anim_id = ui.id().with("track_translate");
        let translate = match self.state.drag_translate() {
            Some(translate) => ui.ctx().animate_value_with_time(anim_id, translate, 0.0),
            None => ui.ctx().animate_value_with_time(anim_id, -self.state.track_offset(), 0.35),
        };
        track_rect.left() + translate
    }

    fn paint_track(
        &self,
        ui: &egui::Ui,
        theme: &Theme,
        track_rect: Rect,
        x_offset: f32,
        cards: &[Product],
        now: f64,
    ) {
        let ctx = ui.ctx();
        let painter = ui.painter().with_clip_rect(track_rect);
        let card_width = self.state.card_width();

        for (index, card) in cards.iter().enumerate() {
            let x = x_offset + index as f32 * (card_width + CARD_GAP);
            let rect = Rect::from_min_size(
                egui::pos2(x, track_rect.top()),
                egui::vec2(card_width, CARD_HEIGHT),
            );
            if !rect.intersects(track_rect) {
                continue;
            }

            let alpha = self.reveal.alpha(now, index);
            let accent = Color32::from_rgb(card.accent[0], card.accent[1], card.accent[2]);

            painter.rect_filled(rect, 10.0, theme.card_fill(ctx).gamma_multiply(alpha));

            // Accent art block standing in for the product photo.
            let art = Rect::from_min_size(
                rect.min + egui::vec2(14.0, 14.0),
                egui::vec2(rect.width() - 28.0, 92.0),
            );
            painter.rect_filled(art, 8.0, accent.gamma_multiply(0.25 * alpha));
            painter.text(
                art.center(),
                Align2::CENTER_CENTER,
                card.name.split_whitespace().next().unwrap_or(""),
                FontId::proportional(22.0),
                accent.gamma_multiply(alpha),
            );

            painter.text(
                egui::pos2(rect.left() + 14.0, art.bottom() + 12.0),
                Align2::LEFT_TOP,
                card.name,
                FontId::proportional(16.0),
                theme.foreground(ctx).gamma_multiply(alpha),
            );
            painter.text(
                egui::pos2(rect.left() + 14.0, art.bottom() + 34.0),
                Align2::LEFT_TOP,
                card.blurb,
                FontId::proportional(12.0),
                theme.comment(ctx).gamma_multiply(alpha),
            );

            let price_pos = egui::pos2(rect.left() + 14.0, rect.bottom() - 34.0);
            let price_rect = painter.text(
                price_pos,
                Align2::LEFT_TOP,
                card.price_label(),
                FontId::proportional(16.0),
                theme.accent(ctx).gamma_multiply(alpha),
            );
            if let Some(old) = card.old_price_label() {
                let old_rect = painter.text(
                    egui::pos2(price_rect.right() + 10.0, price_pos.y + 2.0),
                    Align2::LEFT_TOP,
                    old,
                    FontId::proportional(13.0),
                    theme.comment(ctx).gamma_multiply(alpha),
                );
                painter.line_segment(
                    [old_rect.left_center(), old_rect.right_center()],
                    Stroke::new(1.0, theme.comment(ctx).gamma_multiply(alpha)),
                );
            }

            painter.text(
                egui::pos2(rect.right() - 14.0, rect.top() + 10.0),
                Align2::RIGHT_TOP,
                format!("#{}", index + 1),
                FontId::proportional(12.0),
                theme.comment(ctx).gamma_multiply(alpha),
            );
        }
    }

    /// One dot per reachable slide index; the active one matches the
    /// committed slide, clicking jumps straight to that index.
    fn show_dots(&mut self, ui: &mut egui::Ui, theme: &Theme, avail: f32) {
        let ctx = ui.ctx().clone();
        let dot_count = self.state.dot_count();
        let total_width =
            dot_count as f32 * DOT_DIAMETER + (dot_count.saturating_sub(1)) as f32 * DOT_SPACING;

        let (row_rect, _) = ui.allocate_exact_size(egui::vec2(avail, 18.0), Sense::hover());
        let left = row_rect.center().x - total_width / 2.0;

        let inactive = blend_colors(theme.comment(&ctx), theme.panel_fill(&ctx), 0.4);

        for i in 0..dot_count {
            let center = egui::pos2(
                left + i as f32 * (DOT_DIAMETER + DOT_SPACING) + DOT_DIAMETER / 2.0,
                row_rect.center().y,
            );
            let dot_rect = Rect::from_center_size(center, egui::vec2(DOT_DIAMETER, DOT_DIAMETER));
            let response = ui
                .interact(dot_rect.expand(3.0), ui.id().with(("dot", i)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            let active = i == self.state.current_slide();
            let radius = if response.hovered() { DOT_DIAMETER / 2.0 + 1.0 } else { DOT_DIAMETER / 2.0 };
            let color = if active { theme.accent(&ctx) } else { inactive };
            ui.painter().circle_filled(center, radius, color);

            if response.clicked() {
                self.state.apply(Command::GoTo(i as isize));
            }
        }
    }

    /// Arrow keys step the carousel, but only while its track is on screen
    /// so an off-screen carousel never hijacks the keyboard.
    fn handle_keys(&mut self, ctx: &egui::Context, track_rect: Rect) {
        let screen = ctx.screen_rect();
        let visible = track_rect.top() < screen.bottom() && track_rect.bottom() > screen.top();
        if !visible {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.state.apply(Command::Prev);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.state.apply(Command::Next);
        }
    }
}
