use eframe::egui;

/// One-shot staggered fade-in, triggered the first time a section scrolls
/// into view. The egui analog of the page's intersection observers.
#[derive(Debug, Default)]
pub struct Reveal {
    started: Option<f64>,
}

impl Reveal {
    /// Arms the reveal once the upcoming content is inside the clip rect.
    pub fn observe(&mut self, ui: &egui::Ui) {
        if self.started.is_some() {
            return;
        }
        let probe = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(1.0, 1.0));
        if ui.clip_rect().intersects(probe) {
            self.started = Some(ui.input(|i| i.time));
        }
    }

    /// Opacity for item `index` at time `now`. Zero until armed.
    pub fn alpha(&self, now: f64, index: usize) -> f32 {
        match self.started {
            Some(start) => stagger_alpha((now - start) as f32, index, 0.1, 0.35),
            None => 0.0,
        }
    }

    /// True once every item up to `count` is fully opaque.
    pub fn is_settled(&self, now: f64, count: usize) -> bool {
        count == 0 || self.alpha(now, count - 1) >= 1.0
    }
}

/// Linear fade for the `index`-th item, each delayed by `step` seconds.
pub fn stagger_alpha(elapsed: f32, index: usize, step: f32, fade: f32) -> f32 {
    let local = elapsed - index as f32 * step;
    (local / fade).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_hidden_before_their_delay() {
        assert_eq!(stagger_alpha(0.0, 3, 0.1, 0.35), 0.0);
        assert_eq!(stagger_alpha(0.25, 3, 0.1, 0.35), 0.0);
    }

    #[test]
    fn items_settle_fully_opaque() {
        assert_eq!(stagger_alpha(10.0, 3, 0.1, 0.35), 1.0);
    }

    #[test]
    fn earlier_items_lead_later_ones() {
        let t = 0.3;
        let a0 = stagger_alpha(t, 0, 0.1, 0.35);
        let a1 = stagger_alpha(t, 1, 0.1, 0.35);
        let a2 = stagger_alpha(t, 2, 0.1, 0.35);
        assert!(a0 >= a1 && a1 >= a2);
        assert!(a0 > a2);
    }

    #[test]
    fn unarmed_reveal_is_invisible() {
        let reveal = Reveal::default();
        assert_eq!(reveal.alpha(100.0, 0), 0.0);
        assert!(!reveal.is_settled(100.0, 1));
        assert!(reveal.is_settled(100.0, 0));
    }
}
