use eframe::egui;

/// A centered blocking dialog over a dimmed page.
pub struct Modal<T> {
    pub open: bool,
    pub title: String,
    pub data: T,
    pub config: ModalConfig,
}

#[derive(Clone)]
pub struct ModalConfig {
    pub fixed_size: Option<egui::Vec2>,
    pub show_overlay: bool,
    /// Whether clicking the dimmed backdrop counts as cancelling.
    pub close_on_outside_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { fixed_size: None, show_overlay: true, close_on_outside_click: true }
    }
}

#[derive(Debug, Clone)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T: Default> Modal<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self { open: false, title: title.into(), data: T::default(), config: ModalConfig::default() }
    }
}

impl<T> Modal<T> {
    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let mut result = None;
        let mut outside_click = false;

        if self.config.show_overlay {
            outside_click = self.show_overlay(ctx);
        }

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(size) = self.config.fixed_size {
            window = window.fixed_size(size);
        }

        window.show(ctx, |ui| {
            if let Some(modal_result) = content(ui, &mut self.data) {
                result = Some(modal_result);
            }
        });

        if result.is_none() && outside_click && self.config.close_on_outside_click {
            result = Some(ModalResult::Cancelled);
        }

        if result.is_some() {
            self.open = false;
        }

        result
    }

    fn show_overlay(&self, ctx: &egui::Context) -> bool {
        let area_response = egui::Area::new(egui::Id::new(("modal_overlay", &self.title)))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                let (_rect, response) =
                    ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(120));
                response.clicked()
            });

        area_response.inner
    }
}

pub fn action_buttons<T>(
    ui: &mut egui::Ui,
    data: &T,
    confirm_text: &str,
    cancel_text: &str,
) -> Option<ModalResult<T>>
where
    T: Clone,
{
    ui.horizontal(|ui| {
        if ui.button(confirm_text).clicked() {
            Some(ModalResult::Confirmed(data.clone()))
        } else if ui.button(cancel_text).clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}
