use std::collections::HashMap;

use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Sense,
};

use crate::{
    core::{
        catalog,
        Category,
        Product,
    },
    gui::{
        reveal::stagger_alpha,
        theme::Theme,
    },
};

const GRID_GAP: f32 = 16.0;
const MIN_CELL_WIDTH: f32 = 250.0;
/// How long an "Added!" button stays green before reverting.
const ADDED_FEEDBACK_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFilter {
    All,
    Only(Category),
}

impl TabFilter {
    pub const TABS: [TabFilter; 5] = [
        TabFilter::Only(Category::Arrivals),
        TabFilter::Only(Category::Disposables),
        TabFilter::Only(Category::Liquids),
        TabFilter::Only(Category::Pods),
        TabFilter::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TabFilter::All => "All Products",
            TabFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            TabFilter::All => true,
            TabFilter::Only(category) => product.in_category(*category),
        }
    }
}

/// Indices of the products the active tab shows, in catalog order.
pub fn filter_products(products: &[Product], filter: TabFilter) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| filter.matches(product))
        .map(|(index, _)| index)
        .collect()
}

/// Category tab row plus the filtered product grid. Switching tabs replays
/// the staggered card entrance, like the page reloading its grid.
pub struct ProductTabs {
    active: TabFilter,
    switched_at: Option<f64>,
    added: HashMap<usize, f64>,
}

impl Default for ProductTabs {
    fn default() -> Self {
        Self {
            active: TabFilter::Only(Category::Arrivals),
            switched_at: None,
            added: HashMap::new(),
        }
    }
}

impl ProductTabs {
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let now = ui.input(|i| i.time);
        if self.switched_at.is_none() {
            // Initial load plays the entrance animation too.
            self.switched_at = Some(now);
        }

        ui.horizontal_wrapped(|ui| {
            for tab in TabFilter::TABS {
                if ui.selectable_label(self.active == tab, tab.label()).clicked()
                    && self.active != tab
                {
                    self.active = tab;
                    self.switched_at = Some(now);
                }
            }
        });
        ui.add_space(12.0);

        let indices = filter_products(catalog::PRODUCTS, self.active);

        let avail = ui.available_width();
        let columns =
            (((avail + GRID_GAP) / (MIN_CELL_WIDTH + GRID_GAP)).floor() as usize).clamp(1, 4);
        let cell_width = (avail - GRID_GAP * (columns - 1) as f32) / columns as f32;

        let elapsed = (now - self.switched_at.unwrap_or(now)) as f32;
        let mut settling = false;

        for (row, chunk) in indices.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_GAP;
                for (col, &index) in chunk.iter().enumerate() {
                    let position = row * columns + col;
                    let alpha = stagger_alpha(elapsed, position, 0.1, 0.35);
                    if alpha < 1.0 {
                        settling = true;
                    }
                    ui.scope(|ui| {
                        ui.set_opacity(alpha);
                        self.product_card(ui, theme, index, cell_width, now);
                    });
                }
            });
            ui.add_space(GRID_GAP);
        }

        if settling {
            ui.ctx().request_repaint();
        }
    }

    fn product_card(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        index: usize,
        cell_width: f32,
        now: f64,
    ) {
        let ctx = ui.ctx().clone();
        let product = &catalog::PRODUCTS[index];
        let accent =
            Color32::from_rgb(product.accent[0], product.accent[1], product.accent[2]);

        egui::Frame::new()
            .fill(theme.card_fill(&ctx))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(cell_width - 24.0);

                let (art_rect, _) = ui
                    .allocate_exact_size(egui::vec2(ui.available_width(), 80.0), Sense::hover());
                ui.painter().rect_filled(art_rect, 8.0, accent.gamma_multiply(0.25));
                ui.painter().text(
                    art_rect.center(),
                    Align2::CENTER_CENTER,
                    product.name.split_whitespace().next().unwrap_or(""),
                    FontId::proportional(20.0),
                    accent,
                );

                ui.add_space(8.0);
                ui.strong(product.name);
                ui.label(theme.muted(&ctx, product.blurb));
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.label(theme.bold(&ctx, &product.price_label()));
                    if let Some(old) = product.old_price_label() {
                        ui.label(theme.muted(&ctx, &old).strikethrough().small());
                    }
                });
                ui.add_space(6.0);

                let recently_added =
                    self.added.get(&index).is_some_and(|t| now - t < ADDED_FEEDBACK_SECS);
                if recently_added {
                    ui.add_enabled(
                        false,
                        egui::Button::new(
                            egui::RichText::new("Added!").color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(39, 174, 96)),
                    );
                    ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
                } else if ui.button("🛒 Add to cart").clicked() {
                    self.added.insert(index, now);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_keeps_every_product() {
        let indices = filter_products(catalog::PRODUCTS, TabFilter::All);
        assert_eq!(indices.len(), catalog::PRODUCTS.len());
    }

    #[test]
    fn category_tab_keeps_only_matching_products() {
        let indices = filter_products(catalog::PRODUCTS, TabFilter::Only(Category::Liquids));
        assert!(!indices.is_empty());
        for index in &indices {
            assert!(catalog::PRODUCTS[*index].in_category(Category::Liquids));
        }
        for (index, product) in catalog::PRODUCTS.iter().enumerate() {
            if product.in_category(Category::Liquids) {
                assert!(indices.contains(&index));
            }
        }
    }

    #[test]
    fn filtering_preserves_catalog_order() {
        let indices = filter_products(catalog::PRODUCTS, TabFilter::Only(Category::Disposables));
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }
}
