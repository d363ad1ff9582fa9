mod core;
mod gui;
mod persistence;

use eframe::egui;

use gui::VitrineApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vitrine")
            .with_inner_size(egui::vec2(1180.0, 840.0))
            .with_min_inner_size(egui::vec2(360.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native("Vitrine", options, Box::new(|cc| Ok(Box::new(VitrineApp::new(cc)))))
}
