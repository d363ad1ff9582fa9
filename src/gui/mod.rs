pub mod age_gate;
pub mod app;
pub mod carousel;
pub mod footer;
pub mod modal;
pub mod product_tabs;
pub mod reveal;
pub mod reviews;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::VitrineApp;
