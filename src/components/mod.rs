pub mod app;
pub mod controls_panel;
pub mod reset_modal;
pub mod shop_panel;
pub mod stats_panel;
pub mod theme_toggle;

pub use app::App;
