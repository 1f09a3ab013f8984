pub mod app;
pub mod canvas_badges;
pub mod header;
pub mod product_canvas;
pub mod product_sidebar;
pub mod status_bar;
pub mod toolbar;
pub mod zoom_controls;
pub mod zoom_viewport;

pub use app::{App, AppProps};
