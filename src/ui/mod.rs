//! UI modules for the Landsat Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, workspace switcher, and status
//! - Bands workspace: Filter sidebar and spectral band grid
//! - Map workspace: Location sidebar and map canvas

mod bands_panel;
mod map_canvas;
mod map_panel;
mod top_bar;

pub use bands_panel::{render_bands_content, render_bands_sidebar};
pub use map_canvas::render_map_canvas;
pub use map_panel::render_map_sidebar;
pub use top_bar::render_top_bar;
