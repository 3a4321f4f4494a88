pub mod status_bar;
pub mod control_panel;
pub mod output_panel;
pub mod main_panel;

pub use status_bar::{render_status_bar, render_bottom_status_bar};
pub use control_panel::render_control_panel;
pub use output_panel::{render_sensor_input, render_assembly, render_results};
pub use main_panel::render_main_panel;
