use eframe::egui;
use crate::app::app_core::GestureSimApp;
use crate::app::handlers::SimulationHandler;
use crate::types::GenerationType;

pub fn render_control_panel(app: &mut GestureSimApp, ui: &mut egui::Ui) {
    let is_loading = app.state.output.is_loading();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Simulation Control");
        ui.weak("Generate sensor data and run the simulated inference.");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Generate Data For:");

            // 模拟进行中禁止切换类型
            ui.add_enabled_ui(!is_loading, |ui| {
                let current = app.state.control.generation_type;
                egui::ComboBox::from_id_salt("generation_type")
                    .selected_text(current.label())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for option in GenerationType::ALL {
                            ui.selectable_value(&mut app.state.control.generation_type, option, option.label());
                        }
                    });
            });

            ui.add_space(16.0);

            let button_text = if is_loading { "Simulating..." } else { "▶ Run Simulation" };
            let button = egui::Button::new(button_text).min_size(egui::vec2(160.0, 30.0));
            if ui.add_enabled(!is_loading, button).clicked() {
                SimulationHandler::run_simulation(app);
            }

            ui.weak("(or press SPACE)");
        });
    });
}
