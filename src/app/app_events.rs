use eframe::egui;

use super::app_core::GestureSimApp;
use super::handlers::SimulationHandler;

impl GestureSimApp {
    pub fn handle_simulation_results(&mut self) {
        SimulationHandler::handle_outcomes(self);
    }

    /// 空格键触发一次模拟
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // 文本框获得焦点时不拦截空格
        if ctx.wants_keyboard_input() {
            return;
        }

        let space_pressed = ctx.input(|i| i.key_pressed(egui::Key::Space));
        if space_pressed {
            if self.state.output.is_loading() {
                self.state.control.status_message = "Simulation already running".to_string();
            } else {
                SimulationHandler::run_simulation(self);
            }
        }
    }
}
