use eframe::egui;
use crate::app::app_core::GestureSimApp;
use super::{render_assembly, render_control_panel, render_results, render_sensor_input};

pub fn render_main_panel(app: &mut GestureSimApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("GestureSim").size(32.0).strong());
                    ui.weak("Simulate Edge AI: gesture recognition logic on virtual sensor data.");
                });
                ui.add_space(12.0);

                render_control_panel(app, ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                render_sensor_input(app, ui);
                ui.add_space(10.0);
                render_assembly(ui);
                ui.add_space(10.0);
                render_results(app, ui);
            });
    });
}
