use eframe::egui;
use egui::RichText;

use crate::app::app_core::GestureSimApp;
use crate::inference::CONCEPTUAL_ASSEMBLY;
use crate::utils::format_axis;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 128, 128);

fn card<R>(ui: &mut egui::Ui, title: &str, description: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(title);
        ui.weak(description);
        ui.add_space(8.0);
        add_contents(ui)
    })
    .inner
}

fn badge(ui: &mut egui::Ui, text: String) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// 输入读数卡片
pub fn render_sensor_input(app: &GestureSimApp, ui: &mut egui::Ui) {
    let reading = app.state.output.input;

    card(ui, "Simulated Sensor Input", "3-axis accelerometer readings (g).", |ui| {
        ui.columns(3, |columns| {
            for ((name, value), column) in ["X", "Y", "Z"].iter().zip(reading.axes()).zip(columns.iter_mut()) {
                column.vertical_centered(|ui| {
                    ui.weak(format!("{}-Axis", name));
                    ui.label(RichText::new(format_axis(value)).monospace().size(20.0));
                });
            }
        });
        ui.add_space(6.0);
        app.state.axis_plot.ui(ui, &reading);
    });
}

/// 示意汇编代码卡片
pub fn render_assembly(ui: &mut egui::Ui) {
    card(
        ui,
        "ARM Assembly Inference Logic (Conceptual)",
        "Simplified representation of the inference code. Never executed.",
        |ui| {
            egui::CollapsingHeader::new("Show listing")
                .default_open(false)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .max_height(260.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(CONCEPTUAL_ASSEMBLY.trim()).monospace().size(12.0));
                        });
                });
        },
    );
}

/// 识别结果卡片
pub fn render_results(app: &GestureSimApp, ui: &mut egui::Ui) {
    card(ui, "Simulation Results", "Output from the virtual ARM Cortex-M execution.", |ui| {
        if app.state.output.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Running simulation...");
            });
        } else if let Some(result) = app.state.output.result {
            ui.horizontal(|ui| {
                ui.label(RichText::new(result.recognized_gesture.symbol()).size(56.0).color(ACCENT));
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.weak("Recognized Gesture");
                    ui.label(RichText::new(result.recognized_gesture.title()).size(28.0).strong().color(ACCENT));
                    ui.horizontal(|ui| {
                        badge(ui, format!("Cycles: ~{}", result.execution_cycles));
                        badge(ui, format!("Memory: ~{} B", result.memory_usage));
                        badge(ui, format!("ID: {}", result.recognized_gesture.id()));
                    });
                });
            });
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.weak("Click \"Run Simulation\" to generate data and start.");
                ui.add_space(12.0);
            });
        }
    });
}
