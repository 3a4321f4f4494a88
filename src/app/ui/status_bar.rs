use eframe::egui;
use crate::app::app_core::GestureSimApp;

pub fn render_status_bar(app: &mut GestureSimApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(36.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Status:");

                let status_color = if app.state.output.is_loading() {
                    egui::Color32::from_rgb(255, 165, 0) // 橙色
                } else {
                    egui::Color32::from_rgb(0, 150, 0) // 绿色
                };
                ui.colored_label(status_color, app.state.get_status_summary());

                ui.separator();
                render_status_details(app, ui);

                ui.separator();
                ui.label(format!("Runs: {}", app.state.output.runs_completed));

                ui.separator();
                let simulation = &app.config.get_config().simulation;
                ui.label(format!("Latency: {}ms", simulation.latency_ms));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match simulation.seed {
                        Some(seed) => ui.label(format!("Seed: {}", seed)),
                        None => ui.label("Seed: random"),
                    };
                });
            });
            ui.add_space(5.0);
        });
}

fn render_status_details(app: &GestureSimApp, ui: &mut egui::Ui) {
    if let Some(started) = app.state.output.pending_since {
        let latency_ms = app.config.get_config().simulation.latency_ms.max(1) as f64;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let progress = (elapsed_ms / latency_ms).min(1.0);
        ui.label(format!("running... {:.0}ms", elapsed_ms));

        // 进度条
        let progress_bar = egui::ProgressBar::new(progress as f32)
            .desired_width(120.0);
        ui.add(progress_bar);
    } else if let Some(latency) = app.state.output.last_latency {
        ui.label(format!("last run took {}ms", latency.as_millis()));
    } else {
        ui.label("waiting for first run...");
    }
}

pub fn render_bottom_status_bar(app: &mut GestureSimApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_status_bar")
        .min_height(25.0)
        .show(ctx, |ui| {
            ui.add_space(3.0);
            ui.horizontal(|ui| {
                if !app.state.control.status_message.is_empty() {
                    ui.colored_label(egui::Color32::from_rgb(0, 100, 200), &app.state.control.status_message);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Conceptual simulation. Real ARM execution needs an emulator such as QEMU.");
                });
            });
            ui.add_space(3.0);
        });
}
