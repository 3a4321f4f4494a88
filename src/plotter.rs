use egui::Color32;
use egui_plot::{Bar, BarChart, HLine, Plot, PlotBounds};

use crate::config::PlotConfig;
use crate::types::SensorReading;

const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];

fn rgb(color: [u8; 3]) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

/// 三轴读数柱状图，附带 ±阈值 参考线
#[derive(Debug, Clone)]
pub struct AxisPlot {
    height: f32,
    axis_limit: f64,
    threshold: f64,
    show_thresholds: bool,
    axis_colors: [Color32; 3],
    threshold_color: Color32,
}

impl AxisPlot {
    pub fn new(config: &PlotConfig, threshold: f64) -> Self {
        Self {
            height: config.plot_height,
            axis_limit: config.axis_limit,
            threshold,
            show_thresholds: config.show_thresholds,
            axis_colors: [
                rgb(config.colors.x_axis),
                rgb(config.colors.y_axis),
                rgb(config.colors.z_axis),
            ],
            threshold_color: rgb(config.colors.threshold),
        }
    }

    /// 纵轴范围，读数超出配置范围时自动放大
    pub fn y_limit(&self, reading: &SensorReading) -> f64 {
        let peak = reading
            .axes()
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, |max, v| max.max(v.abs()));
        self.axis_limit.max(peak * 1.1)
    }

    fn bars(&self, reading: &SensorReading) -> Vec<Bar> {
        reading
            .axes()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let value = if value.is_finite() { value } else { 0.0 };
                Bar::new(i as f64, value)
                    .name(AXIS_NAMES[i])
                    .fill(self.axis_colors[i])
                    .width(0.6)
            })
            .collect()
    }

    pub fn ui(&self, ui: &mut egui::Ui, reading: &SensorReading) {
        let limit = self.y_limit(reading);
        let bars = self.bars(reading);

        Plot::new("axis_plot")
            .height(self.height)
            .x_axis_formatter(|mark, _| {
                let index = mark.value.round();
                if (mark.value - index).abs() < 1e-6 && (0.0..3.0).contains(&index) {
                    AXIS_NAMES[index as usize].to_string()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(|mark, _| format!("{:.1}g", mark.value))
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([-0.6, -limit], [2.6, limit]));
                plot_ui.bar_chart(BarChart::new("Acceleration", bars));

                if self.show_thresholds {
                    plot_ui.hline(HLine::new("+Threshold", self.threshold).color(self.threshold_color));
                    plot_ui.hline(HLine::new("-Threshold", -self.threshold).color(self.threshold_color));
                }
            });
    }
}
