use std::time::Duration;
use eframe::{egui, Frame};
use log::info;

use crate::config::ConfigManager;
use crate::simulation::SimulationHandle;
use super::state::AppState;

pub struct GestureSimApp {
    // 统一的状态管理
    pub state: AppState,

    // 配置管理
    pub config: ConfigManager,
}

impl GestureSimApp {
    pub fn new(worker: SimulationHandle, config: ConfigManager) -> Self {
        let state = AppState::new(worker, config.get_config());

        info!("GestureSim ready, default generation type: {}", state.control.generation_type);

        GestureSimApp {
            state,
            config,
        }
    }
}

impl eframe::App for GestureSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 设置明亮模式主题
        ctx.set_visuals(egui::Visuals::light());

        // 先处理结果，保证本帧显示最新状态
        self.handle_simulation_results();

        // 渲染UI组件
        crate::app::ui::render_status_bar(self, ctx);
        crate::app::ui::render_bottom_status_bar(self, ctx);
        crate::app::ui::render_main_panel(self, ctx);

        // 处理键盘输入
        self.handle_keyboard_input(ctx);

        let repaint_ms = self.config.get_config().simulation.repaint_interval_ms;
        ctx.request_repaint_after(Duration::from_millis(repaint_ms));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // 窗口关闭时立即通知工作线程，不必等待轮询超时
        info!("Window closing, sending shutdown task to simulation worker");
        self.state.worker.request_shutdown();
    }
}
