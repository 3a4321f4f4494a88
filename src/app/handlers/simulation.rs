use log::{debug, error, info};
use crate::app::app_core::GestureSimApp;

pub struct SimulationHandler;

impl SimulationHandler {
    /// 生成新数据并交给工作线程识别
    pub fn run_simulation(app: &mut GestureSimApp) {
        if app.state.output.is_loading() {
            return;
        }

        let requested = app.state.control.generation_type;
        let reading = app.state.simulator.next_reading(requested);
        // 先显示新输入，识别结果在延迟之后到达
        let request_id = app.state.output.begin_request(reading);

        match app.state.worker.submit(request_id, reading) {
            Ok(()) => {
                app.state.control.status_message = format!("Simulating request #{} ({})", request_id, requested);
                info!("Request #{} queued: {} -> x={:.3}, y={:.3}, z={:.3}",
                      request_id, requested, reading.accel_x, reading.accel_y, reading.accel_z);
            }
            Err(e) => {
                app.state.output.abandon_request(request_id);
                app.state.control.status_message = format!("Failed to start simulation: {}", e);
                error!("Failed to queue request #{}: {}", request_id, e);
            }
        }
    }

    /// 处理工作线程返回的结果，过期的结果直接丢弃
    pub fn handle_outcomes(app: &mut GestureSimApp) {
        for outcome in app.state.worker.drain_outcomes() {
            if app.state.output.apply_outcome(&outcome) {
                let result = outcome.result;
                app.state.control.status_message = format!(
                    "Recognized '{}' in {}ms",
                    result.recognized_gesture,
                    outcome.latency.as_millis()
                );
                info!("Request #{} recognized as {} (cycles ~{}, memory ~{} B)",
                      outcome.request_id, result.recognized_gesture, result.execution_cycles, result.memory_usage);
            } else {
                debug!("Dropping stale outcome for request #{}", outcome.request_id);
            }
        }
    }
}
