use std::time::Duration;
use super::{SensorReading, SimulationResult};

/// 发送给模拟工作线程的任务
#[derive(Clone, Debug)]
pub enum SimulationTask {
    Run {
        request_id: u64,
        reading: SensorReading,
    },
    Shutdown,
}

/// 工作线程返回的结果
#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    pub request_id: u64,
    pub reading: SensorReading,
    pub result: SimulationResult,
    pub latency: Duration,
}
