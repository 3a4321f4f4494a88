use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::plotter::AxisPlot;
use crate::simulation::{SimulationHandle, Simulator};
use crate::types::{GenerationType, SensorReading, SimulationOutcome, SimulationResult};

/// 应用状态管理模块
/// 控制面板、输出卡片和工作线程通道分别放在独立的结构体中

/// 控制面板状态
#[derive(Debug, Clone)]
pub struct ControlState {
    pub generation_type: GenerationType,
    pub status_message: String,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            generation_type: GenerationType::Random,
            status_message: String::new(),
        }
    }
}

/// 输出卡片状态
#[derive(Debug, Clone)]
pub struct OutputState {
    pub input: SensorReading,
    pub result: Option<SimulationResult>,
    /// 最新一次请求的编号，旧请求的结果会被丢弃
    pub pending_request: Option<u64>,
    pub pending_since: Option<Instant>,
    pub next_request_id: u64,
    pub runs_completed: u64,
    pub last_latency: Option<Duration>,
}

impl Default for OutputState {
    fn default() -> Self {
        Self {
            input: SensorReading::zero(),
            result: None,
            pending_request: None,
            pending_since: None,
            next_request_id: 1,
            runs_completed: 0,
            last_latency: None,
        }
    }
}

impl OutputState {
    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// 开始新的请求：显示新输入，清空旧结果
    pub fn begin_request(&mut self, reading: SensorReading) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.input = reading;
        self.result = None;
        self.pending_request = Some(request_id);
        self.pending_since = Some(Instant::now());
        request_id
    }

    /// 请求提交失败时回到空闲状态
    pub fn abandon_request(&mut self, request_id: u64) {
        if self.pending_request == Some(request_id) {
            self.pending_request = None;
            self.pending_since = None;
        }
    }

    /// 应用工作线程结果，返回是否被采用
    pub fn apply_outcome(&mut self, outcome: &SimulationOutcome) -> bool {
        if self.pending_request != Some(outcome.request_id) {
            return false;
        }
        self.input = outcome.reading;
        self.result = Some(outcome.result);
        self.pending_request = None;
        self.pending_since = None;
        self.runs_completed += 1;
        self.last_latency = Some(outcome.latency);
        true
    }
}

/// 统一的应用状态管理
pub struct AppState {
    pub control: ControlState,
    pub output: OutputState,
    pub worker: SimulationHandle,
    pub simulator: Simulator,
    pub axis_plot: AxisPlot,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(worker: SimulationHandle, config: &AppConfig) -> Self {
        Self {
            control: ControlState {
                generation_type: config.simulation.default_generation,
                ..ControlState::default()
            },
            output: OutputState::default(),
            worker,
            simulator: Simulator::from_config(config),
            axis_plot: AxisPlot::new(&config.plot, config.classifier.threshold),
        }
    }

    /// 获取当前状态摘要
    pub fn get_status_summary(&self) -> &'static str {
        if self.output.is_loading() {
            "Simulating"
        } else {
            "Idle"
        }
    }
}
