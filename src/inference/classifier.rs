use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::types::{Gesture, SensorReading, SimulationResult};
use super::EntropySource;

/// 识别参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    /// 轴信号被视为有效的最小幅值
    pub threshold: f64,
    /// 主导轴必须超过其它轴的倍数
    pub dominance_factor: f64,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            dominance_factor: 1.5,
        }
    }
}

/// 展示用指标的取值范围（闭区间）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsParams {
    pub cycles: [u32; 2],
    pub memory: [u32; 2],
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            cycles: [500, 1999],
            memory: [100, 199],
        }
    }
}

/// 纯函数：根据主导轴判断手势
///
/// 先检查 Y 轴（上/下），再检查 X 轴（左/右），都不满足则为 unknown。
/// 比较全部为严格大于，平局不会判给任何一个轴。
pub fn recognize(reading: &SensorReading, params: &ClassifierParams) -> Gesture {
    if !reading.is_finite() {
        return Gesture::Unknown;
    }

    let abs_x = reading.accel_x.abs();
    let abs_y = reading.accel_y.abs();
    let abs_z = reading.accel_z.abs();
    let factor = params.dominance_factor;

    if abs_y > abs_x * factor && abs_y > abs_z * factor && abs_y > params.threshold {
        if reading.accel_y > 0.0 { Gesture::Up } else { Gesture::Down }
    } else if abs_x > abs_y * factor && abs_x > abs_z * factor && abs_x > params.threshold {
        if reading.accel_x > 0.0 { Gesture::Right } else { Gesture::Left }
    } else {
        Gesture::Unknown
    }
}

/// 识别手势并附带随机的周期数和内存占用
pub fn classify<E: EntropySource + ?Sized>(
    reading: &SensorReading,
    params: &ClassifierParams,
    metrics: &MetricsParams,
    rng: &mut E,
) -> SimulationResult {
    let recognized_gesture = recognize(reading, params);
    let execution_cycles = rng.int_in(metrics.cycles[0]..=metrics.cycles[1]);
    let memory_usage = rng.int_in(metrics.memory[0]..=metrics.memory[1]);

    SimulationResult::new(recognized_gesture, execution_cycles, memory_usage)
}

/// 工作线程持有的分类器
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    params: ClassifierParams,
    metrics: MetricsParams,
}

impl GestureClassifier {
    pub fn new(params: ClassifierParams, metrics: MetricsParams) -> Self {
        Self { params, metrics }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.classifier.clone(), config.metrics.clone())
    }

    pub fn classify<E: EntropySource + ?Sized>(&self, reading: &SensorReading, rng: &mut E) -> SimulationResult {
        classify(reading, &self.params, &self.metrics, rng)
    }
}
