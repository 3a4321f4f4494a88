use serde::{Deserialize, Serialize};
use super::Gesture;

/// 一次推理模拟的结果
///
/// `execution_cycles` 和 `memory_usage` 只是展示用的随机数，与识别结果无关。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    pub recognized_gesture: Gesture,
    pub execution_cycles: u32,
    pub memory_usage: u32,
}

impl SimulationResult {
    pub fn new(recognized_gesture: Gesture, execution_cycles: u32, memory_usage: u32) -> Self {
        Self {
            recognized_gesture,
            execution_cycles,
            memory_usage,
        }
    }
}
