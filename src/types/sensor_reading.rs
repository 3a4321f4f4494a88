use serde::{Deserialize, Serialize};

/// 三轴加速度读数（单位 g）
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
}

impl SensorReading {
    pub fn new(accel_x: f64, accel_y: f64, accel_z: f64) -> Self {
        Self { accel_x, accel_y, accel_z }
    }

    /// 首次运行前界面显示的读数
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.accel_x.is_finite() && self.accel_y.is_finite() && self.accel_z.is_finite()
    }

    pub fn axes(&self) -> [f64; 3] {
        [self.accel_x, self.accel_y, self.accel_z]
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::zero()
    }
}
