use serde::{Deserialize, Serialize};

use crate::types::{GenerationType, Gesture, SensorReading};
use crate::utils::round_to;
use super::EntropySource;

/// 模拟传感器数据生成参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// 基础噪声区间宽度（以0为中心）
    pub noise_width: f64,
    /// "unknown" 类型使用的噪声区间宽度
    pub unknown_noise_width: f64,
    pub magnitude_min: f64,
    pub magnitude_max: f64,
    /// 指定手势时非主导轴的衰减系数
    pub damping: f64,
    /// 随机模式下非主导轴的衰减系数
    pub random_damping: f64,
    pub decimal_places: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            noise_width: 0.3,
            unknown_noise_width: 0.4,
            magnitude_min: 0.8,
            magnitude_max: 1.3,
            damping: 0.3,
            random_damping: 0.4,
            decimal_places: 3,
        }
    }
}

impl GeneratorParams {
    /// 非主导轴可能达到的最大绝对值
    pub fn max_subordinate(&self) -> f64 {
        self.noise_width / 2.0 * self.damping.max(self.random_damping)
    }
}

/// 生成一条三轴读数，可偏向指定手势
pub fn generate<E: EntropySource + ?Sized>(
    requested: GenerationType,
    params: &GeneratorParams,
    rng: &mut E,
) -> SensorReading {
    let mut axes = [
        centered(rng, params.noise_width),
        centered(rng, params.noise_width),
        centered(rng, params.noise_width),
    ];
    let magnitude = params.magnitude_min + rng.unit() * (params.magnitude_max - params.magnitude_min);

    match requested.target() {
        Some(Gesture::Unknown) => {
            // 所有轴都保持在阈值以下，避免出现主导轴
            for axis in axes.iter_mut() {
                *axis = centered(rng, params.unknown_noise_width);
            }
        }
        Some(gesture) => force_gesture(&mut axes, gesture, magnitude, params.damping),
        None => {
            let pick = rng.unit();
            let gesture = if pick < 0.2 {
                Some(Gesture::Up)
            } else if pick < 0.4 {
                Some(Gesture::Down)
            } else if pick < 0.6 {
                Some(Gesture::Right)
            } else if pick < 0.8 {
                Some(Gesture::Left)
            } else {
                None
            };
            // 剩下约20%保持原始噪声
            if let Some(gesture) = gesture {
                force_gesture(&mut axes, gesture, magnitude, params.random_damping);
            }
        }
    }

    let [x, y, z] = axes.map(|v| round_to(v, params.decimal_places));
    SensorReading::new(x, y, z)
}

fn centered<E: EntropySource + ?Sized>(rng: &mut E, width: f64) -> f64 {
    (rng.unit() - 0.5) * width
}

fn force_gesture(axes: &mut [f64; 3], gesture: Gesture, magnitude: f64, damping: f64) {
    let (dominant, value) = match gesture {
        Gesture::Up => (1, magnitude),
        Gesture::Down => (1, -magnitude),
        Gesture::Right => (0, magnitude),
        Gesture::Left => (0, -magnitude),
        Gesture::Unknown => return,
    };

    for (index, axis) in axes.iter_mut().enumerate() {
        if index == dominant {
            *axis = value;
        } else {
            *axis *= damping;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::entropy::testing::ScriptedEntropy;
    use crate::utils::has_at_most_decimals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_up_forces_positive_y() {
        // 噪声 x=+0.15 y=0 z=-0.15，幅值取最大
        let mut rng = ScriptedEntropy::new(vec![1.0, 0.5, 0.0, 1.0]);
        let reading = generate(GenerationType::Up, &GeneratorParams::default(), &mut rng);
        assert_eq!(reading.accel_y, 1.3);
        assert_eq!(reading.accel_x, 0.045);
        assert_eq!(reading.accel_z, -0.045);
    }

    #[test]
    fn test_left_forces_negative_x() {
        let mut rng = ScriptedEntropy::new(vec![0.5, 1.0, 0.5, 0.0]);
        let reading = generate(GenerationType::Left, &GeneratorParams::default(), &mut rng);
        assert_eq!(reading.accel_x, -0.8);
        assert_eq!(reading.accel_y, 0.045);
        assert_eq!(reading.accel_z, 0.0);
    }

    #[test]
    fn test_random_pick_bands() {
        let params = GeneratorParams::default();
        // 前三个值是噪声，第四个是幅值，第五个决定手势
        let cases = [
            (0.1, Some(Gesture::Up)),
            (0.3, Some(Gesture::Down)),
            (0.5, Some(Gesture::Right)),
            (0.7, Some(Gesture::Left)),
            (0.9, None),
        ];
        for (pick, expected) in cases {
            let mut rng = ScriptedEntropy::new(vec![0.5, 0.5, 0.5, 0.0, pick]);
            let reading = generate(GenerationType::Random, &params, &mut rng);
            match expected {
                Some(Gesture::Up) => assert_eq!(reading.accel_y, 0.8),
                Some(Gesture::Down) => assert_eq!(reading.accel_y, -0.8),
                Some(Gesture::Right) => assert_eq!(reading.accel_x, 0.8),
                Some(Gesture::Left) => assert_eq!(reading.accel_x, -0.8),
                _ => assert_eq!(reading, SensorReading::zero()),
            }
        }
    }

    #[test]
    fn test_unknown_stays_inside_noise_band() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(42);
        let limit = params.unknown_noise_width / 2.0;
        for _ in 0..1000 {
            let reading = generate(GenerationType::Unknown, &params, &mut rng);
            for axis in reading.axes() {
                assert!(axis.abs() <= limit + 1e-9, "axis {} outside band", axis);
            }
        }
    }

    #[test]
    fn test_generated_axes_have_three_decimals() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        for requested in GenerationType::ALL {
            for _ in 0..200 {
                let reading = generate(requested, &params, &mut rng);
                for axis in reading.axes() {
                    assert!(has_at_most_decimals(axis, 3), "{} has too many decimals", axis);
                }
            }
        }
    }

    #[test]
    fn test_forced_magnitude_within_range() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let reading = generate(GenerationType::Down, &params, &mut rng);
            assert!(reading.accel_y <= -params.magnitude_min);
            assert!(reading.accel_y >= -params.magnitude_max);
            assert!(reading.accel_x.abs() <= params.max_subordinate() + 1e-9);
        }
    }
}
