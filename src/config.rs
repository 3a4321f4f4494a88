use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::inference::{ClassifierParams, GeneratorParams, MetricsParams};
use crate::types::GenerationType;

/// f64 能精确表示的十进制位数上限
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// 应用配置管理模块
/// 集中管理所有配置项，提供默认值和配置验证

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub generator: GeneratorParams,
    pub classifier: ClassifierParams,
    pub metrics: MetricsParams,
    pub plot: PlotConfig,
    pub channels: ChannelConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
    pub hardware_acceleration: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 未设置 RUST_LOG 时的默认过滤级别
    pub level: String,
}

/// 模拟流程配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// 模拟硬件延迟（毫秒）
    pub latency_ms: u64,
    pub default_generation: GenerationType,
    /// 固定随机种子，便于复现；None 时从系统熵源初始化
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub repaint_interval_ms: u64,
    pub worker_poll_interval_ms: u64,
}

/// 绘图配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub plot_height: f32,
    pub axis_limit: f64,
    pub show_thresholds: bool,
    pub colors: PlotColors,
}

/// 绘图颜色配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotColors {
    pub x_axis: [u8; 3],
    pub y_axis: [u8; 3],
    pub z_axis: [u8; 3],
    pub threshold: [u8; 3],
}

/// 通道配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub task_channel_capacity: usize,
    pub outcome_channel_capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 860.0,
            title: "GestureSim - Edge AI Gesture Simulation".to_string(),
            resizable: true,
            vsync: true,
            hardware_acceleration: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latency_ms: 350,
            default_generation: GenerationType::Random,
            seed: None,
            repaint_interval_ms: 100,
            worker_poll_interval_ms: 100,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_height: 160.0,
            axis_limit: 1.5,
            show_thresholds: true,
            colors: PlotColors::default(),
        }
    }
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            x_axis: [220, 60, 60],    // 红色
            y_axis: [40, 160, 80],    // 绿色
            z_axis: [60, 90, 220],    // 蓝色
            threshold: [150, 150, 150],
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            task_channel_capacity: 16,
            outcome_channel_capacity: 16,
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 文本解析并验证
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError("Window dimensions must be positive".to_string()));
        }

        let classifier = &self.classifier;
        if !classifier.threshold.is_finite() || !classifier.dominance_factor.is_finite() {
            return Err(ConfigError::ValidationError("Classifier parameters must be finite".to_string()));
        }
        if !(classifier.threshold > 0.0) {
            return Err(ConfigError::ValidationError("Classifier threshold must be positive".to_string()));
        }
        if !(classifier.dominance_factor >= 1.0) {
            return Err(ConfigError::ValidationError("Dominance factor must be at least 1.0".to_string()));
        }

        let generator = &self.generator;
        let generator_floats = [
            ("noise_width", generator.noise_width),
            ("unknown_noise_width", generator.unknown_noise_width),
            ("magnitude_min", generator.magnitude_min),
            ("magnitude_max", generator.magnitude_max),
            ("damping", generator.damping),
            ("random_damping", generator.random_damping),
        ];
        for (name, value) in generator_floats {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!("Generator '{}' must be finite", name)));
            }
        }
        if generator.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationError(format!(
                "Decimal places must be at most {}",
                MAX_DECIMAL_PLACES
            )));
        }
        if generator.noise_width < 0.0 || generator.unknown_noise_width < 0.0 {
            return Err(ConfigError::ValidationError("Noise widths must not be negative".to_string()));
        }
        if generator.magnitude_min > generator.magnitude_max {
            return Err(ConfigError::ValidationError("Magnitude range is inverted".to_string()));
        }
        if !(0.0..=1.0).contains(&generator.damping) || !(0.0..=1.0).contains(&generator.random_damping) {
            return Err(ConfigError::ValidationError("Damping factors must be within [0, 1]".to_string()));
        }
        // 强制生成的手势必须始终能被识别出来
        if generator.magnitude_min <= classifier.threshold {
            return Err(ConfigError::ValidationError(
                "Minimum magnitude must exceed the classifier threshold".to_string(),
            ));
        }
        if generator.magnitude_min <= generator.max_subordinate() * classifier.dominance_factor {
            return Err(ConfigError::ValidationError(
                "Damped noise is too strong for the forced axis to stay dominant".to_string(),
            ));
        }
        // unknown 噪声不能达到阈值
        if generator.unknown_noise_width / 2.0 >= classifier.threshold {
            return Err(ConfigError::ValidationError(
                "Unknown noise band reaches the classifier threshold".to_string(),
            ));
        }

        for (name, range) in [("cycles", self.metrics.cycles), ("memory", self.metrics.memory)] {
            if range[0] > range[1] {
                return Err(ConfigError::ValidationError(format!("Metrics range '{}' is inverted", name)));
            }
        }

        if self.channels.task_channel_capacity == 0 || self.channels.outcome_channel_capacity == 0 {
            return Err(ConfigError::ValidationError("Channel capacities must be positive".to_string()));
        }

        if self.simulation.worker_poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError("Worker poll interval must be positive".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_path: None,
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            config_path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// 文件不存在时使用默认配置，文件无效时返回错误
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self {
                config: AppConfig::default(),
                config_path: Some(path.to_path_buf()),
            });
        }
        Self::load_from_file(path)
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// 保存配置
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.config_path {
            self.config.save_to_file(path)?;
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [simulation]
            latency_ms = 50
            default_generation = "left"
            seed = 9

            [classifier]
            threshold = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.latency_ms, 50);
        assert_eq!(config.simulation.default_generation, GenerationType::Left);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.classifier.threshold, 0.5);
        assert_eq!(config.classifier.dominance_factor, 1.5);
        assert_eq!(config.generator, GeneratorParams::default());
        assert_eq!(config.metrics.cycles, [500, 1999]);
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let mut config = AppConfig::default();
        config.simulation.latency_ms = 10;
        config.metrics.memory = [64, 128];
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.simulation.latency_ms, 10);
        assert_eq!(parsed.metrics.memory, [64, 128]);
    }

    #[test]
    fn test_rejects_magnitude_below_threshold() {
        let mut config = AppConfig::default();
        config.generator.magnitude_min = 0.5;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_non_finite_generator_values() {
        for text in [
            "[generator]\nmagnitude_min = nan\n",
            "[generator]\nnoise_width = nan\n",
            "[generator]\nmagnitude_max = inf\n",
            "[generator]\ndamping = nan\n",
            "[classifier]\nthreshold = inf\n",
            "[classifier]\ndominance_factor = nan\n",
        ] {
            let result = AppConfig::from_toml_str(text);
            assert!(matches!(result, Err(ConfigError::ValidationError(_))), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_rejects_too_many_decimal_places() {
        let result = AppConfig::from_toml_str("[generator]\ndecimal_places = 400\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let mut config = AppConfig::default();
        config.generator.decimal_places = MAX_DECIMAL_PLACES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_band_reaching_threshold() {
        let mut config = AppConfig::default();
        config.generator.unknown_noise_width = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validated_config_keeps_forced_gestures_recognizable() {
        use crate::inference::classifier::recognize;
        use crate::inference::generate;
        use crate::types::{GenerationType, Gesture};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let config = AppConfig::from_toml_str(
            "[generator]\nmagnitude_min = 0.7\nmagnitude_max = 2.0\ndecimal_places = 15\n",
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let reading = generate(GenerationType::Up, &config.generator, &mut rng);
            assert!(reading.is_finite());
            assert_eq!(recognize(&reading, &config.classifier), Gesture::Up);
        }
    }

    #[test]
    fn test_rejects_weak_dominance_factor() {
        let mut config = AppConfig::default();
        config.classifier.dominance_factor = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_metrics_range() {
        let mut config = AppConfig::default();
        config.metrics.cycles = [2000, 500];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_generation_name() {
        let result = AppConfig::from_toml_str("[simulation]\ndefault_generation = \"shake\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let manager = ConfigManager::load_or_default("definitely/not/here/gesturesim.toml").unwrap();
        assert_eq!(manager.get_config().simulation.latency_ms, 350);
        assert!(manager.config_path().is_some());
    }
}
