use std::collections::BTreeMap;
use log::{error, info};

use crate::config::AppConfig;
use crate::simulation::Simulator;
use crate::types::GenerationType;

const DEFAULT_RUN_COUNT: usize = 10;

/// 无界面批量运行的参数
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessArgs {
    pub generation_type: GenerationType,
    pub count: usize,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ArgsError {
    #[error(transparent)]
    InvalidGenerationType(#[from] crate::types::ParseGestureError),
    #[error("Invalid run count: '{0}'")]
    InvalidCount(String),
    #[error("Unexpected argument: '{0}'")]
    Unexpected(String),
}

impl HeadlessArgs {
    /// 解析 `[generation-type] [count]`
    pub fn parse(args: &[String], default_generation: GenerationType) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            generation_type: default_generation,
            count: DEFAULT_RUN_COUNT,
        };

        let mut iter = args.iter();
        if let Some(kind) = iter.next() {
            parsed.generation_type = kind.parse()?;
        }
        if let Some(count) = iter.next() {
            parsed.count = count
                .parse::<usize>()
                .map_err(|_| ArgsError::InvalidCount(count.clone()))?;
        }
        if let Some(extra) = iter.next() {
            return Err(ArgsError::Unexpected(extra.clone()));
        }

        Ok(parsed)
    }
}

/// 批量运行，每次结果输出一行 JSON，返回进程退出码
pub fn run_headless(config: &AppConfig, args: &[String]) -> i32 {
    let args = match HeadlessArgs::parse(args, config.simulation.default_generation) {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            error!("Usage: GestureSim --headless [random|up|down|left|right|unknown] [count]");
            return 2;
        }
    };

    info!("Headless run: {} x {}", args.count, args.generation_type);
    let mut simulator = Simulator::from_config(config);
    let mut summary = BTreeMap::new();

    for _ in 0..args.count {
        let run = simulator.run_once(args.generation_type);
        *summary.entry(run.result.recognized_gesture.as_str()).or_insert(0usize) += 1;

        match serde_json::to_string(&run) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                error!("Failed to serialize run: {}", e);
                return 1;
            }
        }
    }

    for (gesture, count) in &summary {
        info!("{:<8} {}", gesture, count);
    }
    0
}
