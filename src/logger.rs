use chrono::Local;
use env_logger::{Builder, Env};
use log::{Level, Record, SetLoggerError};
use std::io::Write;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m\x1b[1m", // 红色
        Level::Warn => "\x1b[33m\x1b[1m",  // 黄色
        Level::Info => "\x1b[32m\x1b[1m",  // 绿色
        Level::Debug => "\x1b[36m\x1b[1m", // 青色
        Level::Trace => "\x1b[90m\x1b[1m", // 灰色
    }
}

/// 日志行中的 [文件:行号] 标记
fn source_tag(record: &Record) -> String {
    format!("[{}:{}]", record.file().unwrap_or("unknown"), record.line().unwrap_or(0))
}

/// 初始化日志，RUST_LOG 优先于配置中的默认级别
pub fn init_logger(default_level: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}{:<5}\x1b[0m {} {}",
                Local::now().format("%H:%M:%S%.3f"),
                level_color(record.level()),
                record.level(),
                source_tag(record),
                record.args(),
            )
        })
        .try_init()
}
