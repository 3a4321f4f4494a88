mod app;
mod config;
mod headless;
mod inference;
mod logger;
mod plotter;
mod simulation;
mod types;
mod utils;

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use crossbeam_channel::bounded;
use dotenv::dotenv;
use eframe::egui;
use log::{error, info, warn};

use app::GestureSimApp;
use config::ConfigManager;
use inference::GestureClassifier;
use simulation::{run_simulation_worker, SimulationHandle, WorkerOptions};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() {
    dotenv().ok(); // 加载 .env 文件

    let config_path = env::var("GESTURESIM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let (config, config_error) = match ConfigManager::load_or_default(&config_path) {
        Ok(manager) => (manager, None),
        Err(e) => (ConfigManager::new(), Some(e)),
    };

    if let Err(e) = logger::init_logger(&config.get_config().logging.level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    if let Some(e) = config_error {
        warn!("Failed to load config from {}: {}, using defaults", config_path, e);
    }
    info!("Application starting (config: {})", config_path);

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--headless") => {
            std::process::exit(headless::run_headless(config.get_config(), &args[1..]));
        }
        Some("--write-config") => {
            // 把当前（或默认）配置写回配置文件，方便手动修改
            match config.save() {
                Ok(()) => match config.config_path() {
                    Some(path) => info!("Config written to {}", path.display()),
                    None => warn!("Config was not loaded from a file, nothing written"),
                },
                Err(e) => {
                    error!("Failed to write config: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
        _ => {}
    }

    let cfg = config.get_config().clone();

    let (task_sender, task_receiver) = bounded(cfg.channels.task_channel_capacity);
    let (outcome_sender, outcome_receiver) = bounded(cfg.channels.outcome_channel_capacity);
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    let worker_shutdown = Arc::clone(&shutdown_signal);
    let classifier = GestureClassifier::from_config(&cfg);
    let worker_options = WorkerOptions::from_config(&cfg);
    let worker_handle = thread::spawn(move || {
        run_simulation_worker(task_receiver, outcome_sender, classifier, worker_options, worker_shutdown)
    });

    let options = eframe::NativeOptions {
        vsync: cfg.window.vsync,
        hardware_acceleration: if cfg.window.hardware_acceleration {
            eframe::HardwareAcceleration::Preferred // 硬件加速优先模式
        } else {
            eframe::HardwareAcceleration::Off
        },
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.window.title.clone())
            .with_inner_size([cfg.window.width, cfg.window.height])
            .with_resizable(cfg.window.resizable),
        ..Default::default()
    };

    let worker = SimulationHandle::new(task_sender, outcome_receiver);
    if let Err(e) = eframe::run_native(
        &cfg.window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(GestureSimApp::new(worker, config)))),
    ) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }

    // GUI 关闭后，通知工作线程退出
    info!("GUI closed, signaling simulation worker to shutdown");
    shutdown_signal.store(true, Ordering::Relaxed);

    match worker_handle.join() {
        Ok(Ok(())) => info!("Simulation worker shut down gracefully"),
        Ok(Err(e)) => warn!("Simulation worker stopped with error: {}", e),
        Err(_) => error!("Simulation worker panicked"),
    }
}
