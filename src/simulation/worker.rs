use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::inference::GestureClassifier;
use crate::types::{SensorReading, SimulationOutcome, SimulationTask};
use super::seeded_rng;

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Simulation queue is full, try again later")]
    QueueFull,
    #[error("Simulation worker has stopped")]
    WorkerDisconnected,
    #[error("Outcome channel closed before shutdown was requested")]
    OutcomeChannelClosed,
}

/// 工作线程参数
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    /// 人为延迟，模拟硬件执行时间
    pub latency: Duration,
    pub poll_interval: Duration,
    pub seed: Option<u64>,
}

impl WorkerOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.simulation.latency_ms),
            poll_interval: Duration::from_millis(config.simulation.worker_poll_interval_ms),
            // 与生成器错开，避免两者消耗同一序列
            seed: config.simulation.seed.map(|seed| seed.wrapping_add(1)),
        }
    }
}

/// 分段等待人为延迟，期间收到退出信号返回 false
fn wait_latency(latency: Duration, step: Duration, shutdown_signal: &AtomicBool) -> bool {
    let deadline = Instant::now() + latency;
    loop {
        if shutdown_signal.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep(step.min(deadline - now));
    }
}

/// 后台识别线程：等待延迟后执行识别并回传结果
pub fn run_simulation_worker(
    task_receiver: Receiver<SimulationTask>,
    outcome_sender: Sender<SimulationOutcome>,
    classifier: GestureClassifier,
    options: WorkerOptions,
    shutdown_signal: Arc<AtomicBool>,
) -> Result<(), SimulationError> {
    let mut rng = seeded_rng(options.seed);
    info!("Simulation worker started (latency {}ms)", options.latency.as_millis());

    while !shutdown_signal.load(Ordering::Relaxed) {
        let task = match task_receiver.recv_timeout(options.poll_interval) {
            Ok(task) => task,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                info!("Simulation task channel disconnected, worker exiting");
                break;
            }
        };

        match task {
            SimulationTask::Run { request_id, reading } => {
                let started = Instant::now();
                if !wait_latency(options.latency, options.poll_interval, &shutdown_signal) {
                    info!("Shutdown requested while request #{} was pending", request_id);
                    break;
                }

                let result = classifier.classify(&reading, &mut rng);
                debug!("Request #{} -> {} ({} cycles, {} B)",
                       request_id, result.recognized_gesture, result.execution_cycles, result.memory_usage);

                let outcome = SimulationOutcome {
                    request_id,
                    reading,
                    result,
                    latency: started.elapsed(),
                };

                if outcome_sender.send(outcome).is_err() {
                    if shutdown_signal.load(Ordering::Relaxed) {
                        break;
                    }
                    warn!("Outcome channel closed, simulation worker exiting");
                    return Err(SimulationError::OutcomeChannelClosed);
                }
            }
            SimulationTask::Shutdown => {
                info!("Simulation worker received shutdown task");
                break;
            }
        }
    }

    info!("Simulation worker stopped");
    Ok(())
}

/// 界面一侧持有的工作线程通道
#[derive(Debug)]
pub struct SimulationHandle {
    task_sender: Sender<SimulationTask>,
    outcome_receiver: Receiver<SimulationOutcome>,
}

impl SimulationHandle {
    pub fn new(task_sender: Sender<SimulationTask>, outcome_receiver: Receiver<SimulationOutcome>) -> Self {
        Self {
            task_sender,
            outcome_receiver,
        }
    }

    /// 非阻塞提交一次识别请求
    pub fn submit(&self, request_id: u64, reading: SensorReading) -> Result<(), SimulationError> {
        self.task_sender
            .try_send(SimulationTask::Run { request_id, reading })
            .map_err(|e| match e {
                TrySendError::Full(_) => SimulationError::QueueFull,
                TrySendError::Disconnected(_) => SimulationError::WorkerDisconnected,
            })
    }

    /// 取出所有已完成的结果
    pub fn drain_outcomes(&self) -> Vec<SimulationOutcome> {
        self.outcome_receiver.try_iter().collect()
    }

    pub fn request_shutdown(&self) {
        // 工作线程可能已经退出，忽略发送失败
        let _ = self.task_sender.try_send(SimulationTask::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use crate::types::Gesture;

    type Worker = (SimulationHandle, thread::JoinHandle<Result<(), SimulationError>>, Arc<AtomicBool>);

    fn spawn_worker(latency_ms: u64) -> Worker {
        spawn_worker_with_poll(latency_ms, 10)
    }

    fn spawn_worker_with_poll(latency_ms: u64, poll_ms: u64) -> Worker {
        let (task_sender, task_receiver) = bounded(4);
        let (outcome_sender, outcome_receiver) = bounded(4);
        let shutdown = Arc::new(AtomicBool::new(false));
        let options = WorkerOptions {
            latency: Duration::from_millis(latency_ms),
            poll_interval: Duration::from_millis(poll_ms),
            seed: Some(3),
        };
        let worker_shutdown = Arc::clone(&shutdown);
        let handle = thread::spawn(move || {
            run_simulation_worker(task_receiver, outcome_sender, GestureClassifier::default(), options, worker_shutdown)
        });
        (SimulationHandle::new(task_sender, outcome_receiver), handle, shutdown)
    }

    fn wait_for_outcome(handle: &SimulationHandle) -> SimulationOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = handle.drain_outcomes().pop() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "no outcome from worker");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_worker_classifies_after_latency() {
        let (handle, join, _shutdown) = spawn_worker(30);
        handle.submit(7, SensorReading::new(0.0, -1.0, 0.0)).unwrap();

        let outcome = wait_for_outcome(&handle);
        assert_eq!(outcome.request_id, 7);
        assert_eq!(outcome.result.recognized_gesture, Gesture::Down);
        assert!(outcome.latency >= Duration::from_millis(30));

        handle.request_shutdown();
        assert!(join.join().unwrap().is_ok());
    }

    #[test]
    fn test_worker_stops_on_shutdown_signal() {
        let (handle, join, shutdown) = spawn_worker(0);
        shutdown.store(true, Ordering::Relaxed);
        assert!(join.join().unwrap().is_ok());
        assert!(matches!(
            handle.submit(1, SensorReading::zero()),
            Err(SimulationError::WorkerDisconnected)
        ));
    }

    #[test]
    fn test_shutdown_task_stops_worker_without_waiting_for_poll() {
        let (handle, join, _shutdown) = spawn_worker_with_poll(0, 30_000);
        let started = Instant::now();
        handle.request_shutdown();
        assert!(join.join().unwrap().is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_shutdown_interrupts_pending_latency() {
        let (handle, join, shutdown) = spawn_worker(30_000);
        handle.submit(1, SensorReading::new(0.0, 1.0, 0.0)).unwrap();
        thread::sleep(Duration::from_millis(50));

        let started = Instant::now();
        shutdown.store(true, Ordering::Relaxed);
        assert!(join.join().unwrap().is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(handle.drain_outcomes().is_empty());
    }

    #[test]
    fn test_wait_latency_completes_without_signal() {
        let signal = AtomicBool::new(false);
        let started = Instant::now();
        assert!(wait_latency(Duration::from_millis(20), Duration::from_millis(5), &signal));
        assert!(started.elapsed() >= Duration::from_millis(20));

        signal.store(true, Ordering::Relaxed);
        assert!(!wait_latency(Duration::from_secs(30), Duration::from_millis(5), &signal));
    }

    #[test]
    fn test_worker_exits_when_tasks_disconnect() {
        let (handle, join, _shutdown) = spawn_worker(0);
        drop(handle);
        assert!(join.join().unwrap().is_ok());
    }

    #[test]
    fn test_submit_reports_full_queue() {
        let (task_sender, _task_receiver) = bounded(1);
        let (_outcome_sender, outcome_receiver) = bounded(1);
        let handle = SimulationHandle::new(task_sender, outcome_receiver);

        handle.submit(1, SensorReading::zero()).unwrap();
        assert!(matches!(
            handle.submit(2, SensorReading::zero()),
            Err(SimulationError::QueueFull)
        ));
    }
}
