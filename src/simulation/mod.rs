pub mod simulator;
pub mod worker;

pub use simulator::{seeded_rng, Simulator};
pub use worker::{run_simulation_worker, SimulationHandle, WorkerOptions};
