pub mod sensor_reading;
pub mod gesture;
pub mod results;
pub mod tasks;

pub use sensor_reading::SensorReading;
pub use gesture::{Gesture, GenerationType, ParseGestureError};
pub use results::SimulationResult;
pub use tasks::{SimulationTask, SimulationOutcome};
