pub mod entropy;
pub mod generator;
pub mod classifier;
pub mod assembly;

pub use entropy::EntropySource;
pub use generator::{generate, GeneratorParams};
pub use classifier::{ClassifierParams, GestureClassifier, MetricsParams};
pub use assembly::CONCEPTUAL_ASSEMBLY;
