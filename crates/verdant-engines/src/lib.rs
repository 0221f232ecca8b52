pub mod deterministic;
pub mod error;
pub mod remote;
pub mod traits;
pub mod types;

pub use deterministic::DeterministicEngine;
pub use error::EstimateError;
pub use remote::{RemoteConfig, RemoteEngine};
pub use traits::{EngineKind, ImpactEngine};
pub use types::{BreakdownEntry, ImpactResult, ProjectInput, RiskLevel};
