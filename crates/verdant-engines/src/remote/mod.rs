pub mod engine;
pub mod normalize;
pub mod protocol;

pub use engine::{RemoteConfig, RemoteEngine, DEFAULT_ENDPOINT, DEFAULT_MODEL};
