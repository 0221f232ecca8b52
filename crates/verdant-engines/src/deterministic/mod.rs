pub mod engine;
pub mod tables;

pub use engine::DeterministicEngine;
