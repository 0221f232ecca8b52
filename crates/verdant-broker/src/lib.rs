pub mod broker;
pub mod handle;
pub mod service;

pub use broker::{Broker, EstimateOutcome, FallbackReason};
pub use handle::{BrokerHandle, BrokerRequest};
