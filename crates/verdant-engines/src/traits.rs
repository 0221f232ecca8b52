use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::types::{ImpactResult, ProjectInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Deterministic,
    AiBacked,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EngineKind::Deterministic => "deterministic",
            EngineKind::AiBacked => "ai_backed",
        };
        write!(f, "{label}")
    }
}

#[async_trait]
pub trait ImpactEngine: Send + Sync {
    fn kind(&self) -> EngineKind;
    fn name(&self) -> &'static str;
    async fn estimate(&self, input: &ProjectInput) -> Result<ImpactResult, EstimateError>;
}
