use anyhow::Result;
use serde::Serialize;

use verdant_engines::{
    DeterministicEngine, EngineKind, ImpactEngine, ImpactResult, ProjectInput, RemoteConfig,
    RemoteEngine,
};

/// Why a deterministic result was served instead of an AI-backed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No inference credential configured. Expected offline mode, not an error.
    NoCredential,
    /// The inference path failed; the error was logged and swallowed.
    RemoteFailed,
}

/// The broker's answer for one submission. `fallback` is `None` exactly when
/// the AI-backed engine produced the result.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateOutcome {
    pub result: ImpactResult,
    pub engine: EngineKind,
    pub fallback: Option<FallbackReason>,
}

/// Estimation orchestrator: the sole producer of canonical results.
///
/// Routes each submission to the AI-backed engine when one is configured and
/// falls back to the deterministic engine on any failure. `estimate` itself
/// never fails; the deterministic path is the total safety net.
pub struct Broker {
    deterministic: DeterministicEngine,
    remote: Option<Box<dyn ImpactEngine>>,
}

impl Broker {
    pub fn new(remote: Option<RemoteConfig>) -> Result<Self> {
        let remote = match remote {
            Some(config) => {
                Some(Box::new(RemoteEngine::new(config)?) as Box<dyn ImpactEngine>)
            }
            None => None,
        };
        Ok(Self {
            deterministic: DeterministicEngine,
            remote,
        })
    }

    /// Offline-only broker; every estimate is served deterministically.
    pub fn deterministic_only() -> Self {
        Self {
            deterministic: DeterministicEngine,
            remote: None,
        }
    }

    /// Broker over an arbitrary remote engine, used to exercise failure modes.
    pub fn with_remote_engine(remote: Box<dyn ImpactEngine>) -> Self {
        Self {
            deterministic: DeterministicEngine,
            remote: Some(remote),
        }
    }

    pub async fn estimate(&self, input: &ProjectInput) -> EstimateOutcome {
        let Some(remote) = self.remote.as_deref() else {
            tracing::debug!(
                target: "verdant_broker",
                "no inference credential configured; serving deterministic estimate"
            );
            return self.fall_back(input, FallbackReason::NoCredential);
        };

        match remote.estimate(input).await {
            Ok(result) => EstimateOutcome {
                result,
                engine: remote.kind(),
                fallback: None,
            },
            Err(error) => {
                tracing::warn!(
                    target: "verdant_broker",
                    engine = %remote.kind(),
                    error = %error,
                    "inference path failed; falling back to deterministic engine"
                );
                self.fall_back(input, FallbackReason::RemoteFailed)
            }
        }
    }

    fn fall_back(&self, input: &ProjectInput, reason: FallbackReason) -> EstimateOutcome {
        EstimateOutcome {
            result: self.deterministic.run(input),
            engine: self.deterministic.kind(),
            fallback: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use verdant_engines::{EstimateError, RiskLevel};

    enum StubMode {
        Succeed,
        FailTransport,
        FailUpstream,
        FailMalformed,
    }

    struct StubRemote {
        mode: StubMode,
    }

    fn canned_result() -> ImpactResult {
        ImpactResult {
            co2_footprint: 321.0,
            energy_use: 123.0,
            sustainability_risk: RiskLevel::High,
            material_impact: vec![],
            energy_breakdown: vec![],
            recommendations: None,
        }
    }

    #[async_trait]
    impl ImpactEngine for StubRemote {
        fn kind(&self) -> EngineKind {
            EngineKind::AiBacked
        }

        fn name(&self) -> &'static str {
            "stub"
        }

        async fn estimate(&self, _input: &ProjectInput) -> Result<ImpactResult, EstimateError> {
            match self.mode {
                StubMode::Succeed => Ok(canned_result()),
                StubMode::FailTransport => {
                    Err(EstimateError::Transport("connection refused".into()))
                }
                StubMode::FailUpstream => Err(EstimateError::Upstream { status: 503 }),
                StubMode::FailMalformed => {
                    Err(EstimateError::Malformed("unexpected end of input".into()))
                }
            }
        }
    }

    fn sample_input() -> ProjectInput {
        ProjectInput {
            project_type: "residential".to_string(),
            size: "medium".to_string(),
            location: None,
            materials: vec!["wood".to_string()],
            energy_sources: vec!["solar".to_string()],
            description: None,
        }
    }

    #[tokio::test]
    async fn no_credential_serves_deterministic_estimate() {
        let outcome = Broker::deterministic_only()
            .estimate(&sample_input())
            .await;
        assert_eq!(outcome.engine, EngineKind::Deterministic);
        assert_eq!(outcome.fallback, Some(FallbackReason::NoCredential));
        assert_eq!(outcome.result.co2_footprint, 65.0);
    }

    #[tokio::test]
    async fn remote_success_is_served_as_is() {
        let broker = Broker::with_remote_engine(Box::new(StubRemote {
            mode: StubMode::Succeed,
        }));
        let outcome = broker.estimate(&sample_input()).await;
        assert_eq!(outcome.engine, EngineKind::AiBacked);
        assert!(outcome.fallback.is_none());
        assert_eq!(outcome.result, canned_result());
    }

    #[tokio::test]
    async fn every_failure_mode_falls_back_to_deterministic() {
        let input = sample_input();
        let expected = DeterministicEngine.run(&input);

        for mode in [
            StubMode::FailTransport,
            StubMode::FailUpstream,
            StubMode::FailMalformed,
        ] {
            let broker = Broker::with_remote_engine(Box::new(StubRemote { mode }));
            let outcome = broker.estimate(&input).await;
            assert_eq!(outcome.engine, EngineKind::Deterministic);
            assert_eq!(outcome.fallback, Some(FallbackReason::RemoteFailed));
            assert_eq!(outcome.result, expected);
        }
    }
}
