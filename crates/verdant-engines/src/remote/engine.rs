use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::normalize;
use super::protocol::{ChatMessage, ChatRequest, ChatResponse};
use crate::error::EstimateError;
use crate::traits::{EngineKind, ImpactEngine};
use crate::types::{ImpactResult, ProjectInput};

pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar-pro";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You are an environmental impact analysis expert. Provide \
     realistic, data-backed estimates in strict JSON format.";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// AI-backed estimator: one chat-completion POST per estimate.
///
/// No retries and no local timeout policy beyond the client-level request
/// timeout; expiry surfaces as [`EstimateError::Transport`] and the broker
/// decides what happens next.
#[derive(Debug)]
pub struct RemoteEngine {
    client: Client,
    config: RemoteConfig,
}

impl RemoteEngine {
    pub fn new(config: RemoteConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn request_body(&self, input: &ProjectInput) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(input),
                },
            ],
            temperature: 0.2,
        }
    }
}

#[async_trait]
impl ImpactEngine for RemoteEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::AiBacked
    }

    fn name(&self) -> &'static str {
        "ai_backed"
    }

    async fn estimate(&self, input: &ProjectInput) -> Result<ImpactResult, EstimateError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(input))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EstimateError::Upstream {
                status: status.as_u16(),
            });
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|error| EstimateError::Malformed(error.to_string()))?;
        let content = envelope
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| EstimateError::Malformed("response envelope has no choices".into()))?;

        tracing::debug!(
            target: "verdant_engines",
            content_len = content.len(),
            "inference answer received"
        );
        normalize::normalize(content)
    }
}

/// Natural-language instruction embedding every input field plus the strict
/// output contract. Absent optional fields become explicit placeholders so
/// the model never sees a dangling label.
fn build_prompt(input: &ProjectInput) -> String {
    let location = input
        .location
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("Unknown");
    let description = input
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("N/A");

    format!(
        "Analyze the environmental impact of the following project details and provide a \
         realistic estimate in JSON format.\n\n\
         Project Details:\n\
         - Type: {project_type}\n\
         - Size: {size}\n\
         - Location: {location}\n\
         - Materials: {materials}\n\
         - Energy Sources: {energy_sources}\n\
         - Description: {description}\n\n\
         Return ONLY a valid JSON object with the exact following structure (no markdown, \
         no extra text):\n\
         {{\n\
           \"co2Footprint\": number (estimated annual CO2 footprint in tons),\n\
           \"energyUse\": number (estimated annual energy use in MWh),\n\
           \"sustainabilityRisk\": \"low\" | \"medium\" | \"high\",\n\
           \"materialImpact\": [{{\"name\": \"string\", \"value\": number (impact score 0-100)}}],\n\
           \"energyBreakdown\": [{{\"name\": \"string\", \"value\": number (impact score 0-100)}}],\n\
           \"recommendations\": [\"string\"] (3-5 specific, actionable recommendations to \
         reduce environmental impact based on the project details)\n\
         }}",
        project_type = input.project_type,
        size = input.size,
        location = location,
        materials = input.materials.join(", "),
        energy_sources = input.energy_sources.join(", "),
        description = description,
    )
}
