use serde::{Deserialize, Serialize};

/// User-declared attributes of a construction project to be scored.
///
/// Every key field is free-form: unrecognized project types, sizes, material
/// or energy tags resolve to documented default scores instead of failing.
/// Field names are camelCase on the wire so project files and the inference
/// payload share one spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub project_type: String,
    pub size: String,
    /// Informational only; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub energy_sources: Vec<String>,
    /// Extra context for the inference prompt; never scored deterministically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{label}")
    }
}

/// One named impact score in the [0, 100] range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: f64,
}

/// The canonical estimation output.
///
/// Callers only ever observe this either absent (estimation pending) or fully
/// populated: `co2_footprint`/`energy_use` are non-negative integers,
/// breakdown values sit in [0, 100], and `recommendations` holds at most five
/// entries. Both engines produce this shape; the normalizer parses the
/// inference answer straight into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// Tons of CO2 per year, integer-rounded.
    pub co2_footprint: f64,
    /// MWh per year, integer-rounded.
    pub energy_use: f64,
    pub sustainability_risk: RiskLevel,
    /// One entry per input material, mirroring input order.
    pub material_impact: Vec<BreakdownEntry>,
    /// One entry per input energy source, mirroring input order.
    pub energy_breakdown: Vec<BreakdownEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}
