//! Reduces an untrusted model answer to the canonical result shape.
//!
//! Narrowly scoped on purpose: fence stripping, one JSON parse, bounds
//! enforcement. Nothing here ever panics past the boundary; every failure is
//! an [`EstimateError::Malformed`], which the broker treats exactly like a
//! network failure.

use crate::error::EstimateError;
use crate::types::ImpactResult;

const MAX_RECOMMENDATIONS: usize = 5;

/// Parses a raw inference answer into an [`ImpactResult`].
///
/// Models routinely wrap the requested JSON in a markdown code fence despite
/// instructions not to, so a leading/trailing triple-backtick fence (with an
/// optional language tag) is stripped first. After parsing, breakdown values
/// are clamped to [0, 100], the two totals are floored at zero and rounded to
/// integers like the deterministic path, and recommendations are truncated to
/// five, so AI-sourced results honor the same bounds deterministic ones do.
pub fn normalize(raw: &str) -> Result<ImpactResult, EstimateError> {
    let body = strip_code_fence(raw);
    let mut result: ImpactResult =
        serde_json::from_str(body).map_err(|error| EstimateError::Malformed(error.to_string()))?;

    result.co2_footprint = result.co2_footprint.max(0.0).round();
    result.energy_use = result.energy_use.max(0.0).round();
    for entry in result
        .material_impact
        .iter_mut()
        .chain(result.energy_breakdown.iter_mut())
    {
        entry.value = entry.value.clamp(0.0, 100.0);
    }
    if let Some(recs) = result.recommendations.as_mut() {
        recs.truncate(MAX_RECOMMENDATIONS);
    }

    Ok(result)
}

fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.split_once('\n') {
            // First fence line is at most a language tag; drop it.
            Some((tag, remainder)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                remainder
            }
            _ => rest.strip_prefix("json").unwrap_or(rest),
        };
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    fn payload() -> String {
        serde_json::json!({
            "co2Footprint": 120.0,
            "energyUse": 80.0,
            "sustainabilityRisk": "medium",
            "materialImpact": [{"name": "Concrete", "value": 45.0}],
            "energyBreakdown": [{"name": "Grid", "value": 45.0}],
            "recommendations": ["Use low-carbon concrete."]
        })
        .to_string()
    }

    #[test]
    fn parses_bare_json() {
        let result = normalize(&payload()).unwrap();
        assert_eq!(result.co2_footprint, 120.0);
        assert_eq!(result.sustainability_risk, RiskLevel::Medium);
        assert_eq!(result.material_impact[0].name, "Concrete");
    }

    #[test]
    fn strips_json_language_fence() {
        let fenced = format!("```json\n{}\n```", payload());
        let result = normalize(&fenced).unwrap();
        assert_eq!(result.energy_use, 80.0);
    }

    #[test]
    fn strips_bare_fence_and_whitespace() {
        let fenced = format!("  ```\n{}\n```  ", payload());
        assert!(normalize(&fenced).is_ok());
    }

    #[test]
    fn strips_single_line_fence() {
        let fenced = format!("```json{}```", payload());
        assert!(normalize(&fenced).is_ok());
    }

    #[test]
    fn truncated_json_is_malformed() {
        let mut broken = payload();
        broken.truncate(broken.len() / 2);
        let fenced = format!("```json\n{broken}");
        assert!(matches!(
            normalize(&fenced),
            Err(EstimateError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_risk_label_is_malformed() {
        let body = payload().replace("medium", "catastrophic");
        assert!(matches!(normalize(&body), Err(EstimateError::Malformed(_))));
    }

    #[test]
    fn breakdown_values_are_clamped() {
        let body = serde_json::json!({
            "co2Footprint": 120.0,
            "energyUse": 80.0,
            "sustainabilityRisk": "medium",
            "materialImpact": [{"name": "Concrete", "value": 450.0}],
            "energyBreakdown": [{"name": "Grid", "value": -20.0}],
        })
        .to_string();
        let result = normalize(&body).unwrap();
        assert_eq!(result.material_impact[0].value, 100.0);
        assert_eq!(result.energy_breakdown[0].value, 0.0);
    }

    #[test]
    fn negative_totals_are_floored_and_rounded() {
        let body = serde_json::json!({
            "co2Footprint": -3.0,
            "energyUse": 79.6,
            "sustainabilityRisk": "low",
            "materialImpact": [],
            "energyBreakdown": [],
        })
        .to_string();
        let result = normalize(&body).unwrap();
        assert_eq!(result.co2_footprint, 0.0);
        assert_eq!(result.energy_use, 80.0);
    }

    #[test]
    fn recommendations_are_truncated_to_five() {
        let recs: Vec<String> = (0..8).map(|i| format!("rec {i}")).collect();
        let body = serde_json::json!({
            "co2Footprint": 10.0,
            "energyUse": 10.0,
            "sustainabilityRisk": "low",
            "materialImpact": [],
            "energyBreakdown": [],
            "recommendations": recs,
        })
        .to_string();
        let result = normalize(&body).unwrap();
        assert_eq!(result.recommendations.unwrap().len(), 5);
    }

    #[test]
    fn missing_recommendations_stay_absent() {
        let body = serde_json::json!({
            "co2Footprint": 10.0,
            "energyUse": 10.0,
            "sustainabilityRisk": "low",
            "materialImpact": [],
            "energyBreakdown": [],
        })
        .to_string();
        let result = normalize(&body).unwrap();
        assert!(result.recommendations.is_none());
    }
}
