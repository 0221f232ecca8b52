use async_trait::async_trait;

use super::tables;
use crate::error::EstimateError;
use crate::traits::{EngineKind, ImpactEngine};
use crate::types::{BreakdownEntry, ImpactResult, ProjectInput, RiskLevel};

/// Rule-based estimator over the static score tables.
///
/// `run` is total: no I/O, no randomness, no failure path. The same input
/// always yields the same output, which is what lets the broker use it as
/// the safety net under every inference-path failure.
#[derive(Debug, Default)]
pub struct DeterministicEngine;

impl DeterministicEngine {
    pub fn run(&self, input: &ProjectInput) -> ImpactResult {
        let base_co2 =
            tables::base_impact(&input.project_type) * tables::size_multiplier(&input.size);
        let material_total: f64 = input
            .materials
            .iter()
            .map(|tag| tables::material_impact(tag))
            .sum();
        let energy_total: f64 = input
            .energy_sources
            .iter()
            .map(|tag| tables::energy_impact(tag))
            .sum();

        let co2_footprint = (base_co2 + material_total + energy_total / 2.0).round();
        let energy_use = (energy_total * 1.5 + material_total * 0.3).round();
        let sustainability_risk = risk_for(co2_footprint);

        let material_impact = input
            .materials
            .iter()
            .map(|tag| BreakdownEntry {
                name: capitalize(tag),
                value: tables::material_impact(tag),
            })
            .collect();
        let energy_breakdown = input
            .energy_sources
            .iter()
            .map(|tag| BreakdownEntry {
                name: display_case(tag),
                value: tables::energy_impact(tag),
            })
            .collect();

        let recommendations = recommendations_for(input, sustainability_risk);

        ImpactResult {
            co2_footprint,
            energy_use,
            sustainability_risk,
            material_impact,
            energy_breakdown,
            recommendations: Some(recommendations),
        }
    }
}

#[async_trait]
impl ImpactEngine for DeterministicEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Deterministic
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }

    async fn estimate(&self, input: &ProjectInput) -> Result<ImpactResult, EstimateError> {
        Ok(self.run(input))
    }
}

/// Fixed policy thresholds, strict greater-than.
fn risk_for(co2_footprint: f64) -> RiskLevel {
    if co2_footprint > 200.0 {
        RiskLevel::High
    } else if co2_footprint > 100.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Ordered rule list; each rule appends at most one entry, capped at five.
fn recommendations_for(input: &ProjectInput, risk: RiskLevel) -> Vec<String> {
    let has = |tags: &[String], wanted: &str| tags.iter().any(|tag| tag == wanted);
    let mut recs = Vec::new();

    if has(&input.energy_sources, "coal") || has(&input.energy_sources, "diesel") {
        recs.push(
            "Consider transitioning to renewable energy sources like solar or wind to \
             significantly reduce CO₂ emissions."
                .to_string(),
        );
    }
    if has(&input.materials, "concrete") || has(&input.materials, "steel") {
        recs.push(
            "Explore using recycled or low-carbon alternatives for high-impact materials \
             like concrete and steel."
                .to_string(),
        );
    }
    if !has(&input.materials, "recycled") {
        recs.push(
            "Incorporate recycled materials where possible to reduce virgin resource \
             consumption."
                .to_string(),
        );
    }
    if risk == RiskLevel::High {
        recs.push(
            "Consider reducing project size or phasing construction to minimize peak \
             environmental impact."
                .to_string(),
        );
    }
    recs.push(
        "Implement energy monitoring systems to track and optimize consumption over the \
         project lifecycle."
            .to_string(),
    );

    recs.truncate(5);
    recs
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Display casing for energy tags: hyphens become spaces, words capitalized.
fn display_case(tag: &str) -> String {
    tag.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}
