//! Static impact score tables.
//!
//! Pure data, process-wide, never written after start. Every lookup is
//! total: unknown keys fall through to a documented default so user-entered
//! custom categories always resolve to a sane score.

pub const DEFAULT_BASE_IMPACT: f64 = 100.0;
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_MATERIAL_IMPACT: f64 = 20.0;
pub const DEFAULT_ENERGY_IMPACT: f64 = 30.0;

/// Base annual CO2 scalar per project type.
pub fn base_impact(project_type: &str) -> f64 {
    match project_type {
        "residential" => 50.0,
        "commercial" => 120.0,
        "industrial" => 200.0,
        "infrastructure" => 150.0,
        "agricultural" => 80.0,
        "educational" => 90.0,
        "healthcare" => 140.0,
        "hospitality" => 130.0,
        "retail" => 110.0,
        _ => DEFAULT_BASE_IMPACT,
    }
}

pub fn size_multiplier(size: &str) -> f64 {
    match size {
        "small" => 0.5,
        "medium" => 1.0,
        "large" => 1.8,
        "extra-large" => 2.5,
        _ => DEFAULT_SIZE_MULTIPLIER,
    }
}

/// Impact score per material tag, bounded [0, 100].
pub fn material_impact(tag: &str) -> f64 {
    match tag {
        "concrete" => 45.0,
        "steel" => 35.0,
        "wood" => 10.0,
        "glass" => 20.0,
        "recycled" => 5.0,
        "composite" => 25.0,
        "brick" => 25.0,
        "stone" => 20.0,
        "metal" => 40.0,
        "aluminum" => 50.0,
        "asphalt" => 35.0,
        "plastic" => 30.0,
        _ => DEFAULT_MATERIAL_IMPACT,
    }
}

/// Impact score per energy-source tag, bounded [0, 100].
pub fn energy_impact(tag: &str) -> f64 {
    match tag {
        "solar" => 10.0,
        "wind" => 12.0,
        "natural-gas" => 60.0,
        "coal" => 90.0,
        "hydro" => 8.0,
        "nuclear" => 15.0,
        "biomass" => 18.0,
        "geothermal" => 8.0,
        "diesel" => 75.0,
        "grid" => 45.0,
        _ => DEFAULT_ENERGY_IMPACT,
    }
}
