//! Percentile classification of growth measurements.
//!
//! Measurements are compared against the reference band nearest to the
//! child's age; there is no interpolation between bands. Head circumference
//! is stored for display and never classified.

use shared::{AlertSeverity, Gender, GrowthAlert, GrowthAnalysis, GrowthMetric, PercentileBand};

use crate::domain::reference::{
    nearest_development_milestones, nearest_growth_standard, PercentileThresholds,
};

/// Band of `value` against the P3/P97 thresholds; the bounds themselves count as normal
pub fn classify(value: f64, thresholds: &PercentileThresholds) -> PercentileBand {
    if value < thresholds.p3 {
        PercentileBand::BelowP3
    } else if value > thresholds.p97 {
        PercentileBand::AboveP97
    } else {
        PercentileBand::Normal
    }
}

fn alert_for(metric: GrowthMetric, band: PercentileBand) -> Option<GrowthAlert> {
    let (severity, message) = match (metric, band) {
        (_, PercentileBand::Normal) => return None,
        (GrowthMetric::Weight, PercentileBand::BelowP3) => (
            AlertSeverity::Referral,
            "Peso abaixo do percentil 3 - consulte o pediatra",
        ),
        (GrowthMetric::Weight, PercentileBand::AboveP97) => (
            AlertSeverity::Advisory,
            "Peso acima do percentil 97 - monitore com atenção",
        ),
        (GrowthMetric::Height, PercentileBand::BelowP3) => (
            AlertSeverity::Referral,
            "Altura abaixo do percentil 3 - avaliação necessária",
        ),
        (GrowthMetric::Height, PercentileBand::AboveP97) => (
            AlertSeverity::Informational,
            "Altura acima do percentil 97",
        ),
    };
    Some(GrowthAlert {
        metric,
        severity,
        message: message.to_string(),
    })
}

/// Classify weight and height for a child of `gender` aged `age_months`
pub fn analyze(gender: Gender, age_months: u32, weight: f64, height: f64) -> GrowthAnalysis {
    let (reference_age, weight_thresholds) =
        nearest_growth_standard(gender, GrowthMetric::Weight, age_months);
    let (_, height_thresholds) = nearest_growth_standard(gender, GrowthMetric::Height, age_months);

    let weight_band = classify(weight, &weight_thresholds);
    let height_band = classify(height, &height_thresholds);

    let alerts = [
        alert_for(GrowthMetric::Weight, weight_band),
        alert_for(GrowthMetric::Height, height_band),
    ]
    .into_iter()
    .flatten()
    .collect();

    GrowthAnalysis {
        reference_age_months: reference_age,
        weight_band,
        height_band,
        alerts,
    }
}

/// Expected milestones for the development band nearest to `age_months`
pub fn milestones_for_age(age_months: u32) -> Vec<String> {
    let (_, milestones) = nearest_development_milestones(age_months);
    milestones.iter().map(|m| m.to_string()).collect()
}
