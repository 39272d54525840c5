use super::super::domain::{same_label, PlantRecord, UserConditions};
use super::ScoringWeights;

/// Text a rule attaches to its contribution. A rule emits exactly one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Note {
    Reason(String),
    Warning(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleOutcome {
    pub points: u8,
    pub note: Note,
}

impl RuleOutcome {
    fn reason(points: u8, text: String) -> Self {
        Self {
            points,
            note: Note::Reason(text),
        }
    }

    fn warning(points: u8, text: String) -> Self {
        Self {
            points,
            note: Note::Warning(text),
        }
    }
}

/// `None` means the rule's inputs are missing and it does not apply.
pub(crate) type Rule = fn(&PlantRecord, &UserConditions, &ScoringWeights) -> Option<RuleOutcome>;

/// Evaluation order; it fixes the order of reasons and warnings.
pub(crate) const RULES: [Rule; 5] = [rainfall, sunlight, soil, maintenance, native_species];

pub(crate) fn rainfall(
    plant: &PlantRecord,
    conditions: &UserConditions,
    weights: &ScoringWeights,
) -> Option<RuleOutcome> {
    // A zero bound is an unset catalog value, not a real limit.
    let min = plant.min_rainfall.filter(|bound| *bound != 0)?;
    let max = plant.max_rainfall.filter(|bound| *bound != 0)?;
    let rainfall = conditions.rainfall;

    if rainfall >= min && rainfall <= max {
        Some(RuleOutcome::reason(
            weights.rainfall_in_range,
            format!("Thrives in {rainfall}mm annual rainfall"),
        ))
    } else if rainfall < min {
        Some(RuleOutcome::warning(
            weights.rainfall_below_range,
            format!("Needs supplemental irrigation (requires {min}mm+)"),
        ))
    } else {
        Some(RuleOutcome::warning(
            weights.rainfall_above_range,
            format!("May need improved drainage (optimal max: {max}mm)"),
        ))
    }
}

pub(crate) fn sunlight(
    plant: &PlantRecord,
    conditions: &UserConditions,
    weights: &ScoringWeights,
) -> Option<RuleOutcome> {
    let preferred = present(plant.sunlight.as_deref())?;
    let selected = present(Some(conditions.sunlight.as_str()))?;

    if same_label(preferred, selected) {
        Some(RuleOutcome::reason(
            weights.sunlight_exact,
            format!("Perfect sunlight match ({preferred})"),
        ))
    } else if preferred.to_lowercase().contains("partial")
        || selected.to_lowercase().contains("partial")
    {
        Some(RuleOutcome::reason(
            weights.sunlight_partial,
            format!("Can adapt to {selected}"),
        ))
    } else {
        Some(RuleOutcome::warning(
            weights.sunlight_mismatch,
            format!("Prefers {preferred}, you selected {selected}"),
        ))
    }
}

pub(crate) fn soil(
    plant: &PlantRecord,
    conditions: &UserConditions,
    weights: &ScoringWeights,
) -> Option<RuleOutcome> {
    if plant.soil_types.is_empty() {
        return None;
    }
    let soil_type = present(Some(conditions.soil_type.as_str()))?;
    if plant
        .soil_types
        .iter()
        .any(|candidate| same_label(candidate, soil_type))
    {
        Some(RuleOutcome::reason(
            weights.soil_match,
            format!("Thrives in {soil_type} soil"),
        ))
    } else {
        Some(RuleOutcome::warning(
            weights.soil_mismatch,
            format!("Prefers {} soil", plant.soil_types.join(" or ")),
        ))
    }
}

pub(crate) fn maintenance(
    plant: &PlantRecord,
    _conditions: &UserConditions,
    weights: &ScoringWeights,
) -> Option<RuleOutcome> {
    let level = present(plant.maintenance_level.as_deref())?;

    // Unrecognized levels fall through to the high-maintenance branch.
    match level.to_lowercase().as_str() {
        "low" => Some(RuleOutcome::reason(
            weights.maintenance_low,
            "Low-maintenance plant".to_string(),
        )),
        "medium" => Some(RuleOutcome::reason(
            weights.maintenance_medium,
            "Moderate maintenance required".to_string(),
        )),
        _ => Some(RuleOutcome::warning(
            weights.maintenance_high,
            "High-maintenance plant - requires regular care".to_string(),
        )),
    }
}

pub(crate) fn native_species(
    plant: &PlantRecord,
    _conditions: &UserConditions,
    weights: &ScoringWeights,
) -> Option<RuleOutcome> {
    (plant.native_to_region == Some(true)).then(|| {
        RuleOutcome::reason(
            weights.native_bonus,
            "Native East African species - well-adapted to local conditions".to_string(),
        )
    })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions() -> UserConditions {
        UserConditions::new(800, "Loam", "Full Sun")
    }

    fn plant() -> PlantRecord {
        PlantRecord::new("rule-subject")
    }

    fn weights() -> ScoringWeights {
        ScoringWeights::default()
    }

    #[test]
    fn rainfall_requires_both_bounds() {
        let mut plant = plant();
        plant.min_rainfall = Some(600);
        assert!(rainfall(&plant, &conditions(), &weights()).is_none());
    }

    #[test]
    fn rainfall_zero_bound_disables_rule() {
        let mut plant = plant();
        plant.min_rainfall = Some(0);
        plant.max_rainfall = Some(500);
        let dry = UserConditions::new(300, "Loam", "Full Sun");
        assert!(rainfall(&plant, &dry, &weights()).is_none());

        plant.min_rainfall = Some(200);
        plant.max_rainfall = Some(0);
        assert!(rainfall(&plant, &dry, &weights()).is_none());

        let mut bare = self::plant();
        bare.min_rainfall = Some(0);
        bare.max_rainfall = Some(500);
        let result = crate::recommendations::score(&bare, &dry);
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn rainfall_bounds_are_inclusive() {
        let mut plant = plant();
        plant.min_rainfall = Some(800);
        plant.max_rainfall = Some(800);

        let outcome = rainfall(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 30);
        assert_eq!(
            outcome.note,
            Note::Reason("Thrives in 800mm annual rainfall".to_string())
        );
    }

    #[test]
    fn rainfall_above_range_warns_about_drainage() {
        let mut plant = plant();
        plant.min_rainfall = Some(300);
        plant.max_rainfall = Some(700);

        let outcome = rainfall(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 15);
        assert_eq!(
            outcome.note,
            Note::Warning("May need improved drainage (optimal max: 700mm)".to_string())
        );
    }

    #[test]
    fn sunlight_partial_on_either_side_adapts() {
        let mut plant = plant();
        plant.sunlight = Some("Partial Shade".to_string());

        let outcome = sunlight(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 15);
        assert_eq!(outcome.note, Note::Reason("Can adapt to Full Sun".to_string()));

        let mut plant = self::plant();
        plant.sunlight = Some("Shade".to_string());
        let selected = UserConditions::new(800, "Loam", "partial sun");
        let outcome = sunlight(&plant, &selected, &weights()).expect("rule applies");
        assert_eq!(outcome.points, 15);
    }

    #[test]
    fn sunlight_mismatch_warns_with_both_labels() {
        let mut plant = plant();
        plant.sunlight = Some("Shade".to_string());

        let outcome = sunlight(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 5);
        assert_eq!(
            outcome.note,
            Note::Warning("Prefers Shade, you selected Full Sun".to_string())
        );
    }

    #[test]
    fn soil_mismatch_lists_preferred_soils() {
        let mut plant = plant();
        plant.soil_types = vec!["Sandy".to_string(), "Red Soil".to_string()];

        let outcome = soil(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 8);
        assert_eq!(
            outcome.note,
            Note::Warning("Prefers Sandy or Red Soil soil".to_string())
        );
    }

    #[test]
    fn soil_rule_skips_empty_soil_list() {
        assert!(soil(&plant(), &conditions(), &weights()).is_none());
    }

    #[test]
    fn unknown_maintenance_level_is_treated_as_high() {
        let mut plant = plant();
        plant.maintenance_level = Some("unknown".to_string());

        let outcome = maintenance(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 5);
        assert!(matches!(outcome.note, Note::Warning(_)));
    }

    #[test]
    fn maintenance_level_is_case_insensitive() {
        let mut plant = plant();
        plant.maintenance_level = Some("LOW".to_string());

        let outcome = maintenance(&plant, &conditions(), &weights()).expect("rule applies");

        assert_eq!(outcome.points, 15);
    }

    #[test]
    fn native_bonus_requires_explicit_true() {
        let mut plant = plant();
        assert!(native_species(&plant, &conditions(), &weights()).is_none());

        plant.native_to_region = Some(false);
        assert!(native_species(&plant, &conditions(), &weights()).is_none());

        plant.native_to_region = Some(true);
        let outcome = native_species(&plant, &conditions(), &weights()).expect("bonus applies");
        assert_eq!(outcome.points, 10);
    }
}
