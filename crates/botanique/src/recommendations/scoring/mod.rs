mod rules;

use super::domain::{PlantRecord, UserConditions};
use rules::Note;
use serde::{Deserialize, Serialize};

/// Upper bound of a suitability score.
pub const MAX_SCORE: u8 = 100;

/// Points awarded by each branch of the scoring rules.
///
/// The defaults cap out at 30 + 25 + 20 + 15 + 10 = 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub rainfall_in_range: u8,
    pub rainfall_below_range: u8,
    pub rainfall_above_range: u8,
    pub sunlight_exact: u8,
    pub sunlight_partial: u8,
    pub sunlight_mismatch: u8,
    pub soil_match: u8,
    pub soil_mismatch: u8,
    pub maintenance_low: u8,
    pub maintenance_medium: u8,
    pub maintenance_high: u8,
    pub native_bonus: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rainfall_in_range: 30,
            rainfall_below_range: 10,
            rainfall_above_range: 15,
            sunlight_exact: 25,
            sunlight_partial: 15,
            sunlight_mismatch: 5,
            soil_match: 20,
            soil_mismatch: 8,
            maintenance_low: 15,
            maintenance_medium: 10,
            maintenance_high: 5,
            native_bonus: 10,
        }
    }
}

/// Score and explanation for one plant against one set of conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Stateless evaluator applying the suitability rules to a plant.
#[derive(Debug, Clone, Default)]
pub struct SuitabilityEngine {
    weights: ScoringWeights,
}

impl SuitabilityEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, plant: &PlantRecord, conditions: &UserConditions) -> ScoreResult {
        let mut total: u32 = 0;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        for rule in rules::RULES {
            let Some(outcome) = rule(plant, conditions, &self.weights) else {
                continue;
            };

            total += u32::from(outcome.points);
            match outcome.note {
                Note::Reason(text) => reasons.push(text),
                Note::Warning(text) => warnings.push(text),
            }
        }

        // Unreachable with the default weights; holds when weights are retuned.
        let score = total.min(u32::from(MAX_SCORE)) as u8;

        ScoreResult {
            score,
            reasons,
            warnings,
        }
    }
}

/// Scores a plant with the default weights.
pub fn score(plant: &PlantRecord, conditions: &UserConditions) -> ScoreResult {
    SuitabilityEngine::default().score(plant, conditions)
}
