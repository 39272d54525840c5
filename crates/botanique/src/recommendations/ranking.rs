use super::domain::{PlantRecord, PlantSummary, UserConditions};
use super::scoring::SuitabilityEngine;
use serde::{Deserialize, Serialize};

/// Number of entries a report keeps unless configured otherwise.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// A scored plant as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub plant: PlantSummary,
    pub suitability_score: u8,
    pub match_reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Ranked recommendations plus the conditions they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub total_analyzed: usize,
    pub recommendations: Vec<Recommendation>,
    pub user_conditions: UserConditions,
}

/// Scores every candidate, orders by descending score and keeps the top `limit`.
///
/// The sort is stable, so equally scored plants keep their catalog order.
/// `total_analyzed` counts every candidate, including the truncated ones.
pub fn rank<'a, I>(
    candidates: I,
    conditions: &UserConditions,
    engine: &SuitabilityEngine,
    limit: usize,
) -> RecommendationReport
where
    I: IntoIterator<Item = &'a PlantRecord>,
{
    let mut recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .map(|plant| {
            let result = engine.score(plant, conditions);
            Recommendation {
                plant: plant.summary(),
                suitability_score: result.score,
                match_reasons: result.reasons,
                warnings: result.warnings,
            }
        })
        .collect();

    let total_analyzed = recommendations.len();
    recommendations.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    recommendations.truncate(limit);

    RecommendationReport {
        total_analyzed,
        recommendations,
        user_conditions: conditions.clone(),
    }
}
