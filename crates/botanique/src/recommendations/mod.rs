//! Plant suitability scoring, ranking and the catalog surface around it.
//!
//! [`SuitabilityEngine`] turns one plant and one set of user conditions into a
//! bounded score with reasons and warnings. [`rank`] applies it to every
//! candidate a [`PlantRepository`] supplies and keeps the best matches.

pub mod catalog;
pub mod domain;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogImportError, PlantCatalogImporter};
pub use domain::{
    same_label, ConditionsError, ConditionsQuery, PlantId, PlantRecord, PlantSummary,
    UserConditions,
};
pub use ranking::{rank, Recommendation, RecommendationReport, DEFAULT_RECOMMENDATION_LIMIT};
pub use repository::{PlantFilter, PlantRepository, RepositoryError};
pub use router::plant_router;
pub use scoring::{score, ScoreResult, ScoringWeights, SuitabilityEngine, MAX_SCORE};
pub use service::{RecommendationService, RecommendationServiceError};
