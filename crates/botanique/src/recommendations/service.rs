use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{same_label, ConditionsError, ConditionsQuery, PlantId, PlantRecord};
use super::ranking::{rank, RecommendationReport, DEFAULT_RECOMMENDATION_LIMIT};
use super::repository::{PlantFilter, PlantRepository, RepositoryError};
use super::scoring::SuitabilityEngine;

/// Service composing the candidate repository and the suitability engine.
pub struct RecommendationService<R> {
    repository: Arc<R>,
    engine: SuitabilityEngine,
    limit: usize,
}

impl<R> RecommendationService<R>
where
    R: PlantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(
            repository,
            SuitabilityEngine::default(),
            DEFAULT_RECOMMENDATION_LIMIT,
        )
    }

    pub fn with_engine(repository: Arc<R>, engine: SuitabilityEngine, limit: usize) -> Self {
        Self {
            repository,
            engine,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Validate the query, fetch candidates and rank them.
    ///
    /// Validation runs before the repository is touched.
    pub fn recommend(
        &self,
        query: &ConditionsQuery,
    ) -> Result<RecommendationReport, RecommendationServiceError> {
        let conditions = query.validate()?;

        let filter = PlantFilter {
            category: query.category_name(),
            function: conditions.function.clone(),
            ..PlantFilter::default()
        };
        let candidates = self.repository.fetch(&filter)?;
        debug!(
            candidates = candidates.len(),
            category = ?filter.category,
            function = ?filter.function,
            "scoring candidate plants"
        );

        let report = rank(&candidates, &conditions, &self.engine, self.limit);
        info!(
            total_analyzed = report.total_analyzed,
            returned = report.recommendations.len(),
            rainfall = conditions.rainfall,
            soil_type = %conditions.soil_type,
            sunlight = %conditions.sunlight,
            "recommendations ranked"
        );

        Ok(report)
    }

    /// Fetch a single plant by id.
    pub fn plant(&self, id: &PlantId) -> Result<PlantRecord, RecommendationServiceError> {
        let plant = self.repository.get(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(plant)
    }

    /// List plants matching the filter, in catalog order.
    pub fn list(&self, filter: &PlantFilter) -> Result<Vec<PlantRecord>, RecommendationServiceError> {
        Ok(self.repository.fetch(filter)?)
    }

    /// Plants in a named category. Unknown categories are reported as not found.
    pub fn by_category(&self, name: &str) -> Result<Vec<PlantRecord>, RecommendationServiceError> {
        let known = self
            .repository
            .categories()?
            .iter()
            .any(|category| same_label(category, name));
        if !known {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.repository.fetch(&PlantFilter::for_category(name))?)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Validation(#[from] ConditionsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
