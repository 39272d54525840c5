use serde::Deserialize;

use super::domain::{same_label, PlantId, PlantRecord};

/// Candidate selection criteria. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlantFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    /// Substring matched against scientific and common names.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sunlight: Option<String>,
    #[serde(default, alias = "water")]
    pub water_needs: Option<String>,
}

impl PlantFilter {
    pub fn for_category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            ..Self::default()
        }
    }

    /// Case-insensitive match of a record against every set criterion.
    pub fn matches(&self, plant: &PlantRecord) -> bool {
        if let Some(category) = criterion(&self.category) {
            if !plant.in_category(category) {
                return false;
            }
        }

        if let Some(function) = criterion(&self.function) {
            if !plant.has_function(function) {
                return false;
            }
        }

        if let Some(sunlight) = criterion(&self.sunlight) {
            if !equals_ignoring_case(plant.sunlight.as_deref(), sunlight) {
                return false;
            }
        }

        if let Some(water) = criterion(&self.water_needs) {
            if !equals_ignoring_case(plant.water_needs.as_deref(), water) {
                return false;
            }
        }

        if let Some(search) = criterion(&self.search) {
            let needle = search.to_lowercase();
            let in_scientific = plant
                .scientific_name
                .as_deref()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false);
            let in_common = plant
                .common_names
                .iter()
                .any(|name| name.to_lowercase().contains(&needle));
            if !(in_scientific || in_common) {
                return false;
            }
        }

        true
    }
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn equals_ignoring_case(value: Option<&str>, expected: &str) -> bool {
    value
        .map(|value| same_label(value, expected))
        .unwrap_or(false)
}

/// Storage abstraction supplying candidate plants.
pub trait PlantRepository: Send + Sync {
    /// Records matching `filter`, in catalog order.
    fn fetch(&self, filter: &PlantFilter) -> Result<Vec<PlantRecord>, RepositoryError>;
    fn get(&self, id: &PlantId) -> Result<Option<PlantRecord>, RepositoryError>;
    /// Distinct category names known to the catalog.
    fn categories(&self) -> Result<Vec<String>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
