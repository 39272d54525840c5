use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::domain::{ConditionsQuery, PlantId, PlantRecord, UserConditions};
use crate::recommendations::repository::{PlantFilter, PlantRepository, RepositoryError};
use crate::recommendations::{plant_router, RecommendationService};

pub(super) fn loam_full_sun() -> UserConditions {
    UserConditions::new(500, "loam", "full sun")
}

pub(super) fn ideal_plant() -> PlantRecord {
    PlantRecord {
        id: PlantId("markhamia".to_string()),
        scientific_name: Some("Markhamia lutea".to_string()),
        common_names: vec!["Nile tulip".to_string()],
        category: Some("Tree".to_string()),
        min_rainfall: Some(400),
        max_rainfall: Some(1200),
        sunlight: Some("Full Sun".to_string()),
        soil_types: vec!["Loam".to_string()],
        maintenance_level: Some("low".to_string()),
        native_to_region: Some(true),
        functions: vec!["Shade".to_string()],
        ..PlantRecord::default()
    }
}

pub(super) fn dry_loving_plant() -> PlantRecord {
    PlantRecord {
        id: PlantId("grevillea".to_string()),
        scientific_name: Some("Grevillea robusta".to_string()),
        min_rainfall: Some(600),
        max_rainfall: Some(900),
        sunlight: Some("Full Sun".to_string()),
        soil_types: vec!["Loam".to_string(), "Clay".to_string()],
        maintenance_level: Some("medium".to_string()),
        native_to_region: Some(false),
        ..PlantRecord::default()
    }
}

/// Plant whose score is controlled by its maintenance level alone.
pub(super) fn maintenance_only(id: &str, level: &str) -> PlantRecord {
    let mut plant = PlantRecord::new(id);
    plant.maintenance_level = Some(level.to_string());
    plant
}

pub(super) fn query(rainfall: &str, soil_type: &str, sunlight: &str) -> ConditionsQuery {
    ConditionsQuery {
        rainfall: Some(rainfall.to_string()),
        soil_type: Some(soil_type.to_string()),
        sunlight: Some(sunlight.to_string()),
        ..ConditionsQuery::default()
    }
}

pub(super) fn catalog() -> Vec<PlantRecord> {
    let mut hedge = maintenance_only("kei-apple", "high");
    hedge.category = Some("Hedge".to_string());
    hedge.functions = vec!["Security".to_string()];

    let mut groundcover = maintenance_only("arachis", "low");
    groundcover.category = Some("Groundcover".to_string());
    groundcover.functions = vec!["Erosion Control".to_string()];

    vec![dry_loving_plant(), hedge, ideal_plant(), groundcover]
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    plants: Vec<PlantRecord>,
    fetches: Mutex<Vec<PlantFilter>>,
}

impl MemoryRepository {
    pub(super) fn with_plants(plants: Vec<PlantRecord>) -> Self {
        Self {
            plants,
            fetches: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn fetches(&self) -> Vec<PlantFilter> {
        self.fetches.lock().expect("fetch log poisoned").clone()
    }
}

impl PlantRepository for MemoryRepository {
    fn fetch(&self, filter: &PlantFilter) -> Result<Vec<PlantRecord>, RepositoryError> {
        self.fetches
            .lock()
            .expect("fetch log poisoned")
            .push(filter.clone());
        Ok(self
            .plants
            .iter()
            .filter(|plant| filter.matches(plant))
            .cloned()
            .collect())
    }

    fn get(&self, id: &PlantId) -> Result<Option<PlantRecord>, RepositoryError> {
        Ok(self.plants.iter().find(|plant| &plant.id == id).cloned())
    }

    fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        let mut categories: Vec<String> = self
            .plants
            .iter()
            .filter_map(|plant| plant.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

pub(super) struct UnavailableRepository;

impl PlantRepository for UnavailableRepository {
    fn fetch(&self, _filter: &PlantFilter) -> Result<Vec<PlantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn get(&self, _id: &PlantId) -> Result<Option<PlantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    RecommendationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::with_plants(catalog()));
    let service = RecommendationService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: RecommendationService<MemoryRepository>) -> axum::Router {
    plant_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
