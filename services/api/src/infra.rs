use botanique::recommendations::{
    same_label, CatalogImportError, PlantCatalogImporter, PlantFilter, PlantId, PlantRecord,
    PlantRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Seed catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/plants.csv");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only catalog held in memory, preserving file order.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryPlantRepository {
    plants: Arc<Vec<PlantRecord>>,
}

impl InMemoryPlantRepository {
    pub(crate) fn new(plants: Vec<PlantRecord>) -> Self {
        Self {
            plants: Arc::new(plants),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.plants.len()
    }
}

impl PlantRepository for InMemoryPlantRepository {
    fn fetch(&self, filter: &PlantFilter) -> Result<Vec<PlantRecord>, RepositoryError> {
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
        let mut categories: Vec<String> = Vec::new();
        for category in self.plants.iter().filter_map(|plant| plant.category.as_ref()) {
            if !categories.iter().any(|known| same_label(known, category)) {
                categories.push(category.clone());
            }
        }
        Ok(categories)
    }
}

/// Loads the catalog from `path`, or the bundled seed catalog when no path is set.
pub(crate) fn load_repository(
    path: Option<&Path>,
) -> Result<InMemoryPlantRepository, CatalogImportError> {
    let plants = match path {
        Some(path) => {
            let plants = PlantCatalogImporter::from_path(path)?;
            info!(path = %path.display(), plants = plants.len(), "plant catalog loaded");
            plants
        }
        None => {
            let plants = PlantCatalogImporter::from_reader(Cursor::new(BUNDLED_CATALOG))?;
            info!(plants = plants.len(), "bundled plant catalog loaded");
            plants
        }
    };

    Ok(InMemoryPlantRepository::new(plants))
}
