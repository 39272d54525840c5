use super::domain::{PlantId, PlantRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

const LIST_SEPARATOR: char = ';';

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRainfallRange { id: PlantId, min: i32, max: i32 },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read plant catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid plant catalog CSV data: {}", err),
            CatalogImportError::InvalidRainfallRange { id, min, max } => write!(
                f,
                "plant '{}' has min_rainfall {} above max_rainfall {}",
                id, min, max
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRainfallRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads plant records from a CSV export of the catalog.
///
/// List columns (`common_names`, `soil_types`, `functions`) are `;`-separated.
/// Empty cells become absent attributes.
pub struct PlantCatalogImporter;

impl PlantCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PlantRecord>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PlantRecord>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut plants = Vec::new();

        for row in csv_reader.deserialize::<CatalogRow>() {
            plants.push(row?.into_record()?);
        }

        Ok(plants)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scientific_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    common_names: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(default)]
    min_rainfall: Option<i32>,
    #[serde(default)]
    max_rainfall: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sunlight: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    soil_types: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maintenance_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    native_to_region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    functions: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    water_needs: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    height: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
}

impl CatalogRow {
    fn into_record(self) -> Result<PlantRecord, CatalogImportError> {
        let id = PlantId(self.id);

        if let (Some(min), Some(max)) = (self.min_rainfall, self.max_rainfall) {
            if min > max {
                return Err(CatalogImportError::InvalidRainfallRange { id, min, max });
            }
        }

        Ok(PlantRecord {
            id,
            scientific_name: self.scientific_name,
            common_names: split_list(self.common_names.as_deref()),
            category: self.category,
            min_rainfall: self.min_rainfall,
            max_rainfall: self.max_rainfall,
            sunlight: self.sunlight,
            soil_types: split_list(self.soil_types.as_deref()),
            maintenance_level: self.maintenance_level,
            native_to_region: self.native_to_region.as_deref().and_then(parse_flag),
            functions: split_list(self.functions.as_deref()),
            water_needs: self.water_needs,
            description: self.description,
            height: self.height,
            image_url: self.image_url,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
