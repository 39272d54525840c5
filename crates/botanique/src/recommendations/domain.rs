use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque catalog key for a plant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub String);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Candidate plant as supplied by the catalog.
///
/// Every attribute other than the id is optional. An absent attribute switches
/// off the scoring rule that reads it instead of failing the evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: PlantId,
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub common_names: Vec<String>,
    /// Name of the category the plant belongs to.
    pub category: Option<String>,
    /// Annual rainfall bounds in millimeters.
    pub min_rainfall: Option<i32>,
    pub max_rainfall: Option<i32>,
    pub sunlight: Option<String>,
    #[serde(default)]
    pub soil_types: Vec<String>,
    pub maintenance_level: Option<String>,
    pub native_to_region: Option<bool>,
    #[serde(default)]
    pub functions: Vec<String>,
    pub water_needs: Option<String>,
    pub description: Option<String>,
    pub height: Option<String>,
    pub image_url: Option<String>,
}

impl PlantRecord {
    /// Record carrying only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: PlantId(id.into()),
            ..Self::default()
        }
    }

    pub fn has_function(&self, tag: &str) -> bool {
        self.functions
            .iter()
            .any(|function| same_label(function, tag))
    }

    pub fn in_category(&self, name: &str) -> bool {
        self.category
            .as_deref()
            .map(|category| same_label(category, name))
            .unwrap_or(false)
    }

    pub fn summary(&self) -> PlantSummary {
        PlantSummary {
            id: self.id.clone(),
            scientific_name: self.scientific_name.clone(),
            common_names: self.common_names.clone(),
            category: self.category.clone(),
            sunlight: self.sunlight.clone(),
            maintenance_level: self.maintenance_level.clone(),
            native_to_region: self.native_to_region,
            description: self.description.clone(),
            height: self.height.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Compares two catalog labels ignoring surrounding whitespace and letter case.
///
/// Case folding is Unicode-aware, so `"Mürbe"` and `"MÜRBE"` match.
pub fn same_label(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Display projection returned alongside a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: PlantId,
    pub scientific_name: Option<String>,
    pub common_names: Vec<String>,
    pub category: Option<String>,
    pub sunlight: Option<String>,
    pub maintenance_level: Option<String>,
    pub native_to_region: Option<bool>,
    pub description: Option<String>,
    pub height: Option<String>,
    pub image_url: Option<String>,
}

/// Growing conditions a user asks recommendations for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConditions {
    /// Annual rainfall in millimeters.
    pub rainfall: i32,
    pub soil_type: String,
    pub sunlight: String,
    pub function: Option<String>,
}

impl UserConditions {
    pub fn new(rainfall: i32, soil_type: impl Into<String>, sunlight: impl Into<String>) -> Self {
        Self {
            rainfall,
            soil_type: soil_type.into(),
            sunlight: sunlight.into(),
            function: None,
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// Raw recommendation query as it arrives at the HTTP or CLI boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsQuery {
    #[serde(default)]
    pub rainfall: Option<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub sunlight: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ConditionsQuery {
    /// Checks the three required fields and returns trimmed conditions.
    ///
    /// Blank values count as missing. All missing fields are reported together,
    /// in `rainfall`, `soil_type`, `sunlight` order.
    pub fn validate(&self) -> Result<UserConditions, ConditionsError> {
        let rainfall = non_blank(&self.rainfall);
        let soil_type = non_blank(&self.soil_type);
        let sunlight = non_blank(&self.sunlight);

        let mut missing = Vec::new();
        if rainfall.is_none() {
            missing.push("rainfall");
        }
        if soil_type.is_none() {
            missing.push("soil_type");
        }
        if sunlight.is_none() {
            missing.push("sunlight");
        }

        match (rainfall, soil_type, sunlight) {
            (Some(rainfall), Some(soil_type), Some(sunlight)) => {
                let rainfall = rainfall
                    .parse::<i32>()
                    .map_err(|_| ConditionsError::InvalidRainfall(rainfall.to_string()))?;
                Ok(UserConditions {
                    rainfall,
                    soil_type: soil_type.to_string(),
                    sunlight: sunlight.to_string(),
                    function: self.function_tag(),
                })
            }
            _ => Err(ConditionsError::Missing(missing)),
        }
    }

    pub fn function_tag(&self) -> Option<String> {
        non_blank(&self.function).map(str::to_string)
    }

    pub fn category_name(&self) -> Option<String> {
        non_blank(&self.category).map(str::to_string)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Rejection raised before any candidate is scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionsError {
    #[error("missing required parameters: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("rainfall must be a whole number of millimeters (got '{0}')")]
    InvalidRainfall(String),
}

impl ConditionsError {
    /// Names of the offending query parameters.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ConditionsError::Missing(fields) => fields.clone(),
            ConditionsError::InvalidRainfall(_) => vec!["rainfall"],
        }
    }
}
