use crate::infra::load_repository;
use botanique::config::AppConfig;
use botanique::error::AppError;
use botanique::recommendations::{
    ConditionsQuery, RecommendationReport, RecommendationService, SuitabilityEngine,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Annual rainfall in millimeters
    #[arg(long)]
    pub(crate) rainfall: String,
    /// Soil type, e.g. loam, clay, sandy
    #[arg(long)]
    pub(crate) soil_type: String,
    /// Sunlight exposure, e.g. "full sun", "partial shade"
    #[arg(long)]
    pub(crate) sunlight: String,
    /// Only consider plants tagged with this function
    #[arg(long)]
    pub(crate) function: Option<String>,
    /// Only consider plants in this category
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// CSV catalog to load instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of recommendations to keep
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let RecommendArgs {
        rainfall,
        soil_type,
        sunlight,
        function,
        category,
        catalog,
        limit,
        json,
    } = args;

    let catalog = catalog.or(config.recommendations.catalog_path);
    let repository = Arc::new(load_repository(catalog.as_deref())?);
    let limit = limit
        .filter(|limit| *limit > 0)
        .unwrap_or(config.recommendations.limit);
    let service =
        RecommendationService::with_engine(repository, SuitabilityEngine::default(), limit);

    let query = ConditionsQuery {
        rainfall: Some(rainfall),
        soil_type: Some(soil_type),
        sunlight: Some(sunlight),
        function,
        category,
    };
    let report = service.recommend(&query)?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {}", err),
        }
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn render_report(report: &RecommendationReport) -> String {
    let conditions = &report.user_conditions;
    let mut out = String::new();

    out.push_str("Plant recommendations\n");
    out.push_str(&format!(
        "Conditions: {}mm rainfall, {} soil, {}",
        conditions.rainfall, conditions.soil_type, conditions.sunlight
    ));
    if let Some(function) = &conditions.function {
        out.push_str(&format!(", function {}", function));
    }
    out.push('\n');
    out.push_str(&format!(
        "Analyzed {} plant(s), showing {}\n",
        report.total_analyzed,
        report.recommendations.len()
    ));

    if report.recommendations.is_empty() {
        out.push_str("\nNo plants matched the requested filters\n");
        return out;
    }

    for (rank, entry) in report.recommendations.iter().enumerate() {
        let plant = &entry.plant;
        let name = plant.scientific_name.as_deref().unwrap_or(plant.id.0.as_str());
        out.push_str(&format!(
            "\n{}. {} [{}] score {}/100\n",
            rank + 1,
            name,
            plant.id,
            entry.suitability_score
        ));
        if !plant.common_names.is_empty() {
            out.push_str(&format!("   Also known as: {}\n", plant.common_names.join(", ")));
        }
        for reason in &entry.match_reasons {
            out.push_str(&format!("   + {}\n", reason));
        }
        for warning in &entry.warnings {
            out.push_str(&format!("   ! {}\n", warning));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use botanique::recommendations::{rank, PlantRecord, UserConditions};

    #[test]
    fn render_lists_reasons_and_warnings() {
        let mut plant = PlantRecord::new("grevillea");
        plant.scientific_name = Some("Grevillea robusta".to_string());
        plant.common_names = vec!["Silky oak".to_string()];
        plant.min_rainfall = Some(600);
        plant.max_rainfall = Some(900);
        plant.maintenance_level = Some("low".to_string());
        let conditions = UserConditions::new(500, "loam", "full sun").with_function("Shade");

        let report = rank(&[plant], &conditions, &SuitabilityEngine::default(), 10);
        let rendered = render_report(&report);

        assert!(rendered.contains("500mm rainfall, loam soil, full sun, function Shade"));
        assert!(rendered.contains("1. Grevillea robusta [grevillea] score 25/100"));
        assert!(rendered.contains("Also known as: Silky oak"));
        assert!(rendered.contains("+ Low-maintenance plant"));
        assert!(rendered.contains("! Needs supplemental irrigation (requires 600mm+)"));
    }

    #[test]
    fn render_reports_empty_results() {
        let candidates: Vec<PlantRecord> = Vec::new();
        let conditions = UserConditions::new(500, "loam", "full sun");

        let report = rank(&candidates, &conditions, &SuitabilityEngine::default(), 10);

        assert!(render_report(&report).contains("No plants matched"));
    }
}
