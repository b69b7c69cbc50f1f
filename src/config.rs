use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::session::SurveyDate;

/// A junction compared in the report and chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionConfig {
    /// Exact junction name as recorded in the survey file.
    pub name: String,
    /// Shorter name used for chart matching and the legend.
    pub label: String,
    /// Bar color as `[r, g, b]`.
    pub color: [u8; 3],
}

/// Runtime settings, optionally loaded from a JSON file:
///
/// ```json
/// {
///   "data_dir": "surveys",
///   "results_path": "results.txt",
///   "primary": { "name": "Elm Avenue/Rabbit Road", "label": "Elm Avenue", "color": [0, 128, 0] }
/// }
/// ```
///
/// Keys left out keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    pub data_dir: PathBuf,
    pub results_path: PathBuf,
    pub chart_dir: PathBuf,
    pub primary: JunctionConfig,
    pub secondary: JunctionConfig,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        AnalyserConfig {
            data_dir: PathBuf::from("."),
            results_path: PathBuf::from("results.txt"),
            chart_dir: PathBuf::from("."),
            primary: JunctionConfig {
                name: "Elm Avenue/Rabbit Road".to_string(),
                label: "Elm Avenue".to_string(),
                color: [0, 128, 0],
            },
            secondary: JunctionConfig {
                name: "Hanley Highway/Westway".to_string(),
                label: "Hanley Highway".to_string(),
                color: [255, 0, 0],
            },
        }
    }
}

impl AnalyserConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Survey file for `date`, e.g. `traffic_data15062024.csv`.
    pub fn data_file_for(&self, date: &SurveyDate) -> PathBuf {
        self.data_dir.join(format!("traffic_data{}.csv", date.compact()))
    }

    pub fn chart_file_for(&self, date: &SurveyDate) -> PathBuf {
        self.chart_dir.join(format!("histogram_{}.svg", date.compact()))
    }
}
