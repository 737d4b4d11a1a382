use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::Weighting;

/// Chart rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "ChartConfig::default_height")]
    pub height: u32,
    /// Sector fill opacity.
    #[serde(default = "ChartConfig::default_opacity")]
    pub opacity: f64,
}

impl ChartConfig {
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        1200
    }
    fn default_opacity() -> f64 {
        0.8
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            opacity: Self::default_opacity(),
        }
    }
}

/// A named subset of the roster, selected by last name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Artifact file slug (`<name>-starburst.png`).
    pub name: String,
    /// Chart title prefix.
    pub title: String,
    pub last_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub weighting: Weighting,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Working groups charted in addition to the collective.
    #[serde(default = "AppConfig::default_groups")]
    pub groups: Vec<GroupConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::default(),
            chart: ChartConfig::default(),
            groups: Self::default_groups(),
        }
    }
}

impl AppConfig {
    fn default_groups() -> Vec<GroupConfig> {
        let group = |name: &str, title: &str, last_names: &[&str]| GroupConfig {
            name: name.to_string(),
            title: title.to_string(),
            last_names: last_names.iter().map(|s| s.to_string()).collect(),
        };
        vec![
            group(
                "career",
                "CAREER",
                &["Dringenberg", "Grifski", "Wallace", "Delpech"],
            ),
            group(
                "ehr",
                "EHR Core",
                &["Dringenberg", "Braaten", "Li", "Kramer"],
            ),
            group("rfe", "RFE", &["Dringenberg", "Leonard", "Guanes"]),
            group("gta", "GTA", &["Guanes", "Leonard", "Grifski", "Opoku"]),
        ]
    }

    /// Loads the config, or falls back to defaults. A missing file is not
    /// an error: defaults are written there so the groups are editable on
    /// the next run.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        tracing::warn!(
                            "failed to parse config {}: {err}. Using defaults.",
                            path.display()
                        );
                    }
                },
                Err(err) => {
                    tracing::warn!(
                        "failed to read config {}: {err}. Using defaults.",
                        path.display()
                    );
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path, text) {
                    tracing::warn!(
                        "failed to write default config to {}: {err}",
                        path.display()
                    );
                }
            }
            Err(err) => {
                tracing::warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "starburst_config_{}_{nanos}_{name}",
            std::process::id()
        ))
    }

    #[test]
    fn load_or_default_writes_defaults() {
        let path = unique_path("defaults.toml");
        let cfg = AppConfig::load_or_default(&path);

        assert_eq!(cfg.weighting, Weighting::Reciprocal);
        assert_eq!(cfg.chart.width, 1200);
        assert_eq!(cfg.groups.len(), 4);
        assert_eq!(cfg.groups[0].name, "career");

        let contents = fs::read_to_string(&path).expect("defaults should be written");
        assert!(contents.contains("weighting = \"reciprocal\""));
        assert!(contents.contains("[[groups]]"));
        assert!(contents.contains("Dringenberg"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        let custom = AppConfig {
            weighting: Weighting::Uniform,
            chart: ChartConfig {
                width: 800,
                height: 600,
                opacity: 0.5,
            },
            groups: vec![GroupConfig {
                name: "panel".to_string(),
                title: "Review Panel".to_string(),
                last_names: vec!["Lovelace".to_string(), "Turing".to_string()],
            }],
        };
        fs::write(&path, toml::to_string_pretty(&custom).unwrap()).unwrap();

        let cfg = AppConfig::load_or_default(&path);
        assert_eq!(cfg.weighting, Weighting::Uniform);
        assert_eq!(cfg.chart.width, 800);
        assert_eq!(cfg.chart.height, 600);
        assert_eq!(cfg.chart.opacity, 0.5);
        assert_eq!(cfg.groups.len(), 1);
        assert_eq!(cfg.groups[0].title, "Review Panel");
        assert_eq!(cfg.groups[0].last_names, ["Lovelace", "Turing"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let path = unique_path("partial.toml");
        fs::write(&path, "weighting = \"uniform\"\n").unwrap();

        let cfg = AppConfig::load_or_default(&path);
        assert_eq!(cfg.weighting, Weighting::Uniform);
        assert_eq!(cfg.chart.width, 1200);
        assert_eq!(cfg.groups.len(), 4);

        let _ = fs::remove_file(&path);
    }
}
