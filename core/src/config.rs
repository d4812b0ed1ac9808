use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::distribution::DEFAULT_BIN_SIZE;
use crate::error::{from_json_str, AnalyticsError, Result};
use crate::mmp::DEFAULT_MMP_DURATIONS;

/// Miljøvariabler for backend-URL, i prioritert rekkefølge.
pub const API_URL_ENV_VARS: [&str; 2] = ["API_URL", "NEXT_PUBLIC_API_URL"];

/// Innstillinger for rapport/CLI. Analysefunksjonene leser aldri denne selv;
/// verdiene sendes inn eksplisitt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Backend-URL for laget som henter records/vekt (ikke brukt av analysen)
    pub api_url: Option<String>,
    pub bin_size: u32,
    pub mmp_durations: Vec<u32>,
    pub athlete_weight_kg: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            bin_size: DEFAULT_BIN_SIZE,
            mmp_durations: DEFAULT_MMP_DURATIONS.to_vec(),
            athlete_weight_kg: None,
        }
    }
}

impl AnalysisConfig {
    /// Overstyr `api_url` fra miljøet (API_URL, deretter NEXT_PUBLIC_API_URL).
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Som `with_env_overrides`, men med injisert oppslag (testbar uten global env).
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = API_URL_ENV_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()));
        if let Some(url) = from_env {
            self.api_url = Some(url);
        }
        self
    }

    pub fn require_api_url(&self) -> Result<&str> {
        self.api_url.as_deref().ok_or_else(|| {
            AnalyticsError::Config("API URL not configured (set API_URL or NEXT_PUBLIC_API_URL)".into())
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.bin_size == 0 {
            return Err(AnalyticsError::Config("bin_size must be positive".into()));
        }
        if self.mmp_durations.iter().any(|d| *d == 0) {
            return Err(AnalyticsError::Config("mmp_durations must be positive".into()));
        }
        if let Some(w) = self.athlete_weight_kg {
            if !(w.is_finite() && w > 0.0) {
                return Err(AnalyticsError::Config(format!("invalid athlete_weight_kg: {w}")));
            }
        }
        Ok(())
    }
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = from_json_str(&contents, "AnalysisConfig")?;
        info!("config lastet fra {} (bin_size={})", path.display(), config.bin_size);
        Ok(config)
    } else {
        warn!("fant ikke config på {}, bruker default", path.display());
        Ok(AnalysisConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(config: &AnalysisConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    info!("config lagret til {}", path.display());
    Ok(())
}
