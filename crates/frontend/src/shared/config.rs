//! Display and layout settings of the order screens.
//!
//! The host page may embed overrides as TOML; every key is optional and
//! falls back to the `Default` values below.

use anyhow::Context;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for dates without time (history entries)
    pub date_format: String,
    /// strftime pattern for the order creation caption
    pub datetime_format: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// CSS `grid-template-columns` of the two-column page body
    pub grid_columns: String,
    /// Width of the creation date skeleton
    pub skeleton_width: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%d.%m.%Y".to_string(),
            datetime_format: "%d.%m.%Y %H:%M".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_columns: "9fr 4fr".to_string(),
            skeleton_width: "10em".to_string(),
        }
    }
}

/// Parse configuration overrides; missing keys keep their defaults
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match overrides {
        Some(source) if !source.trim().is_empty() => {
            log::info!("Loading dashboard config from page");
            toml::from_str(source).context("invalid dashboard config")
        }
        _ => {
            log::info!("Using default dashboard configuration");
            Ok(DashboardConfig::default())
        }
    }
}

/// Config provided by the application, or the defaults
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}
