use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use kairos_timescale::{Granularity, TaskSpan};

/// Top-level Kairos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// View settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Scheduled items to chart.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Zoom granularity name (kebab-case, e.g. "day", "quarter-year").
    #[serde(default = "default_granularity")]
    pub granularity: String,

    /// Extra granularity units padded before the earliest item.
    #[serde(default = "default_lead_steps")]
    pub lead_steps: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            granularity: default_granularity(),
            lead_steps: default_lead_steps(),
        }
    }
}

fn default_granularity() -> String {
    "day".to_string()
}
fn default_lead_steps() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Pixel width of one tick column.
    #[serde(default = "default_tick_width")]
    pub tick_width: f64,

    /// Reversed (right-to-left) reading direction.
    #[serde(default)]
    pub rtl: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tick_width: default_tick_width(),
            rtl: false,
        }
    }
}

fn default_tick_width() -> f64 {
    60.0
}

/// One scheduled item; timestamps stay strings until parsed at the boundary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<KairosConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}

impl KairosConfig {
    /// Parses the configured items into task spans.
    pub fn spans(&self) -> Result<Vec<TaskSpan>> {
        self.items
            .iter()
            .map(|item| {
                let start = item
                    .start
                    .parse()
                    .with_context(|| format!("item {:?}: invalid start timestamp", item.name))?;
                let end = item
                    .end
                    .parse()
                    .with_context(|| format!("item {:?}: invalid end timestamp", item.name))?;
                Ok(TaskSpan::new(start, end))
            })
            .collect()
    }

    /// Resolves the view granularity, preferring a CLI override.
    pub fn granularity(&self, cli_override: Option<&str>) -> Result<Granularity> {
        let name = cli_override.unwrap_or(self.view.granularity.as_str());
        name.parse()
            .with_context(|| format!("resolving granularity {name:?}"))
    }
}
