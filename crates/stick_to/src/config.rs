//! Configuration read from the host element's attributes.
//!
//! Attribute names: `stick-to` (also `ng-stick-to` or `primaryLimit`) for the
//! primary limit, `limit` (also `secondaryLimit`) for the secondary limit,
//! `name` (registry key) and `breakpoint`. A `data-` prefix is accepted.

use crate::mode::parse_breakpoint;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StickToConfig {
    #[serde(rename = "stick-to", alias = "ng-stick-to", alias = "primaryLimit")]
    pub primary_limit: Option<String>,
    #[serde(rename = "limit", alias = "secondaryLimit")]
    pub secondary_limit: Option<String>,
    pub name: Option<String>,
    pub breakpoint: Option<String>,
}

impl StickToConfig {
    /// Collect the configuration from attribute pairs. Unrelated attributes
    /// are ignored; later duplicates win.
    pub fn from_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            let name = name.to_ascii_lowercase();
            let slot = match name.strip_prefix("data-").unwrap_or(&name) {
                "stick-to" | "ng-stick-to" | "primarylimit" => &mut config.primary_limit,
                "limit" | "secondarylimit" => &mut config.secondary_limit,
                "name" => &mut config.name,
                "breakpoint" => &mut config.breakpoint,
                _ => continue,
            };
            *slot = Some(value.clone());
        }
        config
    }

    /// Parse a JSON object using the attribute names as keys.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid stick-to configuration")
    }

    /// Breakpoint in pixels, or `None` when absent or not numeric.
    pub fn breakpoint_px(&self) -> Option<f64> {
        parse_breakpoint(self.breakpoint.as_deref())
    }

    /// Registry key, if a non-blank name was given.
    pub fn registry_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}
