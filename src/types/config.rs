use crate::error::{DevMeterError, Result};
use crate::types::scoring::{Weights, CATEGORY_NAMES};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevMeterConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub focus: Option<FocusConfig>,
    pub windows: Option<WindowsConfig>,
    pub assemble: Option<AssembleConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FocusConfig {
    pub max_areas: Option<usize>,
    #[serde(default)]
    pub extra_keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowsConfig {
    pub consistency_days: Option<u32>,
    pub recent_activity_days: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssembleConfig {
    pub max_repositories: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    pub consistency_days: u32,
    pub recent_activity_days: u32,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            consistency_days: 365,
            recent_activity_days: 90,
        }
    }
}

pub const DEFAULT_MAX_REPOSITORIES: usize = 30;

impl DevMeterConfig {
    /// Effective weights: defaults overlaid with any `[weights]` entries.
    pub fn weights(&self) -> Result<Weights> {
        let defaults = Weights::default();
        let Some(overrides) = &self.weights else {
            return Ok(defaults);
        };

        let mut values = defaults.values();
        for (slot, name) in values.iter_mut().zip(CATEGORY_NAMES) {
            if let Some(weight) = overrides.get(name) {
                *slot = *weight;
            }
        }
        Weights::new(values)
    }

    pub fn windows(&self) -> Windows {
        let defaults = Windows::default();
        match &self.windows {
            Some(windows) => Windows {
                consistency_days: windows
                    .consistency_days
                    .unwrap_or(defaults.consistency_days),
                recent_activity_days: windows
                    .recent_activity_days
                    .unwrap_or(defaults.recent_activity_days),
            },
            None => defaults,
        }
    }

    pub fn max_repositories(&self) -> usize {
        self.assemble
            .as_ref()
            .and_then(|assemble| assemble.max_repositories)
            .unwrap_or(DEFAULT_MAX_REPOSITORIES)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(weights) = &self.weights {
            let mut unknown = weights
                .keys()
                .filter(|key| !CATEGORY_NAMES.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(DevMeterError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }
        self.weights()?;

        if let Some(focus) = &self.focus {
            if focus.max_areas == Some(0) {
                return Err(DevMeterError::ConfigParse(
                    "focus.max_areas must be greater than 0".to_string(),
                ));
            }
            for (category, keywords) in &focus.extra_keywords {
                if category.trim().is_empty() {
                    return Err(DevMeterError::ConfigParse(
                        "focus.extra_keywords category names must be non-empty".to_string(),
                    ));
                }
                if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                    return Err(DevMeterError::ConfigParse(format!(
                        "focus.extra_keywords.{category} entries must be non-empty"
                    )));
                }
            }
        }

        let windows = self.windows();
        if windows.consistency_days == 0 {
            return Err(DevMeterError::ConfigParse(
                "windows.consistency_days must be greater than 0".to_string(),
            ));
        }
        if windows.recent_activity_days == 0 {
            return Err(DevMeterError::ConfigParse(
                "windows.recent_activity_days must be greater than 0".to_string(),
            ));
        }

        if self.max_repositories() == 0 {
            return Err(DevMeterError::ConfigParse(
                "assemble.max_repositories must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
