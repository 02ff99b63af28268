//! Catalog file handling for saving and loading activity/tier configurations.
//!
//! A catalog is static configuration: the selectable activities, the ordered
//! unlock tiers, and optional named presets. It is built once at startup,
//! either from the built-in default or from a JSON file, and never mutated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CalcError;
use crate::types::{Activity, Preset, UnlockTier};

/// Name of the preset bundled with the default catalog
pub const EXAMPLE_PRESET: &str = "example";

/// Activity and tier configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub activities: Vec<Activity>,
    /// Ascending by threshold
    pub tiers: Vec<UnlockTier>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            activities: vec![
                Activity::new(
                    "guided_prompts",
                    "Guided conversation prompts",
                    "Short prompts for 10–15 minute calls to sustain conversation.",
                    10,
                ),
                Activity::new(
                    "coparenting",
                    "Co-parenting exercise",
                    "Shared planning routines with a fellow partner/ caregiver.",
                    15,
                ),
                Activity::new(
                    "journaling",
                    "Shared journaling",
                    "Asynchronous entries that build continuity between contacts.",
                    12,
                ),
                Activity::new(
                    "goal_setting",
                    "Family Games",
                    "Play games together during visits or calls to foster connection and create shared memories.",
                    10,
                ),
                Activity::new(
                    "structured_checkin",
                    "Structured check-in",
                    "Repair-focused: what went well, what was hard, one request for next time.",
                    8,
                ),
                Activity::new(
                    "reflection",
                    "Reflection module",
                    "Watch a short clip and answer reflection questions.",
                    10,
                ),
            ],
            tiers: vec![
                UnlockTier::new(20, "Additional call minutes (+10 min/week)"),
                UnlockTier::new(40, "Extended messaging access (+1 day/week)"),
                UnlockTier::new(60, "Video visitation privilege (+1/month)"),
                UnlockTier::new(80, "Scheduling flexibility (priority slot request)"),
            ],
            presets: vec![Preset {
                name: EXAMPLE_PRESET.to_string(),
                description: "Example bundle worth 40 credits (unlocks the first two tiers)"
                    .to_string(),
                activities: vec![
                    "guided_prompts".to_string(),
                    "journaling".to_string(),
                    "structured_checkin".to_string(),
                    "goal_setting".to_string(),
                ],
            }],
        }
    }
}

impl Catalog {
    /// Save catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Load and validate in one step
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog = Self::load_from_file(&path)?;
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog {:?}", path.as_ref()))?;
        Ok(catalog)
    }

    /// Validate the catalog
    ///
    /// Equal consecutive thresholds are accepted; descending ones are not.
    pub fn validate(&self) -> std::result::Result<(), CalcError> {
        if self.activities.is_empty() {
            return Err(CalcError::catalog("At least one activity must be defined"));
        }

        let mut ids = HashSet::new();
        for activity in &self.activities {
            let id = activity.id.trim();
            if id.is_empty() {
                return Err(CalcError::catalog("Activity id cannot be empty"));
            }
            if id != activity.id {
                return Err(CalcError::catalog(format!(
                    "Activity id {:?} has surrounding whitespace",
                    activity.id
                )));
            }
            if activity.title.trim().is_empty() {
                return Err(CalcError::catalog(format!(
                    "Activity {} must have a title",
                    activity.id
                )));
            }
            if !ids.insert(id) {
                return Err(CalcError::catalog(format!("Duplicate activity id: {}", id)));
            }
        }

        if self.tiers.is_empty() {
            return Err(CalcError::catalog("At least one unlock tier must be defined"));
        }
        for tier in &self.tiers {
            if tier.label.trim().is_empty() {
                return Err(CalcError::catalog(format!(
                    "Tier at {} credits must have a label",
                    tier.threshold
                )));
            }
        }
        if let Some(pair) = self
            .tiers
            .windows(2)
            .find(|pair| pair[1].threshold < pair[0].threshold)
        {
            return Err(CalcError::catalog(format!(
                "Tier thresholds must be ascending: {} follows {}",
                pair[1].threshold, pair[0].threshold
            )));
        }

        let mut names = HashSet::new();
        for preset in &self.presets {
            if !names.insert(preset.name.as_str()) {
                return Err(CalcError::catalog(format!(
                    "Duplicate preset name: {}",
                    preset.name
                )));
            }
            if let Some(unknown) = preset.activities.iter().find(|id| !ids.contains(id.as_str())) {
                return Err(CalcError::catalog(format!(
                    "Preset {} references unknown activity: {}",
                    preset.name, unknown
                )));
            }
        }

        Ok(())
    }

    /// Look up an activity by id
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Sum of every activity's points, i.e. the highest reachable total
    pub fn max_total(&self) -> u64 {
        self.activities.iter().map(|a| u64::from(a.points)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.activities.len(), 6);
        assert_eq!(catalog.tiers.len(), 4);
    }

    #[test]
    fn test_default_catalog_max_total() {
        let catalog = Catalog::default();
        assert_eq!(catalog.max_total(), 65);
        // Last tier is out of reach with the default activities
        assert!(catalog.tiers.last().is_some_and(|t| u64::from(t.threshold) > catalog.max_total()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::default();
        catalog
            .activities
            .push(Activity::new("journaling", "Again", "", 1));
        let err = catalog.validate().expect_err("duplicate id");
        assert!(err.to_string().contains("Duplicate activity id"));
    }

    #[test]
    fn test_descending_thresholds_rejected() {
        let mut catalog = Catalog::default();
        catalog.tiers.swap(0, 1);
        let err = catalog.validate().expect_err("descending tiers");
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn test_equal_thresholds_accepted() {
        let mut catalog = Catalog::default();
        catalog.tiers.insert(1, UnlockTier::new(20, "Bonus at the same level"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_preset_with_unknown_activity_rejected() {
        let mut catalog = Catalog::default();
        catalog.presets[0].activities.push("stale_id".to_string());
        let err = catalog.validate().expect_err("unknown preset member");
        assert!(matches!(err, CalcError::Catalog(_)));
    }

    #[test]
    fn test_empty_tiers_rejected() {
        let mut catalog = Catalog::default();
        catalog.tiers.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::default();
        assert_eq!(catalog.activity("coparenting").map(|a| a.points), Some(15));
        assert!(catalog.activity("missing").is_none());
        assert!(catalog.preset(EXAMPLE_PRESET).is_some());
    }
}
