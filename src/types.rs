//! Catalog and result types for the credit calculator
//!
//! Plain data shared by the engine, the catalog loader, and the UI. Catalog
//! entries are immutable once loaded; results are produced fresh on every
//! recompute.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Credit amount. Unsigned so a catalog can never carry negative points.
pub type Points = u32;

/// A selectable activity with a fixed credit value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique key referenced by selections and presets
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Credits granted when selected
    pub points: Points,
}

impl Activity {
    pub fn new(id: &str, title: &str, description: &str, points: Points) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            points,
        }
    }
}

/// A privilege granted once the total reaches `threshold`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockTier {
    pub threshold: Points,
    pub label: String,
}

impl UnlockTier {
    pub fn new(threshold: Points, label: &str) -> Self {
        Self {
            threshold,
            label: label.to_string(),
        }
    }
}

/// A named bundle of activity ids that can be loaded in one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub activities: Vec<String>,
}

/// Position of a total between the last reached threshold and the next one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Always within `[0, 100]`
    pub percent: f64,
    /// Credits still needed for the next tier; 0 when maxed out
    pub points_remaining: Points,
    /// Every tier has been reached
    pub maxed_out: bool,
}

impl Progress {
    /// Progress value shown once every tier is reached
    pub const MAXED: Progress = Progress {
        percent: 100.0,
        points_remaining: 0,
        maxed_out: true,
    };

    /// Percent rounded down for integer gauges
    pub fn percent_u16(&self) -> u16 {
        self.percent.clamp(0.0, 100.0).floor() as u16
    }
}

/// Everything the presentation layer needs after a recompute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Points,
    pub unlocked: Vec<UnlockTier>,
    pub next: Option<UnlockTier>,
    pub progress: Progress,
}

/// Status of a single tier relative to a total, used by the tier ladder view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TierStatus {
    Unlocked,
    Next,
    Locked,
}

/// Output format for headless commands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
