//! tiercalc Library
//!
//! Credit accumulation and tier unlock engine, plus the catalog, selection
//! store, and terminal UI built around it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod engine;
pub mod error;
pub mod report;
pub mod selection;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, EXAMPLE_PRESET};
pub use error::CalcError;
pub use selection::{Selection, SelectionStore};
pub use session::Calculator;
pub use types::{Activity, OutputFormat, Points, Preset, Progress, Summary, TierStatus, UnlockTier};

// Tier engine
pub use engine::tiers::{compute_progress, compute_total, get_next_unlock, get_unlocked, summarize};
