//! Summary text shared by the terminal UI and the headless commands

use crate::catalog::Catalog;
use crate::error::Result;
use crate::selection::Selection;
use crate::types::{Activity, OutputFormat, Summary};

/// Shown in place of the unlock list when nothing is unlocked
pub const NONE_YET: &str = "None yet.";

/// Shown in place of the next-unlock note once every tier is reached
pub const ALL_UNLOCKED: &str =
    "All prototype privileges unlocked. (In practice, add additional tiers or rotate benefits.)";

/// One `"{threshold}+: {label}"` line per unlock, or [`NONE_YET`].
pub fn unlocked_lines(summary: &Summary) -> Vec<String> {
    if summary.unlocked.is_empty() {
        return vec![NONE_YET.to_string()];
    }
    summary
        .unlocked
        .iter()
        .map(|tier| format!("{}+: {}", tier.threshold, tier.label))
        .collect()
}

/// Sentence describing the next unlock and how far away it is
pub fn next_unlock_note(summary: &Summary) -> String {
    match &summary.next {
        Some(next) => format!(
            "Next unlock at {} credits: {} (need {} more).",
            next.threshold, next.label, summary.progress.points_remaining
        ),
        None => ALL_UNLOCKED.to_string(),
    }
}

pub fn activity_points_label(activity: &Activity) -> String {
    format!("{} credits", activity.points)
}

/// Plain-text report for the `summary` command
pub fn render_text(catalog: &Catalog, selection: &Selection, summary: &Summary) -> String {
    let mut out = Vec::new();

    out.push("Selected activities:".to_string());
    if selection.is_empty() {
        out.push(format!("  {}", NONE_YET));
    }
    for id in selection.iter() {
        match catalog.activity(id) {
            Some(activity) => out.push(format!(
                "  [x] {} ({})",
                activity.title,
                activity_points_label(activity)
            )),
            None => out.push(format!("  [?] {} (not in catalog, 0 credits)", id)),
        }
    }
    out.push(String::new());

    out.push(format!("Total credits: {}", summary.total));
    out.push(String::new());

    out.push("Unlocked:".to_string());
    out.extend(unlocked_lines(summary).into_iter().map(|l| format!("  {}", l)));
    out.push(String::new());

    out.push(format!(
        "Progress: {} {:.0}%",
        progress_bar(summary.progress.percent, 20),
        summary.progress.percent
    ));
    out.push(next_unlock_note(summary));

    out.join("\n")
}

/// Render a summary in the requested format
pub fn render(
    catalog: &Catalog,
    selection: &Selection,
    summary: &Summary,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(catalog, selection, summary)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Catalog listing for the `catalog` command
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = vec!["Activities:".to_string()];
    for activity in &catalog.activities {
        out.push(format!(
            "  {:<20} {:>4}  {}",
            activity.id, activity.points, activity.title
        ));
    }
    out.push(format!("  Maximum reachable: {} credits", catalog.max_total()));
    out.push(String::new());
    out.push("Unlock tiers:".to_string());
    for tier in &catalog.tiers {
        out.push(format!("  {:>4}+  {}", tier.threshold, tier.label));
    }
    if !catalog.presets.is_empty() {
        out.push(String::new());
        out.push("Presets:".to_string());
        for preset in &catalog.presets {
            out.push(format!(
                "  {:<20} {}",
                preset.name,
                preset.activities.join(", ")
            ));
        }
    }
    out.join("\n")
}

/// Fixed-width text meter, e.g. `[#####---------------]`
fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
