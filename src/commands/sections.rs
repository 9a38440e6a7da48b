use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::SectionsArgs;
use crate::extract::{self, INSPECTION_AREAS_HEADING};
use crate::normalize::normalize_text;
use crate::section;

/// Diagnostic: reports which template sections the locator can resolve in a
/// report text, without producing any output document.
pub fn run(args: SectionsArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let text = normalize_text(&raw)?;

    info!(input = %args.input.display(), chars = text.len(), "section scan");

    report_slice("report_summary", extract::summary::locate_block(&text));
    report_slice("meters", extract::meters::locate_block(&text)?);
    report_slice("keys", extract::keys::locate_block(&text)?);
    report_slice("detectors", extract::detectors::locate_block(&text)?);
    report_slice("external_areas", extract::external::locate_block(&text));
    report_slice(
        "inspection_areas",
        section::slice_after(&text, INSPECTION_AREAS_HEADING),
    );

    Ok(())
}

fn report_slice(name: &str, slice: Option<&str>) {
    match slice {
        Some(content) => info!(
            section = name,
            chars = content.trim().len(),
            lines = content.trim().lines().count(),
            "section located"
        ),
        None => warn!(section = name, "section not found"),
    }
}
