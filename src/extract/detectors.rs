use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::ParsedDetector;
use crate::section;

use super::{DETECTORS_HEADING, EXTERNAL_AREAS_HEADING};

pub fn locate_block(text: &str) -> Result<Option<&str>> {
    let required = Regex::new(r"(?i)location\s+tested")
        .context("failed to compile detectors content regex")?;
    Ok(section::locate(
        text,
        DETECTORS_HEADING,
        EXTERNAL_AREAS_HEADING,
        Some(&required),
    ))
}

/// Parses detector rows. A type-leading row names the detector type and sets
/// the type context for the continuation rows below it; a continuation row
/// is location plus a terminal Yes/No and is only valid while a type context
/// exists. Iteration stops at the `General detector details` free-text tail.
pub fn extract_detectors(text: &str) -> Result<Vec<ParsedDetector>> {
    let type_row_regex = Regex::new(
        r"(?i)^(?P<kind>co detector|smoke alarm)\s+(?P<location>.+?)\s+(?P<tested>yes|no)$",
    )
    .context("failed to compile detector type row regex")?;
    let continuation_regex = Regex::new(r"(?i)^(?P<location>.+?)\s+(?P<tested>yes|no)$")
        .context("failed to compile detector continuation regex")?;
    let footer_regex =
        Regex::new(r"(?i)^page \d+ of \d+$").context("failed to compile page footer regex")?;

    let Some(block) = locate_block(text)? else {
        debug!("detectors section not found");
        return Ok(Vec::new());
    };

    let mut detectors = Vec::new();
    let mut current_type: Option<String> = None;

    for line in block.lines() {
        let line = line.trim();
        if line.to_ascii_lowercase().contains("general detector details") {
            break;
        }
        if line.is_empty() || is_detectors_header(line) || footer_regex.is_match(line) {
            continue;
        }

        if let Some(captures) = type_row_regex.captures(line) {
            let kind = canonical_type(&captures["kind"]);
            detectors.push(ParsedDetector {
                name: kind.clone(),
                location: Some(captures["location"].trim().to_string()),
                note: None,
                tested: Some(captures["tested"].to_ascii_uppercase()),
            });
            current_type = Some(kind);
            continue;
        }

        if let Some(captures) = continuation_regex.captures(line) {
            let Some(kind) = current_type.clone() else {
                debug!(line, "continuation row before any detector type row");
                continue;
            };
            detectors.push(ParsedDetector {
                name: kind,
                location: Some(captures["location"].trim().to_string()),
                note: None,
                tested: Some(captures["tested"].to_ascii_uppercase()),
            });
            continue;
        }

        debug!(line, "detector line matched neither row shape");
    }

    Ok(detectors)
}

fn is_detectors_header(line: &str) -> bool {
    let lowered = line.to_ascii_lowercase();
    lowered.contains("location") && lowered.contains("tested")
}

fn canonical_type(token: &str) -> String {
    if token.eq_ignore_ascii_case("co detector") {
        "Co detector".to_string()
    } else {
        "Smoke alarm".to_string()
    }
}
