use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::ParsedKey;
use crate::section;

use super::{DETECTORS_HEADING, KEYS_HEADING};

const KEY_NAME: &str = "General Key";

pub fn locate_block(text: &str) -> Result<Option<&str>> {
    let required =
        Regex::new(r"(?i)general key").context("failed to compile keys content regex")?;
    Ok(section::locate(
        text,
        KEYS_HEADING,
        DETECTORS_HEADING,
        Some(&required),
    ))
}

/// The keys section is free text under a `General key` header line. The
/// header is stripped and whatever remains becomes the note of a single
/// synthetic aggregate record; an empty remainder emits no record at all.
pub fn extract_keys(text: &str) -> Result<Vec<ParsedKey>> {
    let header_regex =
        Regex::new(r"(?i)general key").context("failed to compile keys header regex")?;
    let footer_regex =
        Regex::new(r"(?i)^page \d+ of \d+$").context("failed to compile page footer regex")?;

    let Some(block) = locate_block(text)? else {
        debug!("keys section not found");
        return Ok(Vec::new());
    };

    let note = block
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !header_regex.is_match(line) && !footer_regex.is_match(line)
        })
        .collect::<Vec<&str>>()
        .join(" ");

    if note.is_empty() {
        debug!("keys section empty after stripping header");
        return Ok(Vec::new());
    }

    Ok(vec![ParsedKey {
        name: KEY_NAME.to_string(),
        description: None,
        note: Some(note),
        no_of_keys: None,
    }])
}
