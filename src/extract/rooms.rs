use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::{ParsedRoom, Rating};
use crate::section;

use super::INSPECTION_AREAS_HEADING;

/// Splits the inspection areas region into per-room chunks at `N: <name>`
/// boundary lines and extracts ratings, description and defects from each.
/// The description is only the text strictly between the `Description` and
/// `Defects` labels; inline prose is never promoted to a description.
pub fn extract_rooms(text: &str) -> Result<Vec<ParsedRoom>> {
    let boundary_regex = Regex::new(r"(?m)^\s*\d+:\s*(?P<name>.+?)\s*$")
        .context("failed to compile room boundary regex")?;
    let rating_pair_regex = Regex::new(
        r"(?i)\b(excellent|good|fair|poor|unacceptable)\s+(excellent|good|fair|poor|unacceptable)\b",
    )
    .context("failed to compile rating pair regex")?;

    let Some(region) = section::slice_after(text, INSPECTION_AREAS_HEADING) else {
        debug!("inspection areas region not found");
        return Ok(Vec::new());
    };

    let boundaries = boundary_regex.captures_iter(region).collect::<Vec<_>>();

    let mut rooms = Vec::new();
    for (index, captures) in boundaries.iter().enumerate() {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let chunk_start = whole.end();
        let chunk_end = boundaries
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map(|next| next.start())
            .unwrap_or(region.len());
        let chunk = &region[chunk_start..chunk_end];

        let name = captures["name"].to_string();

        let (condition, cleanliness) = match rating_pair_regex.captures(chunk) {
            Some(pair) => (
                Rating::parse(pair.get(1).map(|m| m.as_str()).unwrap_or_default()),
                Rating::parse(pair.get(2).map(|m| m.as_str()).unwrap_or_default()),
            ),
            None => (None, None),
        };

        let description = section::slice_between(chunk, "Description", "Defects")
            .map(|slice| slice.trim_start_matches(':').trim().to_string())
            .filter(|slice| !slice.is_empty());

        let defects = section::slice_after(chunk, "Defects")
            .map(|slice| slice.trim_start_matches(':').trim().to_string())
            .filter(|slice| !slice.is_empty());

        rooms.push(ParsedRoom {
            name,
            condition,
            cleanliness,
            description,
            defects,
        });
    }

    Ok(rooms)
}
