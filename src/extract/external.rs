use anyhow::Result;
use tracing::debug;

use crate::section;

use super::{EXTERNAL_AREAS_HEADING, INSPECTION_AREAS_HEADING};

pub fn locate_block(text: &str) -> Option<&str> {
    section::slice_between(text, EXTERNAL_AREAS_HEADING, INSPECTION_AREAS_HEADING)
}

/// Free text after the `Description` label inside the external areas block.
pub fn extract_external_areas(text: &str) -> Result<Option<String>> {
    let Some(block) = locate_block(text) else {
        debug!("external areas section not found");
        return Ok(None);
    };

    let Some(tail) = section::slice_after(block, "Description") else {
        debug!("external areas block has no description label");
        return Ok(None);
    };

    let description = tail.trim_start_matches(':').trim();
    if description.is_empty() {
        return Ok(None);
    }

    Ok(Some(description.to_string()))
}
