use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::{Rating, SummaryRow};
use crate::section;

use super::{METERS_HEADING, REPORT_SUMMARY_HEADING};

pub fn locate_block(text: &str) -> Option<&str> {
    section::slice_between(text, REPORT_SUMMARY_HEADING, METERS_HEADING)
}

/// Parses the condition/cleanliness overview table. Each data row is
/// `<name> <rating> <rating>`; the first two rating tokens are condition and
/// cleanliness, trailing tokens are ignored. Rows that do not carry two
/// rating tokens are dropped.
pub fn extract_report_summary(text: &str) -> Result<Vec<SummaryRow>> {
    let rating_regex = Regex::new(r"(?i)\b(excellent|good|fair|poor|unacceptable)\b")
        .context("failed to compile rating token regex")?;

    let Some(block) = locate_block(text) else {
        debug!("report summary section not found");
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || is_summary_header(line) {
            continue;
        }

        let matches = rating_regex.find_iter(line).collect::<Vec<_>>();
        if matches.len() < 2 {
            debug!(line, "summary row without two rating tokens dropped");
            continue;
        }

        let name = line[..matches[0].start()].trim();
        if name.is_empty() {
            continue;
        }

        rows.push(SummaryRow {
            name: name.to_string(),
            condition: Rating::parse(matches[0].as_str()),
            cleanliness: Rating::parse(matches[1].as_str()),
        });
    }

    Ok(rows)
}

fn is_summary_header(line: &str) -> bool {
    let lowered = line.to_ascii_lowercase();
    lowered.contains("inspection areas")
        || (lowered.contains("condition") && lowered.contains("cleanliness"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_TEXT: &str = "Report Summary\nInspection Areas Condition Cleanliness\nHall Good Fair\nKitchen Excellent Good extra words\nnot a table row\nMeters\n";

    #[test]
    fn parses_rows_and_skips_table_header() {
        let rows = extract_report_summary(SUMMARY_TEXT).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Hall");
        assert_eq!(rows[0].condition, Some(Rating::Good));
        assert_eq!(rows[0].cleanliness, Some(Rating::Fair));

        assert_eq!(rows[1].name, "Kitchen");
        assert_eq!(rows[1].condition, Some(Rating::Excellent));
        assert_eq!(rows[1].cleanliness, Some(Rating::Good));
    }

    #[test]
    fn rows_without_two_ratings_are_dropped() {
        let text = "Report Summary\nLanding Good\nMeters\n";
        let rows = extract_report_summary(text).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_section_yields_empty_list() {
        let rows = extract_report_summary("no summary heading here").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn third_rating_token_is_ignored() {
        let text = "Report Summary\nBathroom Poor Unacceptable Good\nMeters\n";
        let rows = extract_report_summary(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].condition, Some(Rating::Poor));
        assert_eq!(rows[0].cleanliness, Some(Rating::Unacceptable));
    }
}
