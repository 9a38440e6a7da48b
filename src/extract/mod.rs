use anyhow::Result;

use crate::model::ParsedReport;

pub mod checklist;
pub mod detectors;
pub mod external;
pub mod header;
pub mod keys;
pub mod meters;
pub mod rooms;
pub mod summary;


pub const REPORT_SUMMARY_HEADING: &str = "Report Summary";
pub const METERS_HEADING: &str = "Meters";
pub const KEYS_HEADING: &str = "Keys";
pub const DETECTORS_HEADING: &str = "Detectors";
pub const EXTERNAL_AREAS_HEADING: &str = "External Areas";
pub const INSPECTION_AREAS_HEADING: &str = "Inspection Areas";

/// Runs every section extractor over the shared normalized text.
///
/// Extractors are independent pure functions; the invocation order here only
/// fixes the field order of the assembled record. A section that is absent
/// from the text contributes `None` or an empty list, never an error.
pub fn parse_report(text: &str) -> Result<ParsedReport> {
    let property = header::extract_property(text)?;
    let checklist = checklist::extract_checklist(text)?;
    let report_summary = summary::extract_report_summary(text)?;
    let meters = meters::extract_meters(text)?;
    let keys = keys::extract_keys(text)?;
    let detectors = detectors::extract_detectors(text)?;
    let external_areas = external::extract_external_areas(text)?;
    let rooms = rooms::extract_rooms(text)?;

    Ok(ParsedReport {
        property,
        checklist,
        report_summary,
        meters,
        keys,
        detectors,
        external_areas,
        rooms,
    })
}
