use serde::{Deserialize, Serialize};

/// Closed set of condition/cleanliness grades printed by the report
/// template. Any other token normalizes to `None`, never to a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl Rating {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "EXCELLENT" => Some(Self::Excellent),
            "GOOD" => Some(Self::Good),
            "FAIR" => Some(Self::Fair),
            "POOR" => Some(Self::Poor),
            "UNACCEPTABLE" => Some(Self::Unacceptable),
            _ => None,
        }
    }

}

/// Intermediate pre-schema record. Every field an extractor failed to match
/// is `None`; extractors never substitute defaults for missing source text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedReport {
    pub property: ParsedProperty,
    pub checklist: ParsedChecklist,
    pub report_summary: Vec<SummaryRow>,
    pub meters: Vec<ParsedMeter>,
    pub keys: Vec<ParsedKey>,
    pub detectors: Vec<ParsedDetector>,
    pub external_areas: Option<String>,
    pub rooms: Vec<ParsedRoom>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedProperty {
    pub address: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub appointment_date: Option<String>,
    pub assessor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedChecklist {
    pub question_answers: Vec<ParsedQuestionAnswer>,
    pub field_answers: Vec<ParsedFieldAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedQuestionAnswer {
    pub question: String,
    pub answer_option: Option<String>,
    pub answer_text: Option<String>,
}

/// Free-text checklist answers. The template currently prints none, so no
/// extraction rule populates these; the category is carried so the checklist
/// wrapper emission rule stays observable.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedFieldAnswer {
    pub field: String,
    pub answer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub condition: Option<Rating>,
    pub cleanliness: Option<Rating>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedMeter {
    pub energy_type: String,
    pub date: Option<String>,
    pub reading: Option<String>,
    pub location: Option<String>,
    pub serial_number: Option<String>,
    pub meter_type: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedKey {
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub no_of_keys: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedDetector {
    pub name: String,
    pub location: Option<String>,
    pub note: Option<String>,
    pub tested: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedRoom {
    pub name: String,
    pub condition: Option<Rating>,
    pub cleanliness: Option<Rating>,
    pub description: Option<String>,
    pub defects: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub filename: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_directory: String,
    pub report_count: usize,
    pub reports: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionCounts {
    pub question_answers_extracted: usize,
    pub field_answers_extracted: usize,
    pub summary_rows_extracted: usize,
    pub meters_extracted: usize,
    pub keys_extracted: usize,
    pub detectors_extracted: usize,
    pub rooms_extracted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsePaths {
    pub input_path: String,
    pub output_path: String,
    pub manifest_dir: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub command: String,
    pub source_sha256: String,
    pub paths: ParsePaths,
    pub counts: ExtractionCounts,
    pub warnings: Vec<String>,
}
