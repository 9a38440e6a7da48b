use serde::Serialize;

use crate::model::Rating;

/// Wooma import document. Field names follow the external schema exactly;
/// nullable columns are `Option` so "not found" serializes as an explicit
/// `null` rather than a missing key.
#[derive(Debug, Clone, Serialize)]
pub struct WoomaDocument {
    pub property: WoomaProperty,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaProperty {
    pub id: String,
    pub user_id: String,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub reports: Vec<WoomaReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaReport {
    pub id: String,
    pub property_id: String,
    pub report_type_id: String,
    pub status: String,
    pub completion_percentage: Option<u32>,
    pub completion_date: Option<String>,
    pub pdf_url: Option<String>,
    pub pdf_generated_at: Option<String>,
    pub is_paid: bool,
    pub payment_date: Option<String>,
    pub appointment_date: Option<String>,
    pub assessor: Option<String>,
    pub rooms: Vec<WoomaRoom>,
    pub meters: Vec<WoomaMeter>,
    pub keys: Vec<WoomaKey>,
    pub detectors: Vec<WoomaDetector>,
    pub external_areas: Option<String>,
    pub report_checklists: Vec<WoomaChecklist>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaRoom {
    pub id: String,
    pub report_id: String,
    pub name: String,
    pub items: Vec<WoomaRoomItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaRoomItem {
    pub room_id: String,
    pub name: String,
    pub general_condition: Option<Rating>,
    pub general_cleanliness: Option<Rating>,
    pub description: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaMeter {
    pub report_id: String,
    pub name: String,
    pub reading: Option<String>,
    pub location: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaKey {
    pub report_id: String,
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub no_of_keys: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaDetector {
    pub report_id: String,
    pub name: String,
    pub location: Option<String>,
    pub note: Option<String>,
    pub tested: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaChecklist {
    pub report_id: String,
    pub checklist_id: String,
    pub question_answers: Vec<WoomaQuestionAnswer>,
    pub field_answers: Vec<WoomaFieldAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaQuestionAnswer {
    pub report_checklist_id: String,
    pub checklist_question_id: Option<String>,
    pub answer_option: Option<String>,
    pub answer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WoomaFieldAnswer {
    pub report_checklist_id: String,
    pub checklist_field_id: Option<String>,
    pub answer_text: Option<String>,
}
