use crate::model::ParsedReport;
use crate::schema::{
    WoomaChecklist, WoomaDetector, WoomaDocument, WoomaFieldAnswer, WoomaKey, WoomaMeter,
    WoomaProperty, WoomaQuestionAnswer, WoomaReport, WoomaRoom, WoomaRoomItem,
};
use crate::util::new_id;

const REPORT_STATUS_NEW: &str = "IN_PROGRESS";
const ROOM_ITEM_NAME: &str = "General Overview";

/// Assembles the Wooma import document from a parsed report and the three
/// caller-supplied identifiers. Report, room and checklist identifiers are
/// generated fresh on every call; everything else carries over verbatim,
/// with required-but-unknown report fields set to their freshly-created
/// defaults rather than inferred from document content.
pub fn map_report(parsed: &ParsedReport, user_id: &str, property_id: &str, report_type_id: &str) -> WoomaDocument {
    let report_id = new_id();

    let rooms = parsed
        .rooms
        .iter()
        .map(|room| {
            let room_id = new_id();
            let item = WoomaRoomItem {
                room_id: room_id.clone(),
                name: ROOM_ITEM_NAME.to_string(),
                general_condition: room.condition,
                general_cleanliness: room.cleanliness,
                description: room.description.clone(),
                note: room.defects.clone(),
            };
            WoomaRoom {
                id: room_id,
                report_id: report_id.clone(),
                name: room.name.clone(),
                items: vec![item],
            }
        })
        .collect();

    let meters = parsed
        .meters
        .iter()
        .map(|meter| WoomaMeter {
            report_id: report_id.clone(),
            name: meter.name.clone(),
            reading: meter.reading.clone(),
            location: meter.location.clone(),
            serial_number: meter.serial_number.clone(),
        })
        .collect();

    let keys = parsed
        .keys
        .iter()
        .map(|key| WoomaKey {
            report_id: report_id.clone(),
            name: key.name.clone(),
            description: key.description.clone(),
            note: key.note.clone(),
            no_of_keys: key.no_of_keys,
        })
        .collect();

    let detectors = parsed
        .detectors
        .iter()
        .map(|detector| WoomaDetector {
            report_id: report_id.clone(),
            name: detector.name.clone(),
            location: detector.location.clone(),
            note: detector.note.clone(),
            tested: detector.tested.clone(),
        })
        .collect();

    let report = WoomaReport {
        id: report_id.clone(),
        property_id: property_id.to_string(),
        report_type_id: report_type_id.to_string(),
        status: REPORT_STATUS_NEW.to_string(),
        completion_percentage: None,
        completion_date: None,
        pdf_url: None,
        pdf_generated_at: None,
        is_paid: false,
        payment_date: None,
        appointment_date: parsed.property.appointment_date.clone(),
        assessor: parsed.property.assessor.clone(),
        rooms,
        meters,
        keys,
        detectors,
        external_areas: parsed.external_areas.clone(),
        report_checklists: map_checklists(parsed, &report_id),
    };

    WoomaDocument {
        property: WoomaProperty {
            id: property_id.to_string(),
            user_id: user_id.to_string(),
            address: parsed.property.address.clone(),
            postcode: parsed.property.postcode.clone(),
            city: parsed.property.city.clone(),
            reports: vec![report],
        },
    }
}

/// An all-empty parsed checklist maps to an empty collection; a placeholder
/// wrapper with empty inner lists is never emitted.
fn map_checklists(parsed: &ParsedReport, report_id: &str) -> Vec<WoomaChecklist> {
    if parsed.checklist.question_answers.is_empty() && parsed.checklist.field_answers.is_empty() {
        return Vec::new();
    }

    let checklist_id = new_id();

    let question_answers = parsed
        .checklist
        .question_answers
        .iter()
        .map(|answer| WoomaQuestionAnswer {
            report_checklist_id: checklist_id.clone(),
            checklist_question_id: None,
            answer_option: answer.answer_option.clone(),
            answer_text: answer.answer_text.clone(),
        })
        .collect();

    let field_answers = parsed
        .checklist
        .field_answers
        .iter()
        .map(|answer| WoomaFieldAnswer {
            report_checklist_id: checklist_id.clone(),
            checklist_field_id: None,
            answer_text: answer.answer_text.clone(),
        })
        .collect();

    vec![WoomaChecklist {
        report_id: report_id.to_string(),
        checklist_id,
        question_answers,
        field_answers,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ParsedChecklist, ParsedDetector, ParsedKey, ParsedMeter, ParsedProperty,
        ParsedQuestionAnswer, ParsedRoom, Rating,
    };

    fn sample_parsed() -> ParsedReport {
        ParsedReport {
            property: ParsedProperty {
                address: Some("2 Riverhead Gardens".to_string()),
                city: Some("Driffield".to_string()),
                postcode: Some("YO25 6AA".to_string()),
                appointment_date: Some("14 February 2026".to_string()),
                assessor: Some("Jane Holloway".to_string()),
            },
            checklist: ParsedChecklist {
                question_answers: vec![ParsedQuestionAnswer {
                    question: "Are smoke alarms fitted?".to_string(),
                    answer_option: Some("YES".to_string()),
                    answer_text: None,
                }],
                field_answers: Vec::new(),
            },
            report_summary: Vec::new(),
            meters: vec![ParsedMeter {
                energy_type: "Gas".to_string(),
                date: Some("15 Jan 2026".to_string()),
                reading: Some("21141.77".to_string()),
                location: None,
                serial_number: None,
                meter_type: None,
                name: "Gas Meter".to_string(),
            }],
            keys: vec![ParsedKey {
                name: "General Key".to_string(),
                description: None,
                note: Some("2 x front door key".to_string()),
                no_of_keys: None,
            }],
            detectors: vec![ParsedDetector {
                name: "Smoke alarm".to_string(),
                location: Some("Hall ceiling".to_string()),
                note: None,
                tested: Some("YES".to_string()),
            }],
            external_areas: None,
            rooms: vec![ParsedRoom {
                name: "Hall".to_string(),
                condition: Some(Rating::Good),
                cleanliness: Some(Rating::Fair),
                description: Some("Neutral walls.".to_string()),
                defects: Some("Scuffed skirting.".to_string()),
            }],
        }
    }

    #[test]
    fn report_defaults_reflect_freshly_created_state() {
        let document = map_report(&sample_parsed(), "user-1", "prop-1", "type-1");
        let report = &document.property.reports[0];

        assert_eq!(report.status, "IN_PROGRESS");
        assert_eq!(report.completion_percentage, None);
        assert_eq!(report.completion_date, None);
        assert_eq!(report.pdf_url, None);
        assert_eq!(report.pdf_generated_at, None);
        assert!(!report.is_paid);
        assert_eq!(report.payment_date, None);
        assert_eq!(report.property_id, "prop-1");
        assert_eq!(report.report_type_id, "type-1");
        assert_eq!(document.property.user_id, "user-1");
    }

    #[test]
    fn children_carry_their_parent_identifiers() {
        let document = map_report(&sample_parsed(), "user-1", "prop-1", "type-1");
        let report = &document.property.reports[0];

        assert_eq!(report.meters[0].report_id, report.id);
        assert_eq!(report.keys[0].report_id, report.id);
        assert_eq!(report.detectors[0].report_id, report.id);
        assert_eq!(report.rooms[0].report_id, report.id);
        assert_eq!(report.rooms[0].items[0].room_id, report.rooms[0].id);
        assert_eq!(report.report_checklists[0].report_id, report.id);
        assert_eq!(
            report.report_checklists[0].question_answers[0].report_checklist_id,
            report.report_checklists[0].checklist_id
        );
    }

    #[test]
    fn each_room_gets_one_general_overview_item() {
        let document = map_report(&sample_parsed(), "user-1", "prop-1", "type-1");
        let room = &document.property.reports[0].rooms[0];

        assert_eq!(room.items.len(), 1);
        assert_eq!(room.items[0].name, "General Overview");
        assert_eq!(room.items[0].general_condition, Some(Rating::Good));
        assert_eq!(room.items[0].general_cleanliness, Some(Rating::Fair));
        assert_eq!(room.items[0].description.as_deref(), Some("Neutral walls."));
        assert_eq!(room.items[0].note.as_deref(), Some("Scuffed skirting."));
    }

    #[test]
    fn empty_checklist_maps_to_empty_collection() {
        let mut parsed = sample_parsed();
        parsed.checklist = ParsedChecklist::default();

        let document = map_report(&parsed, "user-1", "prop-1", "type-1");
        assert!(document.property.reports[0].report_checklists.is_empty());
    }

    #[test]
    fn question_answer_foreign_keys_stay_null_for_later_linkage() {
        let document = map_report(&sample_parsed(), "user-1", "prop-1", "type-1");
        let answer = &document.property.reports[0].report_checklists[0].question_answers[0];

        assert_eq!(answer.checklist_question_id, None);
        assert_eq!(answer.answer_option.as_deref(), Some("YES"));
        assert_eq!(answer.answer_text, None);
    }

    #[test]
    fn repeat_runs_differ_only_in_generated_identifiers() {
        let parsed = sample_parsed();
        let first = map_report(&parsed, "user-1", "prop-1", "type-1");
        let second = map_report(&parsed, "user-1", "prop-1", "type-1");

        let first_report = &first.property.reports[0];
        let second_report = &second.property.reports[0];

        assert_ne!(first_report.id, second_report.id);
        assert_ne!(first_report.rooms[0].id, second_report.rooms[0].id);

        assert_eq!(first_report.meters[0].name, second_report.meters[0].name);
        assert_eq!(first_report.meters[0].reading, second_report.meters[0].reading);
        assert_eq!(first_report.keys[0].note, second_report.keys[0].note);
        assert_eq!(
            first_report.rooms[0].items[0].description,
            second_report.rooms[0].items[0].description
        );
        assert_eq!(first.property.address, second.property.address);
    }
}
