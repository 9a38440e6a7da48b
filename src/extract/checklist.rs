use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::{ParsedChecklist, ParsedQuestionAnswer};

/// Yes/no questions printed by the check-in section of the template. The
/// set is closed; anything else on the page is not a checklist question.
const CHECKLIST_QUESTIONS: [&str; 6] = [
    "Was the property cleaned to a professional standard?",
    "Are smoke alarms fitted?",
    "Are carbon monoxide alarms fitted?",
    "Is a gas safety record displayed at the property?",
    "Are operating instructions available for appliances?",
    "Was the tenant present at check in?",
];

// Question texts must never contain a section heading word; the locator
// scans headings case-insensitively across the whole text.

/// Matches each known question followed by a blank line and a bare YES/NO
/// answer line. Questions the document does not answer are simply not
/// emitted. Free-text field answers are a reserved category with no
/// extraction rule, so the list is always empty.
pub fn extract_checklist(text: &str) -> Result<ParsedChecklist> {
    let mut question_answers = Vec::new();

    for question in CHECKLIST_QUESTIONS {
        let pattern = format!(r"(?im)^{}\s*\n\s*\n(yes|no)\s*$", regex::escape(question));
        let answer_regex = Regex::new(&pattern)
            .with_context(|| format!("failed to compile checklist regex for: {question}"))?;

        let Some(captures) = answer_regex.captures(text) else {
            debug!(question, "checklist question not answered in text");
            continue;
        };

        let option = captures
            .get(1)
            .map(|value| value.as_str().to_ascii_uppercase());

        question_answers.push(ParsedQuestionAnswer {
            question: question.to_string(),
            answer_option: option,
            answer_text: None,
        });
    }

    Ok(ParsedChecklist {
        question_answers,
        field_answers: Vec::new(),
    })
}
