use regex::Regex;
use tracing::debug;

/// Returns the text slice between `start_marker` and `end_marker`.
///
/// Headings legitimately repeat (table of contents vs. the real section), so
/// every case-insensitive occurrence of the start marker is scanned in order
/// and the first non-empty slice that satisfies `required_content` wins.
/// Candidates with no following end marker, an empty body, or a failed
/// content check are skipped. Markers are ASCII template literals.
pub fn locate<'a>(
    text: &'a str,
    start_marker: &str,
    end_marker: &str,
    required_content: Option<&Regex>,
) -> Option<&'a str> {
    let lowered = text.to_ascii_lowercase();
    let start_lowered = start_marker.to_ascii_lowercase();
    let end_lowered = end_marker.to_ascii_lowercase();

    let mut from = 0;
    while let Some(offset) = lowered[from..].find(&start_lowered) {
        let start_pos = from + offset;
        let slice_start = start_pos + start_lowered.len();

        if let Some(end_offset) = lowered[slice_start..].find(&end_lowered) {
            let slice = &text[slice_start..slice_start + end_offset];
            let qualifies = !slice.trim().is_empty()
                && required_content.is_none_or(|pattern| pattern.is_match(slice));
            if qualifies {
                return Some(slice);
            }
            debug!(
                start_marker,
                end_marker, start_pos, "section candidate rejected, scanning on"
            );
        }

        from = slice_start;
    }

    None
}

/// Locator variant for headings known to be unique in the template.
pub fn slice_between<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> Option<&'a str> {
    locate(text, start_marker, end_marker, None)
}

/// Everything after the first case-insensitive occurrence of `marker`.
pub fn slice_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let lowered = text.to_ascii_lowercase();
    let marker_lowered = marker.to_ascii_lowercase();

    lowered
        .find(&marker_lowered)
        .map(|pos| &text[pos + marker_lowered.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_skips_non_qualifying_first_occurrence() {
        let text = "Contents\nMeters 4\nKeys 5\n\nMeters\nEnergy Type Date Reading\nGas 15 Jan 2026 21141.77\nKeys\nGeneral key details";
        let required = Regex::new(r"Energy Type").unwrap();

        let slice = locate(text, "Meters", "Keys", Some(&required)).unwrap();
        assert!(slice.contains("Energy Type"));
        assert!(slice.contains("Gas 15 Jan 2026"));
        assert!(!slice.contains("Meters 4"));
    }

    #[test]
    fn locate_without_predicate_takes_first_non_empty_slice() {
        let text = "Report Summary\nKitchen Good Fair\nMeters\n...";
        let slice = locate(text, "Report Summary", "Meters", None).unwrap();
        assert_eq!(slice.trim(), "Kitchen Good Fair");
    }

    #[test]
    fn locate_is_case_insensitive_on_markers() {
        let text = "REPORT SUMMARY\nHall Good Good\nMETERS\n";
        let slice = locate(text, "Report Summary", "Meters", None).unwrap();
        assert_eq!(slice.trim(), "Hall Good Good");
    }

    #[test]
    fn locate_returns_none_when_start_marker_is_absent() {
        assert!(locate("no sections here", "Meters", "Keys", None).is_none());
    }

    #[test]
    fn locate_returns_none_when_no_end_marker_follows() {
        assert!(locate("Meters\nGas 15 Jan 2026 21141.77", "Meters", "Keys", None).is_none());
    }

    #[test]
    fn locate_skips_empty_slices() {
        let text = "Keys Detectors\nKeys\nGeneral key details\nOne front door key\nDetectors";
        let slice = locate(text, "Keys", "Detectors", None).unwrap();
        assert!(slice.contains("front door key"));
    }

    #[test]
    fn slice_after_returns_tail_from_first_occurrence() {
        let tail = slice_after("intro\nInspection Areas\n1: Hall", "Inspection Areas").unwrap();
        assert_eq!(tail.trim(), "1: Hall");
    }

    #[test]
    fn slice_after_returns_none_for_missing_marker() {
        assert!(slice_after("intro text", "Inspection Areas").is_none());
    }
}
