use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::ParsedProperty;

/// Pulls the appointment date, assessor name and property address from the
/// report front page. The address line sits below a `Property` / `Address`
/// label pair and is split on commas: a trailing UK postcode segment is
/// lifted out first, then the last remaining segment becomes the city when
/// at least two segments are left.
pub fn extract_property(text: &str) -> Result<ParsedProperty> {
    let date_regex = Regex::new(r"\b(\d{1,2} [A-Z][a-z]+ \d{4})\b")
        .context("failed to compile appointment date regex")?;
    let assessor_regex = Regex::new(r"(?im)^assessor:?\s*(\S.*)$")
        .context("failed to compile assessor label regex")?;

    let appointment_date = date_regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string());
    if appointment_date.is_none() {
        debug!("no appointment date matched in header");
    }

    let assessor = assessor_regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim().to_string());

    let (address, city, postcode) = match find_address_line(text) {
        Some(line) => split_address_line(&line)?,
        None => {
            debug!("no address label sequence matched in header");
            (None, None, None)
        }
    };

    Ok(ParsedProperty {
        address,
        city,
        postcode,
        appointment_date,
        assessor,
    })
}

/// The address is the first non-empty line after consecutive `Property` and
/// `Address` label lines.
fn find_address_line(text: &str) -> Option<String> {
    let lines = text.lines().collect::<Vec<&str>>();

    for index in 0..lines.len().saturating_sub(1) {
        let first = lines[index].trim();
        let second = lines[index + 1].trim();
        if !first.eq_ignore_ascii_case("property") || !second.eq_ignore_ascii_case("address") {
            continue;
        }

        return lines[index + 2..]
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .map(ToOwned::to_owned);
    }

    None
}

fn split_address_line(line: &str) -> Result<(Option<String>, Option<String>, Option<String>)> {
    let postcode_regex = Regex::new(r"(?i)^[A-Z]{1,2}\d{1,2}[A-Z]? \d[A-Z]{2}$")
        .context("failed to compile postcode regex")?;

    let mut segments = line
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();

    if segments.is_empty() {
        return Ok((None, None, None));
    }

    let mut postcode = None;
    let ends_with_postcode = segments
        .last()
        .map(|segment| postcode_regex.is_match(segment))
        .unwrap_or(false);
    if ends_with_postcode {
        postcode = segments.pop();
    }

    let mut city = None;
    if segments.len() >= 2 {
        city = segments.pop();
    }

    let address = if segments.is_empty() {
        None
    } else {
        Some(segments.join(", "))
    };

    Ok((address, city, postcode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_uk_address_line() {
        let (address, city, postcode) =
            split_address_line("2 Riverhead Gardens, Driffield, YO25 6AA").unwrap();
        assert_eq!(address.as_deref(), Some("2 Riverhead Gardens"));
        assert_eq!(city.as_deref(), Some("Driffield"));
        assert_eq!(postcode.as_deref(), Some("YO25 6AA"));
    }

    #[test]
    fn single_segment_line_is_address_only() {
        let (address, city, postcode) = split_address_line("Some House").unwrap();
        assert_eq!(address.as_deref(), Some("Some House"));
        assert_eq!(city, None);
        assert_eq!(postcode, None);
    }

    #[test]
    fn two_segments_without_postcode_split_into_address_and_city() {
        let (address, city, postcode) = split_address_line("1 High Street, York").unwrap();
        assert_eq!(address.as_deref(), Some("1 High Street"));
        assert_eq!(city.as_deref(), Some("York"));
        assert_eq!(postcode, None);
    }

    #[test]
    fn long_address_keeps_leading_segments_joined() {
        let (address, city, postcode) =
            split_address_line("Flat 2, 14 Micklegate, York, YO1 6JH").unwrap();
        assert_eq!(address.as_deref(), Some("Flat 2, 14 Micklegate"));
        assert_eq!(city.as_deref(), Some("York"));
        assert_eq!(postcode.as_deref(), Some("YO1 6JH"));
    }

    #[test]
    fn extracts_date_assessor_and_address_from_header() {
        let text = "Inventory and Check In Report\nAppointment 14 February 2026 09:00\nAssessor: Jane Holloway\nProperty\nAddress\n2 Riverhead Gardens, Driffield, YO25 6AA\n";
        let property = extract_property(text).unwrap();
        assert_eq!(property.appointment_date.as_deref(), Some("14 February 2026"));
        assert_eq!(property.assessor.as_deref(), Some("Jane Holloway"));
        assert_eq!(property.address.as_deref(), Some("2 Riverhead Gardens"));
        assert_eq!(property.city.as_deref(), Some("Driffield"));
        assert_eq!(property.postcode.as_deref(), Some("YO25 6AA"));
    }

    #[test]
    fn absent_header_fields_stay_null() {
        let property = extract_property("nothing useful here").unwrap();
        assert_eq!(property.appointment_date, None);
        assert_eq!(property.assessor, None);
        assert_eq!(property.address, None);
        assert_eq!(property.city, None);
        assert_eq!(property.postcode, None);
    }
}
