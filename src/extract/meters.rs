use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::ParsedMeter;
use crate::section;

use super::{KEYS_HEADING, METERS_HEADING};

pub fn locate_block(text: &str) -> Result<Option<&str>> {
    let required = Regex::new(r"(?i)energy type|electricity|gas|water|oil")
        .context("failed to compile meters content regex")?;
    Ok(section::locate(
        text,
        METERS_HEADING,
        KEYS_HEADING,
        Some(&required),
    ))
}

/// Parses metered-utility rows. Two row shapes are tried per line,
/// independently of how neighbouring lines matched: the full shape carries
/// location and meter type after the reading, the simple shape ends at the
/// reading. Serial numbers never appear in the source text and stay null.
pub fn extract_meters(text: &str) -> Result<Vec<ParsedMeter>> {
    let full_row_regex = Regex::new(
        r"(?i)^(?P<fuel>electricity|gas|water|oil)\s+(?P<date>\d{1,2} [a-z]+ \d{4})\s+(?P<reading>\d+(?:\.\d+)?)\s+(?P<location>.+?)\s+(?P<meter_type>tariff|standard|smart)$",
    )
    .context("failed to compile full meter row regex")?;
    let simple_row_regex = Regex::new(
        r"(?i)^(?P<fuel>electricity|gas|water|oil)\s+(?P<date>\d{1,2} [a-z]+ \d{4})\s+(?P<reading>\d+(?:\.\d+)?)$",
    )
    .context("failed to compile simple meter row regex")?;
    let footer_regex =
        Regex::new(r"(?i)^page \d+ of \d+$").context("failed to compile page footer regex")?;
    let bare_date_regex = Regex::new(r"^\d{1,2} [A-Z][a-z]+ \d{4}$")
        .context("failed to compile bare date regex")?;

    let Some(block) = locate_block(text)? else {
        debug!("meters section not found");
        return Ok(Vec::new());
    };

    let mut meters = Vec::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty()
            || is_meters_header(line)
            || footer_regex.is_match(line)
            || bare_date_regex.is_match(line)
        {
            continue;
        }

        if let Some(captures) = full_row_regex.captures(line) {
            let fuel = title_case(&captures["fuel"]);
            meters.push(ParsedMeter {
                name: format!("{fuel} Meter"),
                energy_type: fuel,
                date: Some(captures["date"].to_string()),
                reading: Some(captures["reading"].to_string()),
                location: Some(captures["location"].trim().to_string()),
                serial_number: None,
                meter_type: Some(title_case(&captures["meter_type"])),
            });
            continue;
        }

        if let Some(captures) = simple_row_regex.captures(line) {
            let fuel = title_case(&captures["fuel"]);
            meters.push(ParsedMeter {
                name: format!("{fuel} Meter"),
                energy_type: fuel,
                date: Some(captures["date"].to_string()),
                reading: Some(captures["reading"].to_string()),
                location: None,
                serial_number: None,
                meter_type: None,
            });
            continue;
        }

        debug!(line, "meter line matched neither row shape");
    }

    Ok(meters)
}

fn is_meters_header(line: &str) -> bool {
    line.to_ascii_lowercase().contains("energy type")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
