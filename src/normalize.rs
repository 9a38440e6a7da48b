use anyhow::{Context, Result};
use regex::Regex;

/// Normalizes raw extracted report text before any section parsing.
///
/// Carriage-return variants fold to `\n`, embedded resource links are
/// stripped (never business data), runs of horizontal whitespace collapse to
/// one space, runs of three or more blank lines collapse to exactly one
/// blank line, and the whole text is trimmed.
pub fn normalize_text(raw: &str) -> Result<String> {
    let link_regex =
        Regex::new(r"[A-Za-z][A-Za-z0-9+.-]*://\S+").context("failed to compile link regex")?;
    let blank_run_regex =
        Regex::new(r"\n{4,}").context("failed to compile blank line regex")?;

    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let delinked = link_regex.replace_all(&unified, "");

    let lines = delinked
        .lines()
        .map(collapse_horizontal_whitespace)
        .collect::<Vec<String>>();
    let joined = lines.join("\n");

    let collapsed = blank_run_regex.replace_all(&joined, "\n\n");

    Ok(collapsed.trim().to_string())
}

fn collapse_horizontal_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<&str>>().join(" ")
}
