use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{info, warn};

use crate::cli::ParseArgs;
use crate::extract;
use crate::mapper;
use crate::model::{ExtractionCounts, ParsePaths, ParseRunManifest, ParsedReport};
use crate::normalize::normalize_text;
use crate::util::{ensure_directory, now_utc_string, sha256_file, utc_compact_string,
    write_json_pretty};

pub fn run(args: ParseArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    let manifest_dir = args.cache_root.join("manifests");
    let parse_manifest_path = args.parse_manifest_path.clone().unwrap_or_else(|| {
        manifest_dir.join(format!("parse_run_{}.json", utc_compact_string(started_ts)))
    });
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    info!(input = %args.input.display(), run_id = %run_id, "starting parse");

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let source_sha256 = sha256_file(&args.input)?;

    let text = normalize_text(&raw)?;
    if text.is_empty() {
        bail!("input contains no text after normalization: {}", args.input.display());
    }

    let parsed = extract::parse_report(&text)?;
    let counts = extraction_counts(&parsed);

    let mut warnings = Vec::new();
    if is_empty_extraction(&parsed) {
        let message = format!(
            "no template sections recognized in {}",
            args.input.display()
        );
        warn!(warning = %message, "parse warning");
        warnings.push(message);
    }

    let document = mapper::map_report(
        &parsed,
        &args.user_id,
        &args.property_id,
        &args.report_type_id,
    );

    if args.dry_run {
        info!(
            rooms = counts.rooms_extracted,
            meters = counts.meters_extracted,
            detectors = counts.detectors_extracted,
            "parse dry-run complete"
        );
        return Ok(());
    }

    write_json_pretty(&output_path, &document)?;
    info!(path = %output_path.display(), "wrote wooma document");

    ensure_directory(&manifest_dir)?;
    let manifest = ParseRunManifest {
        manifest_version: 1,
        run_id,
        status: "completed".to_string(),
        started_at,
        updated_at: now_utc_string(),
        command: render_parse_command(&args),
        source_sha256,
        paths: ParsePaths {
            input_path: args.input.display().to_string(),
            output_path: output_path.display().to_string(),
            manifest_dir: manifest_dir.display().to_string(),
        },
        counts,
        warnings,
    };
    write_json_pretty(&parse_manifest_path, &manifest)?;

    info!(path = %parse_manifest_path.display(), "wrote parse run manifest");
    info!(
        rooms = manifest.counts.rooms_extracted,
        meters = manifest.counts.meters_extracted,
        "parse completed"
    );

    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("wooma.json")
}

fn extraction_counts(parsed: &ParsedReport) -> ExtractionCounts {
    ExtractionCounts {
        question_answers_extracted: parsed.checklist.question_answers.len(),
        field_answers_extracted: parsed.checklist.field_answers.len(),
        summary_rows_extracted: parsed.report_summary.len(),
        meters_extracted: parsed.meters.len(),
        keys_extracted: parsed.keys.len(),
        detectors_extracted: parsed.detectors.len(),
        rooms_extracted: parsed.rooms.len(),
    }
}

fn is_empty_extraction(parsed: &ParsedReport) -> bool {
    parsed.property.address.is_none()
        && parsed.property.appointment_date.is_none()
        && parsed.checklist.question_answers.is_empty()
        && parsed.report_summary.is_empty()
        && parsed.meters.is_empty()
        && parsed.keys.is_empty()
        && parsed.detectors.is_empty()
        && parsed.external_areas.is_none()
        && parsed.rooms.is_empty()
}

fn render_parse_command(args: &ParseArgs) -> String {
    let mut parts = vec![
        "woomadoc parse".to_string(),
        format!("--input {}", args.input.display()),
        format!("--user-id {}", args.user_id),
        format!("--property-id {}", args.property_id),
        format!("--report-type-id {}", args.report_type_id),
    ];

    if let Some(output) = &args.output {
        parts.push(format!("--output {}", output.display()));
    }
    if args.dry_run {
        parts.push("--dry-run".to_string());
    }

    parts.join(" ")
}
