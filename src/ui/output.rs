//! Output formatting and display logic for urlprobe

use serde::Serialize;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::{ProbeOutcome, ProbeResult};
use crate::ingest::IngestedUrls;
use crate::reporting::{status_label, to_csv_string};
use crate::ui::color::{Colors, colorize, outcome_color};

/// Counts shown next to the results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayMetadata {
    pub total_found: usize,
    pub total_checked: usize,
    pub reachable: usize,
    pub unreachable: usize,
}

impl DisplayMetadata {
    pub fn new(ingested: &IngestedUrls, results: &[ProbeResult]) -> Self {
        let unreachable = results
            .iter()
            .filter(|result| result.outcome.is_unreachable())
            .count();

        Self {
            total_found: ingested.total_found,
            total_checked: results.len(),
            reachable: results.len() - unreachable,
            unreachable,
        }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    url: &'a str,
    status: ProbeOutcome,
    label: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a DisplayMetadata,
    results: Vec<JsonRow<'a>>,
}

/// Display how many URLs will be checked
pub fn display_url_discovery(ingested: &IngestedUrls) {
    println!("{}", url_discovery_line(ingested));
}

pub fn url_discovery_line(ingested: &IngestedUrls) -> String {
    let count = ingested.urls.len();
    let noun = if count == 1 { "URL" } else { "URLs" };

    match ingested.duplicates_removed() {
        0 => format!("Found {count} {noun} to check."),
        removed => format!("Found {count} {noun} to check ({removed} duplicate(s) removed)."),
    }
}

/// Numbered table, URL column padded to the widest URL
pub fn render_text_table(results: &[ProbeResult]) -> String {
    let width = results
        .iter()
        .map(|result| result.url.chars().count())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    table.push_str(&colorize(
        &format!("{:>4}  {:<width$}  Status", "#", "URL"),
        Colors::BOLD,
    ));
    table.push('\n');

    for (i, result) in results.iter().enumerate() {
        let label = colorize(&status_label(result.outcome), outcome_color(result.outcome));
        table.push_str(&format!("{:>4}. {:<width$}  {}\n", i + 1, result.url, label));
    }

    table
}

pub fn render_summary(metadata: &DisplayMetadata) -> String {
    if metadata.unreachable == 0 {
        format!(
            "{} {}/{} URLs reachable",
            display::SUCCESS_EMOJI,
            metadata.reachable,
            metadata.total_checked
        )
    } else {
        format!(
            "{} {}/{} URLs reachable, {} unreachable",
            display::NETWORK_ERROR_EMOJI,
            metadata.reachable,
            metadata.total_checked,
            metadata.unreachable
        )
    }
}

pub fn render_json(results: &[ProbeResult], metadata: &DisplayMetadata) -> Result<String> {
    let report = JsonReport {
        summary: metadata,
        results: results
            .iter()
            .map(|result| JsonRow {
                url: &result.url,
                status: result.outcome,
                label: status_label(result.outcome),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the results in the requested format
pub fn render_results(
    results: &[ProbeResult],
    format: &str,
    metadata: &DisplayMetadata,
) -> Result<String> {
    match format {
        output_formats::JSON => render_json(results, metadata).map(|json| json + "\n"),
        output_formats::CSV => to_csv_string(results),
        _ => Ok(format!(
            "{}\n{}\n",
            render_text_table(results),
            render_summary(metadata)
        )),
    }
}

pub fn display_results(
    results: &[ProbeResult],
    format: &str,
    metadata: &DisplayMetadata,
) -> Result<()> {
    print!("{}", render_results(results, format, metadata)?);
    Ok(())
}

pub fn display_export_notice(path: &str) {
    println!("{} Results exported to {path}", display::EXPORT_EMOJI);
}
