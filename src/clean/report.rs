use std::error::Error;
use std::path::Path;

use decomment::strip::Strategy;
use serde::Serialize;

use super::{FileOutcome, FileStatus, RunSummary};

/// Print a horizontal separator of box-drawing chars.
fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Widest path in the listing, never narrower than `min`.
fn path_width<'a>(paths: impl Iterator<Item = &'a Path>, min: usize) -> usize {
    paths
        .map(|p| p.display().to_string().len())
        .max()
        .unwrap_or(min)
        .max(min)
}

fn status_label(status: &FileStatus) -> &'static str {
    match status {
        FileStatus::Written => "written",
        FileStatus::SkippedBinary => "binary",
        FileStatus::SkippedEncoding => "encoding",
        FileStatus::Failed { .. } => "failed",
    }
}

/// Percentage of input bytes that did not make it to the output.
fn removed_percent(bytes_in: usize, bytes_out: usize) -> f64 {
    if bytes_in == 0 {
        return 0.0;
    }
    bytes_in.saturating_sub(bytes_out) as f64 * 100.0 / bytes_in as f64
}

fn print_files(files: &[FileOutcome]) {
    let width = path_width(files.iter().map(|f| f.path.as_path()), 4);
    let separator = separator(width + 38);

    println!("{separator}");
    println!(
        " {:<width$} {:>10} {:>12} {:>12}",
        "File", "Status", "Bytes in", "Bytes out"
    );
    println!("{separator}");
    for f in files {
        println!(
            " {:<width$} {:>10} {:>12} {:>12}",
            f.path.display().to_string(),
            status_label(&f.status),
            f.bytes_in,
            f.bytes_out
        );
    }
    println!();
}

/// Print the run totals; with `verbose`, list every file first.
pub fn print_report(summary: &RunSummary, strategy: Strategy, verbose: bool) {
    if verbose {
        print_files(&summary.files);
    }

    let separator = separator(40);
    let bytes_in = summary.bytes_in();
    let bytes_out = summary.bytes_out();

    println!("{separator}");
    println!(" {:<24} {:>14}", "Strategy", strategy.name());
    println!("{separator}");
    println!(" {:<24} {:>14}", "Files seen", summary.files.len());
    println!(" {:<24} {:>14}", "Written", summary.written());
    println!(" {:<24} {:>14}", "Skipped (binary)", summary.skipped_binary());
    println!(" {:<24} {:>14}", "Skipped (encoding)", summary.skipped_encoding());
    println!(" {:<24} {:>14}", "Failed", summary.failed());
    println!("{separator}");
    println!(" {:<24} {:>14}", "Bytes in", bytes_in);
    println!(" {:<24} {:>14}", "Bytes out", bytes_out);
    println!(
        " {:<24} {:>13.1}%",
        "Removed",
        removed_percent(bytes_in, bytes_out)
    );
    println!("{separator}");

    for f in &summary.files {
        if let FileStatus::Failed { error } = &f.status {
            println!("failed: {}: {error}", f.path.display());
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    strategy: Strategy,
    files: &'a [FileOutcome],
    totals: JsonTotals,
}

#[derive(Serialize)]
struct JsonTotals {
    files: usize,
    written: usize,
    skipped_binary: usize,
    skipped_encoding: usize,
    failed: usize,
    bytes_in: usize,
    bytes_out: usize,
}

pub fn print_json(summary: &RunSummary, strategy: Strategy) -> Result<(), Box<dyn Error>> {
    let output = JsonOutput {
        strategy,
        files: &summary.files,
        totals: JsonTotals {
            files: summary.files.len(),
            written: summary.written(),
            skipped_binary: summary.skipped_binary(),
            skipped_encoding: summary.skipped_encoding(),
            failed: summary.failed(),
            bytes_in: summary.bytes_in(),
            bytes_out: summary.bytes_out(),
        },
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
