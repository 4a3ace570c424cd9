use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::cli::ValidateArgs;
use crate::commands::Outcome;
use crate::model::{BatchReport, DocumentReport};
use crate::util::{now_utc_string, write_json_pretty};

mod blocks;
mod content;
mod metadata;
mod output;
mod pipeline;

pub use self::pipeline::validate_document;

const DOCUMENT_EXTENSIONS: [&str; 2] = ["html", "htm"];

pub fn run(args: ValidateArgs) -> Result<Outcome> {
    let paths = collect_documents(&args.paths, args.recursive)?;
    if paths.is_empty() {
        bail!("no HC documents found in the given paths");
    }

    info!(document_count = paths.len(), "validating documents");

    let reports = paths
        .iter()
        .map(|path| validate_path(path))
        .collect::<Vec<DocumentReport>>();
    let batch = BatchReport::new(now_utc_string(), reports);

    let mut stdout = io::BufWriter::new(io::stdout().lock());
    if args.json {
        output::write_json_report(&mut stdout, &batch)?;
    } else {
        output::write_text_batch(&mut stdout, &batch, args.quiet)?;
    }
    stdout.flush()?;

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &batch)?;
        info!(path = %report_path.display(), "wrote validation report");
    }

    info!(
        documents = batch.document_count,
        failed = batch.failed_count,
        status = batch.status.as_str(),
        "validation completed"
    );

    Ok(if batch.failed() {
        Outcome::Failed
    } else {
        Outcome::Passed
    })
}

/// Reads and validates one file. A read failure becomes an I/O report for this path
/// only; it never stops the rest of the batch.
pub fn validate_path(path: &Path) -> DocumentReport {
    let path_label = path.display().to_string();

    match read_document(path) {
        Ok(document) => {
            let result = validate_document(&document);
            debug!(
                path = %path_label,
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "document validated"
            );
            DocumentReport::from_result(path_label, result)
        }
        Err(err) => {
            let reason = format!("{err:#}");
            warn!(path = %path_label, error = %reason, "failed to read document");
            DocumentReport::io_failure(path_label, reason)
        }
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Expands directories into the HTML files they hold, sorted per directory. Plain file
/// arguments are kept as given, even when missing, so the read failure is reported
/// against that document.
fn collect_documents(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            discover_documents(input, recursive, &mut found)?;
            found.sort();
            if found.is_empty() {
                warn!(path = %input.display(), "no HC documents found in directory");
            }
            documents.extend(found);
        } else {
            documents.push(input.clone());
        }
    }

    Ok(documents)
}

fn discover_documents(dir: &Path, recursive: bool, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?;

        if file_type.is_dir() {
            if recursive {
                discover_documents(&path, recursive, found)?;
            }
            continue;
        }

        if file_type.is_file() && has_document_extension(&path) {
            found.push(path);
        }
    }

    Ok(())
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
