use std::io::Write;

use anyhow::{Context, Result};

use crate::model::{BatchReport, DocumentReport, DocumentStatus};

pub fn write_json_report(output: &mut impl Write, batch: &BatchReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, batch)
        .context("failed to serialize validation json output")?;
    writeln!(output)?;
    Ok(())
}

pub fn write_text_report(output: &mut impl Write, report: &DocumentReport) -> Result<()> {
    writeln!(output, "Validating: {}", report.path)?;

    if let Some(reason) = &report.io_error {
        writeln!(output, "  I/O failure: {reason}")?;
        return Ok(());
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        writeln!(output, "  ✓ Valid HC document")?;
        return Ok(());
    }

    if !report.errors.is_empty() {
        writeln!(output, "  Errors:")?;
        for message in &report.errors {
            writeln!(output, "    ✗ {message}")?;
        }
    }

    if !report.warnings.is_empty() {
        writeln!(output, "  Warnings:")?;
        for message in &report.warnings {
            writeln!(output, "    ⚠ {message}")?;
        }
    }

    writeln!(
        output,
        "  Summary: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    )?;
    Ok(())
}

pub fn write_text_batch(output: &mut impl Write, batch: &BatchReport, quiet: bool) -> Result<()> {
    for report in &batch.documents {
        let clean = report.status == DocumentStatus::Pass && report.warnings.is_empty();
        if quiet && clean {
            continue;
        }
        write_text_report(output, report)?;
        writeln!(output)?;
    }

    if batch.document_count > 1 {
        writeln!(
            output,
            "Validated {} document(s): {} failed",
            batch.document_count, batch.failed_count
        )?;
    }
    Ok(())
}
