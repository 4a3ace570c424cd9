use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::RulesArgs;
use crate::contract::{BlockKind, ContractRules};

pub fn run(args: RulesArgs) -> Result<()> {
    let rules = ContractRules::current();
    let mut output = io::BufWriter::new(io::stdout().lock());

    if args.json {
        serde_json::to_writer_pretty(&mut output, &rules)
            .context("failed to serialize rules json output")?;
        writeln!(output)?;
    } else {
        write_text_rules(&mut output, &rules)?;
    }

    output.flush()?;
    Ok(())
}

fn write_text_rules(output: &mut impl Write, rules: &ContractRules) -> Result<()> {
    writeln!(output, "Doctype prefix: {}", rules.doctype_prefix)?;
    writeln!(output, "Required blocks:")?;
    for block in &rules.required_blocks {
        let kind = match block.kind {
            BlockKind::Script => "script",
            BlockKind::Container => "container",
        };
        writeln!(output, "  id=\"{}\" ({kind}): {}", block.id, block.purpose)?;
    }
    writeln!(output, "Expected hc_version: {}", rules.expected_hc_version)?;
    writeln!(
        output,
        "Required metadata fields: {}",
        rules.required_metadata_fields.join(", ")
    )?;
    writeln!(output, "Allowed hc_type values: {}", rules.allowed_hc_types.join(", "))?;
    writeln!(output, "artifact_id pattern: {}", rules.artifact_id_pattern)?;
    writeln!(output, "Timestamp fields: {}", rules.timestamp_fields.join(", "))?;
    writeln!(
        output,
        "Summary: at least {} words (target {}-{} tokens)",
        rules.summary_min_tokens, rules.summary_target_tokens.0, rules.summary_target_tokens.1
    )?;
    writeln!(
        output,
        "Instructions: at least {} chars, must mention \"{}\"",
        rules.instructions_min_chars, rules.instructions_step_marker
    )?;
    writeln!(output, "Human docs: at least {} chars", rules.human_docs_min_chars)?;
    Ok(())
}
