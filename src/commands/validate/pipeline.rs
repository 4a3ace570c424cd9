use tracing::debug;

use super::blocks::{block_is_declared, extract_block};
use super::content::{check_doctype, check_human_docs, check_instructions};
use super::metadata::validate_metadata;
use crate::contract::{BlockSpec, HUMAN_BLOCK, INSTRUCTIONS_BLOCK, METADATA_BLOCK, REQUIRED_BLOCKS};
use crate::model::ValidationResult;

/// Runs every check against one document. Pure: the result depends only on `document`
/// and the format constants.
pub fn validate_document(document: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Some(finding) = check_doctype(document) {
        result.record(finding);
    }

    for block in REQUIRED_BLOCKS {
        if !block_is_declared(document, block.id) {
            result.error(format!("Missing required block: id=\"{}\"", block.id));
        }
    }

    if let Some(raw) = locate(document, &METADATA_BLOCK) {
        validate_metadata(&raw, &mut result);
    }

    if let Some(content) = locate(document, &INSTRUCTIONS_BLOCK) {
        for finding in check_instructions(&content) {
            result.record(finding);
        }
    }

    if let Some(finding) =
        locate(document, &HUMAN_BLOCK).and_then(|content| check_human_docs(&content))
    {
        result.record(finding);
    }

    result
}

fn locate(document: &str, spec: &BlockSpec) -> Option<String> {
    let content = extract_block(document, spec);
    if content.is_none() && block_is_declared(document, spec.id) {
        debug!(block = spec.id, "block declared but no enclosing element could be extracted");
    }
    content
}
