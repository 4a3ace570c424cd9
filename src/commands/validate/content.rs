use crate::contract::{
    DOCTYPE_PREFIX, HUMAN_BLOCK_ID, HUMAN_DOCS_MIN_CHARS, INSTRUCTIONS_BLOCK_ID,
    INSTRUCTIONS_MIN_CHARS, INSTRUCTIONS_STEP_MARKER,
};
use crate::model::Finding;

/// Prefix check only; the rest of the markup is not parsed.
pub fn check_doctype(document: &str) -> Option<Finding> {
    if document.trim().to_lowercase().starts_with(DOCTYPE_PREFIX) {
        None
    } else {
        Some(Finding::error("Missing <!DOCTYPE html> declaration"))
    }
}

pub fn check_instructions(content: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let length = content.trim().chars().count();
    if length < INSTRUCTIONS_MIN_CHARS {
        findings.push(Finding::warning(format!(
            "{INSTRUCTIONS_BLOCK_ID} is very short ({length} chars, expected at least {INSTRUCTIONS_MIN_CHARS})"
        )));
    }

    if !content.contains(INSTRUCTIONS_STEP_MARKER) {
        findings.push(Finding::warning(format!(
            "{INSTRUCTIONS_BLOCK_ID} has no \"{INSTRUCTIONS_STEP_MARKER}\" markers"
        )));
    }

    findings
}

pub fn check_human_docs(content: &str) -> Option<Finding> {
    let length = content.trim().chars().count();
    (length < HUMAN_DOCS_MIN_CHARS).then(|| {
        Finding::warning(format!(
            "{HUMAN_BLOCK_ID} is very short ({length} chars, expected at least {HUMAN_DOCS_MIN_CHARS})"
        ))
    })
}
