//! Fixed constants of the HC document format. These mirror the external format
//! definition and are never discovered from the documents themselves.

use serde::Serialize;

pub const DOCTYPE_PREFIX: &str = "<!doctype html>";

pub const METADATA_BLOCK_ID: &str = "hc-metadata";
pub const INSTRUCTIONS_BLOCK_ID: &str = "hc-instructions";
pub const HUMAN_BLOCK_ID: &str = "hc-human";

pub const EXPECTED_HC_VERSION: &str = "1.1";

pub const REQUIRED_METADATA_FIELDS: [&str; 7] = [
    "hc_version",
    "hc_type",
    "artifact_id",
    "version",
    "created",
    "updated",
    "summary",
];

pub const ALLOWED_HC_TYPES: [&str; 5] = ["skill", "agent", "workflow", "prompt", "tool"];

pub const TIMESTAMP_FIELDS: [&str; 2] = ["created", "updated"];

pub const SUMMARY_MIN_TOKENS: usize = 10;
pub const SUMMARY_TARGET_TOKENS: (usize, usize) = (50, 100);
pub const INSTRUCTIONS_MIN_CHARS: usize = 100;
pub const INSTRUCTIONS_STEP_MARKER: &str = "Step";
pub const HUMAN_DOCS_MIN_CHARS: usize = 200;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// `<script ...>` element; content runs to the first `</script>`.
    Script,
    /// Any other element; content runs to the first closing tag of the same name.
    Container,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BlockSpec {
    pub id: &'static str,
    pub kind: BlockKind,
    pub purpose: &'static str,
}

pub const METADATA_BLOCK: BlockSpec = BlockSpec {
    id: METADATA_BLOCK_ID,
    kind: BlockKind::Script,
    purpose: "machine metadata (JSON)",
};

pub const INSTRUCTIONS_BLOCK: BlockSpec = BlockSpec {
    id: INSTRUCTIONS_BLOCK_ID,
    kind: BlockKind::Script,
    purpose: "execution instructions",
};

pub const HUMAN_BLOCK: BlockSpec = BlockSpec {
    id: HUMAN_BLOCK_ID,
    kind: BlockKind::Container,
    purpose: "human-readable documentation",
};

pub const REQUIRED_BLOCKS: [BlockSpec; 3] = [METADATA_BLOCK, INSTRUCTIONS_BLOCK, HUMAN_BLOCK];

pub fn artifact_id_pattern() -> String {
    format!(
        r"^hc-(?:{})-[a-z0-9]+(?:-[a-z0-9]+)*-[0-9]+$",
        ALLOWED_HC_TYPES.join("|")
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractRules {
    pub doctype_prefix: &'static str,
    pub required_blocks: Vec<BlockSpec>,
    pub expected_hc_version: &'static str,
    pub required_metadata_fields: Vec<&'static str>,
    pub allowed_hc_types: Vec<&'static str>,
    pub artifact_id_pattern: String,
    pub timestamp_fields: Vec<&'static str>,
    pub summary_min_tokens: usize,
    pub summary_target_tokens: (usize, usize),
    pub instructions_min_chars: usize,
    pub instructions_step_marker: &'static str,
    pub human_docs_min_chars: usize,
}

impl ContractRules {
    pub fn current() -> Self {
        Self {
            doctype_prefix: DOCTYPE_PREFIX,
            required_blocks: REQUIRED_BLOCKS.to_vec(),
            expected_hc_version: EXPECTED_HC_VERSION,
            required_metadata_fields: REQUIRED_METADATA_FIELDS.to_vec(),
            allowed_hc_types: ALLOWED_HC_TYPES.to_vec(),
            artifact_id_pattern: artifact_id_pattern(),
            timestamp_fields: TIMESTAMP_FIELDS.to_vec(),
            summary_min_tokens: SUMMARY_MIN_TOKENS,
            summary_target_tokens: SUMMARY_TARGET_TOKENS,
            instructions_min_chars: INSTRUCTIONS_MIN_CHARS,
            instructions_step_marker: INSTRUCTIONS_STEP_MARKER,
            human_docs_min_chars: HUMAN_DOCS_MIN_CHARS,
        }
    }
}
