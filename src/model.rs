use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Findings for one document, split by severity in check-execution order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn record(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding.message),
            Severity::Warning => self.warnings.push(finding.message),
        }
    }

    /// Only errors decide the verdict.
    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pass,
    Fail,
    IoError,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::IoError => "io_error",
        }
    }

    pub fn is_failure(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub status: DocumentStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub io_error: Option<String>,
}

impl DocumentReport {
    pub fn from_result(path: String, result: ValidationResult) -> Self {
        let status = if result.failed() {
            DocumentStatus::Fail
        } else {
            DocumentStatus::Pass
        };

        Self {
            path,
            status,
            errors: result.errors,
            warnings: result.warnings,
            io_error: None,
        }
    }

    pub fn io_failure(path: String, reason: String) -> Self {
        Self {
            path,
            status: DocumentStatus::IoError,
            errors: Vec::new(),
            warnings: Vec::new(),
            io_error: Some(reason),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub report_version: u32,
    pub generated_at: String,
    pub document_count: usize,
    pub failed_count: usize,
    pub status: DocumentStatus,
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    pub fn new(generated_at: String, documents: Vec<DocumentReport>) -> Self {
        let failed_count = documents
            .iter()
            .filter(|report| report.status.is_failure())
            .count();

        Self {
            report_version: 1,
            generated_at,
            document_count: documents.len(),
            failed_count,
            status: if failed_count == 0 {
                DocumentStatus::Pass
            } else {
                DocumentStatus::Fail
            },
            documents,
        }
    }

    pub fn failed(&self) -> bool {
        self.failed_count > 0
    }
}
