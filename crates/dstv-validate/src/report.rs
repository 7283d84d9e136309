use serde::{Deserialize, Serialize};

/// How severe a single finding is. Errors make the report invalid;
/// warnings never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingSeverity {
    Error,
    Warning,
}

/// One validation finding, tagged with a stable machine-readable code so
/// downstream tooling can filter on it without string-matching messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub code: &'static str,
    pub message: String,
    pub severity: FindingSeverity,
}

impl Finding {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), severity: FindingSeverity::Error }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), severity: FindingSeverity::Warning }
    }
}

/// The validator never throws; every run returns this report (spec §4.D).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            FindingSeverity::Error => self.errors.push(finding),
            FindingSeverity::Warning => self.warnings.push(finding),
        }
    }

    pub fn merge(&mut self, mut other: ValidationReport) {
        self.errors.append(&mut other.errors);
        self.warnings.append(&mut other.warnings);
    }
}
