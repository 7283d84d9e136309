use thiserror::Error;

use dstv_parser::ParseError;
use dstv_validate::ValidationReport;

/// Errors at the top-level import boundary (spec §7, plus file IO).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read '{path}': {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("unsupported file extension '{extension}' (expected .nc or .nc1-.nc9)")]
    UnsupportedExtension { extension: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("validation failed in Strict mode: {} error(s)", .0.errors.len())]
    Validation(ValidationReport),

    #[error(transparent)]
    Service(#[from] csg_service::ServiceError),

    #[error("cut execution failed on element '{element_id}': {source}")]
    Cut { element_id: String, #[source] source: cut_ops::CutOpError },

    #[error("no migration path from format version {from} to {to}")]
    MigrationFailed { from: u32, to: u32 },
}
