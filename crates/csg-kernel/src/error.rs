use thiserror::Error;

/// Errors from the CSG evaluator boundary (spec §7 GeometryError).
#[derive(Debug, Clone, Error)]
pub enum KernelError {
    #[error("mesh missing position attribute")]
    MissingPositions,

    #[error("mesh has fewer than 3 vertices ({count})")]
    TooFewVertices { count: usize },

    #[error("mesh contains non-finite coordinates")]
    NonFinite,

    #[error("combined vertex count {combined} exceeds budget {max}")]
    VertexBudgetExceeded { combined: usize, max: usize },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("extrusion failed: {reason}")]
    ExtrusionFailed { reason: String },
}
