use dstv_types::CutKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CutOpError {
    #[error("feature is not valid for this handler: {reason}")]
    InvalidFeature { reason: String },

    #[error("no registered handler accepted cut kind {kind:?}")]
    NoHandler { kind: CutKind },

    #[error("cut geometry failed: {0}")]
    Geometry(#[from] csg_kernel::KernelError),
}
