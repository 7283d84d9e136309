use thiserror::Error;

use csg_kernel::KernelError;

/// Errors surfaced at the CSG service boundary (spec §4.I/J).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("worker thread panicked while evaluating the operation")]
    WorkerPanicked,

    #[error("CSG operation exceeded its 30s budget")]
    TaskTimedOut,
}
