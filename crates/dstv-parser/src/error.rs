use dstv_types::{BlockKeyword, SourcePos};
use thiserror::Error;

/// Structural parse failures (spec §7). Malformed field values never
/// reach here — they become `ParseWarning`s collected alongside a
/// best-effort `Profile`.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no ST block found; a DSTV file must open with a profile header")]
    MissingStBlock,

    #[error("block {keyword:?} opened at {pos:?} was never closed with EN")]
    UnterminatedBlock { keyword: BlockKeyword, pos: SourcePos },
}
