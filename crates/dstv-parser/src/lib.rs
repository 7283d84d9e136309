//! DSTV/NC lexer, block parsers and syntax orchestrator (spec §4.A-C).
//!
//! [`lexer::lex`] turns raw text into tokens, the `blocks` submodules turn
//! one block's tokens into a typed record, and [`orchestrator::parse`]
//! ties both together into a single best-effort [`Profile`](dstv_types::Profile).

pub mod blocks;
pub mod error;
pub mod lexer;
pub mod orchestrator;

pub use blocks::ParseWarning;
pub use error::ParseError;
pub use orchestrator::{parse, ParseOutcome, DEFAULT_FACE};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::lexer::lex_default;

    proptest! {
        #[test]
        fn lexing_is_deterministic_for_arbitrary_text(s in "[ -~\n]{0,200}") {
            prop_assert_eq!(lex_default(&s), lex_default(&s));
        }

        #[test]
        fn lexing_never_panics_on_arbitrary_bytes(s in "\\PC{0,300}") {
            let _ = lex_default(&s);
        }
    }
}
