//! Component C: the syntax orchestrator (spec §4.C).
//!
//! Walks the flat token stream, slices it into per-block spans on
//! `BlockStart`/`BlockEnd` boundaries, and dispatches each span to its
//! block parser, assembling one `Profile`. Only a missing `ST` block or
//! an unterminated block are hard errors; everything else degrades to a
//! `ParseWarning`.

use dstv_types::{BlockKeyword, Face, FaceConvention, Profile, ProfileKind, TokenKind};

use crate::blocks::{bo, br, contour, sc, si, st, ParseWarning};
use crate::error::ParseError;
use crate::lexer;

/// The face assumed when a line carries no face letter of its own.
/// Spec §9 leaves this unconstrained; Web is the most common working
/// face for the shapes this pipeline targets.
pub const DEFAULT_FACE: Face = Face::Web;

pub struct ParseOutcome {
    pub profile: Profile,
    pub warnings: Vec<ParseWarning>,
}

pub fn parse(text: &str, convention: FaceConvention) -> Result<ParseOutcome, ParseError> {
    let tokens = lexer::lex(text, convention);
    let mut warnings = Vec::new();

    let mut st_span: Option<&[dstv_types::Token]> = None;
    let mut bo_spans = Vec::new();
    let mut ak_spans = Vec::new();
    let mut ik_spans = Vec::new();
    let mut ko_spans = Vec::new();
    let mut si_spans = Vec::new();
    let mut sc_spans = Vec::new();
    let mut br_spans = Vec::new();
    let mut pu_spans = Vec::new();

    let mut i = 0usize;
    while i < tokens.len() {
        let kw = match &tokens[i].kind {
            TokenKind::BlockStart(kw) => *kw,
            _ => {
                i += 1;
                continue;
            }
        };
        let open_pos = tokens[i].pos;
        let body_start = i + 1;
        let mut j = body_start;
        let mut closed = false;
        while j < tokens.len() {
            match &tokens[j].kind {
                TokenKind::BlockEnd => {
                    closed = true;
                    break;
                }
                TokenKind::BlockStart(_) => break,
                _ => j += 1,
            }
        }
        if !closed {
            warnings.push(ParseWarning::new(
                format!("block {:?} was not terminated with EN before the next block or EOF", kw),
                Some(open_pos),
            ));
        }

        let span = &tokens[body_start..j];
        match kw {
            BlockKeyword::St => st_span = Some(span),
            BlockKeyword::Bo => bo_spans.push(span),
            BlockKeyword::Ak => ak_spans.push(span),
            BlockKeyword::Ik => ik_spans.push(span),
            BlockKeyword::Ko => ko_spans.push(span),
            BlockKeyword::Si => si_spans.push(span),
            BlockKeyword::Sc => sc_spans.push(span),
            BlockKeyword::Br => br_spans.push(span),
            BlockKeyword::Pu => pu_spans.push(span),
            BlockKeyword::En => {}
        }

        i = if closed { j + 1 } else { j };
    }

    let st_span = st_span.ok_or(ParseError::MissingStBlock)?;
    let (header, mut st_warnings) = st::parse_st(st_span);
    warnings.append(&mut st_warnings);
    let code = st::parse_st_code(st_span);
    let kind = ProfileKind::classify(code.as_deref(), &header.designation);

    let mut profile = Profile::new(header);
    profile.kind = kind;

    for span in bo_spans {
        let (mut holes, mut w) = bo::parse_bo(span, DEFAULT_FACE);
        profile.holes.append(&mut holes);
        warnings.append(&mut w);
    }
    for span in pu_spans {
        let (mut holes, mut w) = bo::parse_bo(span, DEFAULT_FACE);
        profile.holes.append(&mut holes);
        warnings.append(&mut w);
    }
    for span in ak_spans {
        let (record, mut w) = contour::parse_contour_block(span, DEFAULT_FACE, false);
        profile.external_cuts.push(record);
        warnings.append(&mut w);
    }
    for span in ik_spans {
        let (record, mut w) = contour::parse_contour_block(span, DEFAULT_FACE, true);
        profile.internal_cuts.push(record);
        warnings.append(&mut w);
    }
    for span in ko_spans {
        let (record, mut w) = contour::parse_contour_block(span, DEFAULT_FACE, true);
        profile.internal_cuts.push(record);
        warnings.append(&mut w);
    }
    for span in sc_spans {
        let (mut records, mut w) = sc::parse_sc(span, DEFAULT_FACE);
        profile.external_cuts.append(&mut records);
        warnings.append(&mut w);
    }
    for span in si_spans {
        let (mut markings, mut w) = si::parse_si(span, DEFAULT_FACE);
        profile.markings.append(&mut markings);
        warnings.append(&mut w);
    }
    for span in br_spans {
        let (mut chamfers, mut w) = br::parse_br(span, DEFAULT_FACE);
        profile.chamfers.append(&mut chamfers);
        warnings.append(&mut w);
    }

    Ok(ParseOutcome { profile, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ST
ORD1
PART1
ITEM1
S355
1
I
HEA400
DRW1
6000
400
300
27
11
24
66.3
2.4

BO
100 200 22
4703.00v 75 22 l 50 45
EN

AK
v
0 0
400 0
400 300
0 300
0 0
EN
";

    #[test]
    fn parses_header_and_features() {
        let outcome = parse(SAMPLE, FaceConvention::Dominant).unwrap();
        assert_eq!(outcome.profile.header.designation, "HEA400");
        assert!(outcome.profile.header.is_usable());
        assert_eq!(outcome.profile.kind, ProfileKind::I);
        assert_eq!(outcome.profile.holes.len(), 2);
        assert_eq!(outcome.profile.external_cuts.len(), 1);
    }

    #[test]
    fn missing_st_block_is_a_hard_error() {
        let err = parse("BO\n1 2 3\nEN\n", FaceConvention::Dominant).unwrap_err();
        assert_eq!(err, ParseError::MissingStBlock);
    }

    #[test]
    fn unterminated_block_becomes_a_warning_not_a_failure() {
        let text = "ST\nORD1\nPART1\nITEM1\nS355\n1\nI\nHEA400\nDRW1\n6000\n400\n300\n27\n11\n24\n66.3\n2.4\nEN\nBO\n1 2 3\n";
        let outcome = parse(text, FaceConvention::Dominant).unwrap();
        assert!(outcome.warnings.iter().any(|w| w.message.contains("not terminated")));
    }
}
