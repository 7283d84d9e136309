//! `ST` block parser: the profile header (spec §4.B).
//!
//! Fields are positional, one per line, in a fixed order. Field 6 is the
//! explicit profile code (`M`/`R`/`I`/`U`/`L`/`T`) fed to
//! `ProfileKind::classify` alongside the designation on field 7; the code
//! itself has no slot in `ProfileHeader`, so `parse_st_code` reads it back
//! out of the same token span.

use dstv_types::ProfileHeader;

use super::{first_text, group_lines, numbers, ParseWarning};

pub fn parse_st(tokens: &[dstv_types::Token]) -> (ProfileHeader, Vec<ParseWarning>) {
    let lines = group_lines(tokens);
    let mut header = ProfileHeader::default();
    let mut warnings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        match idx {
            0 => header.order_number = first_text(line),
            1 => header.part_id = first_text(line),
            2 => header.item_number = first_text(line),
            3 => header.steel_grade = first_text(line),
            4 => header.quantity = numbers(line).first().map(|(_, n)| *n as u32),
            5 => {} // profile code; see `parse_st_code`.
            6 => header.designation = first_text(line).unwrap_or_default(),
            7 => header.drawing_number = first_text(line),
            8 => header.length = numbers(line).first().map(|(_, n)| *n).unwrap_or(0.0),
            9 => header.height = numbers(line).first().map(|(_, n)| *n),
            10 => header.width = numbers(line).first().map(|(_, n)| *n),
            11 => header.radius = numbers(line).first().map(|(_, n)| *n),
            12 => header.web_thickness = numbers(line).first().map(|(_, n)| *n),
            13 => header.flange_thickness = numbers(line).first().map(|(_, n)| *n),
            14 => header.weight = numbers(line).first().map(|(_, n)| *n),
            15 => header.painting_surface = numbers(line).first().map(|(_, n)| *n),
            16 => header.reserved = first_text(line),
            _ => warnings.push(ParseWarning::new(
                format!("ST block has an unexpected extra line (#{})", idx + 1),
                line.tokens.first().map(|t| t.pos),
            )),
        }
    }

    if !header.is_usable() {
        warnings.push(ParseWarning::new(
            "ST block missing a usable designation/length; profile will be marked unusable",
            None,
        ));
    }

    (header, warnings)
}

/// The raw field-6 profile code, read independently of `parse_st` since it
/// has no home in `ProfileHeader` (spec §4.B classification rule).
pub fn parse_st_code(tokens: &[dstv_types::Token]) -> Option<String> {
    group_lines(tokens).get(5).and_then(first_text)
}
