//! DSTV text fixtures used across scenario and integration tests.
//!
//! `st_block` mirrors the orchestrator's own `SAMPLE` test fixture: every
//! positional field gets a real token rather than a blank line, because the
//! block grouper only indexes lines that carry at least one token.

/// A complete 16-field `ST` header block, positional fields filled with
/// inert placeholders except `designation` (index 6) and `length` (index 8).
pub fn st_block(designation: &str, length: f64) -> String {
    format!("ST\nORD1\nPART1\nITEM1\nS355\n1\nI\n{designation}\nDRW1\n{length}\nX\nX\nX\nX\nX\nX\n")
}

/// A single-profile file with no features beyond the header.
pub fn simple_profile(designation: &str, length: f64) -> String {
    format!("{}EN\n", st_block(designation, length))
}

/// A single-profile file with `BO` (hole) records appended before `EN`.
///
/// `face` is written as its own bare trailing letter (`x y d face`, spec
/// §6's literal grammar) rather than glued onto a numeric.
pub fn profile_with_holes(designation: &str, length: f64, holes: &[(&str, f64, f64, f64)]) -> String {
    let mut text = st_block(designation, length);
    text.push_str("BO\n");
    for (face, x, y, d) in holes {
        text.push_str(&format!("{x} {y} {d} {face}\n"));
    }
    text.push_str("EN\n");
    text
}

/// Concatenates N `ST...EN` profile blocks into one multi-profile file.
pub fn multi_profile_file(profiles: &[(&str, f64)]) -> String {
    profiles
        .iter()
        .map(|(designation, length)| simple_profile(designation, *length))
        .collect()
}
