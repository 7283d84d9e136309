//! Component: the parse -> validate -> convert pipeline (spec §2, §4.A-E).
//!
//! A DSTV file is a sequence of `ST ... EN` profile records (spec §6); the
//! orchestrator crate assembles exactly one `Profile` per call, so this
//! module splits the raw text into per-profile segments before handing each
//! one to [`dstv_parser::parse`].

use dstv_parser::ParseWarning;
use dstv_types::{Profile, Scene};
use dstv_validate::ValidationReport;

use crate::config::ImportConfig;
use crate::errors::ImportError;

pub struct PipelineOutcome {
    pub scene: Scene,
    pub profiles: Vec<Profile>,
    pub report: ValidationReport,
    pub warnings: Vec<ParseWarning>,
}

#[tracing::instrument(skip(text, config))]
pub fn run(text: &str, config: &ImportConfig) -> Result<PipelineOutcome, ImportError> {
    let mut profiles = Vec::new();
    let mut warnings = Vec::new();

    for segment in split_profiles(text) {
        let outcome = dstv_parser::parse(segment, config.face_convention)?;
        profiles.push(outcome.profile);
        warnings.extend(outcome.warnings);
    }

    let report = dstv_validate::validate_profiles_with_limits(
        &profiles,
        config.validation_level,
        config.max_profile_length_mm,
    );

    if config.validation_level == dstv_validate::Severity::Strict && !report.is_valid() {
        return Err(ImportError::Validation(report));
    }

    let scene = dstv_convert::assemble_scene(&profiles);

    tracing::debug!(profiles = profiles.len(), warnings = warnings.len(), "pipeline complete");

    Ok(PipelineOutcome { scene, profiles, report, warnings })
}

/// Splits raw DSTV text into one segment per `ST ... EN` profile record, by
/// locating lines whose trimmed, case-insensitive content is exactly `ST`.
/// A file with no such line is returned as a single segment, so a missing
/// `ST` block still reaches the orchestrator and produces its usual hard
/// error rather than silently vanishing here.
fn split_profiles(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0usize;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']).trim();
        if trimmed.eq_ignore_ascii_case("st") {
            starts.push(offset);
        }
        offset += line.len();
    }

    if starts.is_empty() {
        return vec![text];
    }

    let mut segments = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        segments.push(&text[start..end]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A complete `ST` block: 16 non-blank positional lines (blank lines
    /// carry no tokens and are skipped entirely by the block grouper, so
    /// every field needs a placeholder to keep field indices aligned).
    fn st_block(designation: &str, length: f64) -> String {
        format!("ST\nX\nX\nX\nX\n1\nI\n{designation}\nX\n{length}\nX\nX\nX\nX\nX\nX\nX\n")
    }

    #[test]
    fn splits_a_file_with_two_profiles() {
        let text = format!(
            "{}EN\n{}EN\n",
            st_block("HEA400", 6000.0),
            st_block("HEA300", 4000.0)
        );
        let segments = split_profiles(&text);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].contains("HEA400"));
        assert!(segments[1].contains("HEA300"));
    }

    #[test]
    fn single_profile_file_is_one_segment() {
        let text = format!("{}EN\n", st_block("HEA400", 6000.0));
        assert_eq!(split_profiles(&text).len(), 1);
    }

    #[test]
    fn text_with_no_st_line_is_passed_through_so_the_parser_reports_the_hard_error() {
        let text = "BO\n1 2 3\nEN\n";
        let segments = split_profiles(text);
        assert_eq!(segments.len(), 1);
        let err = run(text, &ImportConfig::default()).unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn simple_profile_pipeline_produces_one_scene_element() {
        let text = format!("{}EN\n", st_block("HEA400", 6000.0));
        let outcome = run(&text, &ImportConfig::default()).unwrap();
        assert_eq!(outcome.scene.elements.len(), 1);
        assert_eq!(outcome.scene.elements[0].kind, dstv_types::ProfileKind::I);
    }
}
