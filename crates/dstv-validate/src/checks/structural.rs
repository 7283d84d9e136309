use dstv_types::Profile;

use crate::report::{Finding, ValidationReport};

const STEEL_GRADE_WHITELIST: &[&str] = &[
    "S235", "S275", "S355", "S420", "S460", "A36", "A572", "A992", "GRADE 43", "GRADE 50",
    "GRADE 55",
];

fn grade_is_whitelisted(grade: &str) -> bool {
    let normalized = grade.trim().to_ascii_uppercase();
    STEEL_GRADE_WHITELIST.iter().any(|g| normalized.starts_with(g))
}

pub fn check(profile: &Profile, max_profile_length_mm: f64) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !profile.header.is_usable() {
        report.push(Finding::error(
            "header.unusable",
            "profile header has no usable designation and/or a non-positive length",
        ));
    }
    if profile.header.length < 0.0 {
        report.push(Finding::error("header.negative_length", "profile length is negative"));
    }
    if profile.header.length > max_profile_length_mm {
        report.push(Finding::warning(
            "header.length_exceeds_max",
            format!(
                "profile length {} exceeds the configured maximum {}",
                profile.header.length, max_profile_length_mm
            ),
        ));
    }
    if let Some(width) = profile.header.width {
        if width <= 0.0 {
            report.push(Finding::error("header.non_positive_width", "profile width must be positive"));
        }
    }
    if let Some(height) = profile.header.height {
        if height <= 0.0 {
            report.push(Finding::error(
                "header.non_positive_height",
                "profile height must be positive",
            ));
        }
    }
    if let Some(grade) = &profile.header.steel_grade {
        if !grade.trim().is_empty() && !grade_is_whitelisted(grade) {
            report.push(Finding::warning(
                "header.steel_grade_unrecognized",
                format!("steel grade '{grade}' is not on the recognized whitelist"),
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::ProfileHeader;

    #[test]
    fn length_over_budget_is_a_warning_not_an_error() {
        let profile = Profile::new(ProfileHeader {
            designation: "HEA400".into(),
            length: 25_000.0,
            ..Default::default()
        });
        let report = check(&profile, 20_000.0);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|f| f.code == "header.length_exceeds_max"));
    }

    #[test]
    fn unrecognized_steel_grade_is_a_warning() {
        let profile = Profile::new(ProfileHeader {
            designation: "HEA400".into(),
            length: 6000.0,
            steel_grade: Some("XX999".into()),
            ..Default::default()
        });
        let report = check(&profile, 20_000.0);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|f| f.code == "header.steel_grade_unrecognized"));
    }

    #[test]
    fn whitelisted_grade_is_silent() {
        let profile = Profile::new(ProfileHeader {
            designation: "HEA400".into(),
            length: 6000.0,
            steel_grade: Some("S355JR".into()),
            ..Default::default()
        });
        let report = check(&profile, 20_000.0);
        assert!(report.warnings.is_empty());
    }
}
