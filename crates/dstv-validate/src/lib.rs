//! Component D: the validator (spec §4.D).
//!
//! Never throws — every call returns a [`ValidationReport`] of errors and
//! warnings at the requested [`Severity`]. Structural/per-profile/hole/
//! cut/marking checks run per profile; cross-feature checks run within a
//! profile; multi-profile checks run across a whole imported scene.

pub mod checks;
pub mod level;
pub mod report;

use dstv_types::Profile;

pub use level::Severity;
pub use report::{Finding, FindingSeverity, ValidationReport};

/// Default `maxProfileLength`, mm (spec §4.D structural checks).
pub const DEFAULT_MAX_PROFILE_LENGTH_MM: f64 = 20_000.0;

#[tracing::instrument(skip(profile), fields(designation = %profile.header.designation))]
pub fn validate_profile(profile: &Profile, level: Severity) -> ValidationReport {
    validate_profile_with_limits(profile, level, DEFAULT_MAX_PROFILE_LENGTH_MM)
}

pub fn validate_profile_with_limits(
    profile: &Profile,
    level: Severity,
    max_profile_length_mm: f64,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.merge(checks::structural::check(profile, max_profile_length_mm));
    report.merge(checks::hole::check(profile, level));
    report.merge(checks::cut::check(profile, level));
    report.merge(checks::marking::check(profile));
    report.merge(checks::cross_feature::check(profile, level));
    report
}

pub fn validate_profiles(profiles: &[Profile], level: Severity) -> ValidationReport {
    validate_profiles_with_limits(profiles, level, DEFAULT_MAX_PROFILE_LENGTH_MM)
}

pub fn validate_profiles_with_limits(
    profiles: &[Profile],
    level: Severity,
    max_profile_length_mm: f64,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for profile in profiles {
        report.merge(validate_profile_with_limits(profile, level, max_profile_length_mm));
    }
    report.merge(checks::multi_profile::check(profiles, level));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::{Face, Hole, HoleExtra, HoleTypeTag, Profile, ProfileHeader};

    fn usable_header() -> ProfileHeader {
        ProfileHeader {
            designation: "HEA400".into(),
            length: 6000.0,
            part_id: Some("P1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn unusable_header_is_an_error() {
        let profile = Profile::new(ProfileHeader::default());
        let report = validate_profile(&profile, Severity::Basic);
        assert!(!report.is_valid());
    }

    #[test]
    fn usable_profile_with_no_features_is_valid() {
        let profile = Profile::new(usable_header());
        let report = validate_profile(&profile, Severity::Strict);
        assert!(report.is_valid());
    }

    #[test]
    fn non_admissible_face_is_flagged_at_standard() {
        let mut profile = Profile::new(usable_header());
        profile.holes.push(Hole {
            x: 100.0,
            y: 0.0,
            diameter: 20.0,
            face: Face::BottomFlange,
            kind: HoleTypeTag::Round,
            depth: Hole::THROUGH,
            extra: HoleExtra::None,
        });
        // HEA400 (ProfileKind::I) admits BottomFlange, so pick an L-shaped
        // designation instead, which does not.
        profile.kind = dstv_types::ProfileKind::L;
        let report = validate_profile(&profile, Severity::Standard);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|f| f.code == "hole.face_not_admissible"));
    }

    #[test]
    fn duplicate_part_ids_flagged_across_profiles() {
        let p1 = Profile::new(usable_header());
        let p2 = Profile::new(usable_header());
        let report = validate_profiles(&[p1, p2], Severity::Standard);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|f| f.code == "profile.duplicate_part_id"));
    }
}
