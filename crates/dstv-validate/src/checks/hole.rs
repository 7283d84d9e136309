use dstv_types::Profile;

use crate::level::Severity;
use crate::report::{Finding, ValidationReport};

pub fn check(profile: &Profile, level: Severity) -> ValidationReport {
    let mut report = ValidationReport::default();
    let admissible = profile.kind.admissible_faces();

    for (idx, hole) in profile.holes.iter().enumerate() {
        if hole.diameter <= 0.0 {
            report.push(Finding::error(
                "hole.non_positive_diameter",
                format!("hole #{idx} has a non-positive diameter ({})", hole.diameter),
            ));
        }

        if level.at_least(Severity::Standard) && !admissible.contains(&hole.face) {
            report.push(Finding::error(
                "hole.face_not_admissible",
                format!("hole #{idx} is on {:?}, which {:?} does not admit", hole.face, profile.kind),
            ));
        }

        if level.at_least(Severity::Strict) {
            let margin = hole.diameter.max(1.0);
            if hole.x < -margin || hole.x > profile.header.length + margin {
                report.push(Finding::warning(
                    "hole.outside_length",
                    format!("hole #{idx} x={} falls outside the profile length ({})", hole.x, profile.header.length),
                ));
            }
        }
    }

    report
}
