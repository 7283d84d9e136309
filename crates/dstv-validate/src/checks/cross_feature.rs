use dstv_types::Profile;

use crate::level::Severity;
use crate::report::{Finding, ValidationReport};

pub fn check(profile: &Profile, level: Severity) -> ValidationReport {
    let mut report = ValidationReport::default();
    if !level.at_least(Severity::Standard) {
        return report;
    }

    for i in 0..profile.holes.len() {
        for j in (i + 1)..profile.holes.len() {
            let (a, b) = (&profile.holes[i], &profile.holes[j]);
            if a.face != b.face {
                continue;
            }
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let dist = (dx * dx + dy * dy).sqrt();
            let min_clearance = (a.diameter + b.diameter) / 2.0;
            if dist < min_clearance {
                let message = format!(
                    "holes #{i} and #{j} on {:?} are overlapping (center distance {dist:.2} < {min_clearance:.2})",
                    a.face
                );
                let finding = if level.at_least(Severity::Strict) {
                    Finding::error("hole.overlap", message)
                } else {
                    Finding::warning("hole.overlap", message)
                };
                report.push(finding);
            }
        }
    }

    report
}
