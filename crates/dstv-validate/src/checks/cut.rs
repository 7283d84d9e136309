use dstv_types::Profile;

use crate::level::Severity;
use crate::report::{Finding, ValidationReport};

pub fn check(profile: &Profile, level: Severity) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (idx, cut) in profile.all_cuts().enumerate() {
        if cut.contour.points.len() >= 3 && !cut.contour.is_closed() {
            let finding = if level.at_least(Severity::Strict) {
                Finding::error("cut.not_closed", format!("cut #{idx} contour does not close"))
            } else {
                Finding::warning("cut.not_closed", format!("cut #{idx} contour does not close"))
            };
            if level.at_least(Severity::Standard) {
                report.push(finding);
            }
        }

        if !cut.through && cut.depth < 0.0 {
            report.push(Finding::error(
                "cut.negative_depth",
                format!("cut #{idx} is marked partial but has a negative depth ({})", cut.depth),
            ));
        }
    }

    report
}
