use dstv_types::Profile;

use crate::report::{Finding, ValidationReport};

pub fn check(profile: &Profile) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (idx, marking) in profile.markings.iter().enumerate() {
        if marking.text.trim().is_empty() {
            report.push(Finding::error("marking.empty_text", format!("marking #{idx} has empty text")));
        }
        if marking.size <= 0.0 {
            report.push(Finding::error(
                "marking.non_positive_size",
                format!("marking #{idx} has a non-positive size ({})", marking.size),
            ));
        }
    }

    report
}
