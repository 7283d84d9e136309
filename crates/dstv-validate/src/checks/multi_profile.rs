use std::collections::HashMap;

use dstv_types::Profile;

use crate::level::Severity;
use crate::report::{Finding, ValidationReport};

pub fn check(profiles: &[Profile], level: Severity) -> ValidationReport {
    let mut report = ValidationReport::default();
    if !level.at_least(Severity::Standard) {
        return report;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for profile in profiles {
        if let Some(part_id) = profile.header.part_id.as_deref() {
            if part_id.trim().is_empty() {
                continue;
            }
            let count = seen.entry(part_id).or_insert(0);
            *count += 1;
            if *count == 2 {
                report.push(Finding::error(
                    "profile.duplicate_part_id",
                    format!("part id {part_id:?} appears on more than one profile"),
                ));
            }
        }
    }

    report
}
