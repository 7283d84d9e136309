//! Rich assertion helpers with diagnostic output.
//!
//! Every failure reports expected vs. actual so a test reader doesn't have
//! to reach for a debugger.

use dstv_types::{CutKind, Scene, SceneElement};
use dstv_validate::ValidationReport;

use crate::HarnessError;

pub fn assert_element_count(scene: &Scene, expected: usize, ctx: &str) -> Result<(), HarnessError> {
    let actual = scene.elements.len();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected {expected} scene element(s), got {actual}"),
        })
    }
}

pub fn assert_element<'a>(scene: &'a Scene, id: &str, ctx: &str) -> Result<&'a SceneElement, HarnessError> {
    scene.element(id).ok_or_else(|| HarnessError::ElementNotFound {
        id: id.to_string(),
        ctx: ctx.to_string(),
    })
}

/// Assert every cut on `element` was classified to one of `expected_kinds`,
/// in order, failing with the full observed sequence on mismatch.
pub fn assert_cut_kinds(
    element: &SceneElement,
    expected_kinds: &[CutKind],
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual: Vec<CutKind> = element.cut_metadata.iter().map(|m| m.kind).collect();
    if actual == expected_kinds {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{ctx}] expected cut kinds {expected_kinds:?}, got {actual:?} on element '{}'",
                element.id
            ),
        })
    }
}

pub fn assert_no_errors(report: &ValidationReport, ctx: &str) -> Result<(), HarnessError> {
    if report.is_valid() {
        Ok(())
    } else {
        let codes: Vec<&str> = report.errors.iter().map(|f| f.code).collect();
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected no validation errors, got {codes:?}"),
        })
    }
}

pub fn assert_has_error(report: &ValidationReport, code: &str, ctx: &str) -> Result<(), HarnessError> {
    if report.errors.iter().any(|f| f.code == code) {
        Ok(())
    } else {
        let codes: Vec<&str> = report.errors.iter().map(|f| f.code).collect();
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected error '{code}', got {codes:?}"),
        })
    }
}

pub fn assert_has_warning(report: &ValidationReport, code: &str, ctx: &str) -> Result<(), HarnessError> {
    if report.warnings.iter().any(|f| f.code == code) {
        Ok(())
    } else {
        let codes: Vec<&str> = report.warnings.iter().map(|f| f.code).collect();
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected warning '{code}', got {codes:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn element_count_assertion_reports_both_sides_on_mismatch() {
        let text = fixtures::simple_profile("HEA400", 6000.0);
        let outcome = nc_import::import(text.as_str(), &nc_import::ImportConfig::default()).unwrap();
        let err = assert_element_count(&outcome.scene, 2, "test").unwrap_err();
        assert!(matches!(err, HarnessError::AssertionFailed { .. }));
    }

    #[test]
    fn element_count_assertion_passes_on_match() {
        let text = fixtures::simple_profile("HEA400", 6000.0);
        let outcome = nc_import::import(text.as_str(), &nc_import::ImportConfig::default()).unwrap();
        assert_element_count(&outcome.scene, 1, "test").unwrap();
    }
}
