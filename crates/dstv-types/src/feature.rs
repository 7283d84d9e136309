use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::Point2;
use crate::token::Face;

/// Identifier for a cut-engine feature. Stable within one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub Uuid);

impl FeatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::new()
    }
}

/// Broad category of a cut-engine feature, independent of its detected
/// `CutKind` (spec §3 Feature: `FeatureType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Cut,
    EndCut,
    Notch,
    Hole,
    Marking,
}

/// An explicit cut-type hint, when the converter or an upstream caller
/// already knows what kind of cut this is (spec §4.F step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplicitCutType {
    EndCut,
    Bevel,
    Chamfer,
    Slot,
    Coping,
    Notch,
    PartialNotches,
}

/// The parameter bag a cut-engine feature carries. Every field the
/// detector or a handler might need is named explicitly rather than
/// looked up in a loose map (spec §9 design note).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CutParams {
    pub points: Option<Vec<Point2>>,
    pub depth: Option<f64>,
    pub angle: Option<f64>,
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub cut_type: Option<ExplicitCutType>,
    pub is_transverse: bool,
    pub bevel_angle: Option<f64>,
    pub chamfer_size: Option<f64>,
    /// Distance in mm along the profile's length axis, used for the
    /// "near an end" proximity test (spec §4.F step 3).
    pub position: Option<f64>,
}

impl CutParams {
    pub fn point_count(&self) -> usize {
        self.points.as_ref().map(|p| p.len()).unwrap_or(0)
    }
}

/// A feature as seen by the cut-execution engine: identity, type tag,
/// owning face, and its parameter bag (spec §3 Feature, cut-engine view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub element_id: String,
    pub feature_type: FeatureType,
    pub face: Face,
    pub params: CutParams,
}

impl Feature {
    pub fn new(element_id: impl Into<String>, feature_type: FeatureType, face: Face) -> Self {
        Self {
            id: FeatureId::new(),
            element_id: element_id.into(),
            feature_type,
            face,
            params: CutParams::default(),
        }
    }
}
