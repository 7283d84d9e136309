use serde::{Deserialize, Serialize};

use crate::profile::{Bounds2, Point2};
use crate::token::Face;

/// Closed tagged variant of cut kinds the detector can produce (spec §3
/// CutKind). Every feature maps to exactly one of these (invariant 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CutKind {
    EndStraight,
    EndAngle,
    EndChamfer,
    EndCompound,
    BevelCut,
    ChamferCut,
    SlotCut,
    CopingCut,
    NotchRectangular,
    NotchPartial,
    NotchCurved,
    NotchCompound,
    CutWithNotches,
    ContourCut,
    ExteriorCut,
    InteriorCut,
    UnrestrictedContour,
    TransverseCut,
    StraightCut,
    ThroughCut,
    PartialCut,
}

/// The three families a `CutKind` is grouped into for metadata purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutCategory {
    Interior,
    Exterior,
    Transverse,
}

impl CutKind {
    /// Coarse category used for stamping `CutMetadata` and for reporting.
    pub fn category(self) -> CutCategory {
        use CutKind::*;
        match self {
            InteriorCut | NotchRectangular | NotchPartial | NotchCurved | NotchCompound
            | CutWithNotches | SlotCut => CutCategory::Interior,
            TransverseCut => CutCategory::Transverse,
            ExteriorCut | EndStraight | EndAngle | EndChamfer | EndCompound | BevelCut
            | ChamferCut | CopingCut | ContourCut | UnrestrictedContour | StraightCut
            | ThroughCut | PartialCut => CutCategory::Exterior,
        }
    }
}

/// Stable record describing a realized cut, stamped onto the result mesh's
/// user-data by a handler's `generate_metadata` (spec §3 CutMetadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutMetadata {
    pub id: String,
    pub kind: CutKind,
    pub category: CutCategory,
    pub face: Face,
    pub bounds: Option<Bounds2>,
    pub points: Vec<Point2>,
    pub depth: f64,
    pub angle: Option<f64>,
    /// Milliseconds since an arbitrary epoch, supplied by the caller so the
    /// type stays free of wall-clock access (this crate has no I/O).
    pub timestamp_ms: u64,
}
