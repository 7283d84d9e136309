//! Component G: the cut-handler contract (spec §4.G).
//!
//! Every handler is a small, independently testable strategy over one or
//! more [`CutKind`]s. `process` is the template method the dispatcher
//! actually calls; the four named steps exist so tests (and other
//! handlers, via composition) can exercise one stage at a time.

use csg_kernel::{CsgBackend, Mesh};
use dstv_types::{CutKind, CutMetadata, Feature};

use crate::error::CutOpError;

pub trait CutHandler: Send + Sync {
    /// Higher runs first when more than one handler claims a kind.
    fn priority(&self) -> u32;

    fn supported_kinds(&self) -> &'static [CutKind];

    fn can_handle(&self, kind: CutKind) -> bool {
        self.supported_kinds().contains(&kind)
    }

    fn validate(&self, feature: &Feature) -> Result<(), CutOpError>;

    fn create_cut_geometry(&self, feature: &Feature) -> Result<Mesh, CutOpError>;

    fn apply_cut(
        &self,
        base: &Mesh,
        cut_geometry: &Mesh,
        backend: &dyn CsgBackend,
    ) -> Result<Mesh, CutOpError> {
        Ok(backend.boolean(base, cut_geometry, csg_kernel::CsgOp::Subtract)?)
    }

    fn generate_metadata(&self, feature: &Feature, kind: CutKind, timestamp_ms: u64) -> CutMetadata {
        CutMetadata {
            id: feature.id.0.to_string(),
            kind,
            category: kind.category(),
            face: feature.face,
            bounds: feature.params.points.as_deref().and_then(dstv_types::Bounds2::of),
            points: feature.params.points.clone().unwrap_or_default(),
            depth: feature.params.depth.unwrap_or(0.0),
            angle: feature.params.angle,
            timestamp_ms,
        }
    }

    fn process(
        &self,
        base: &Mesh,
        feature: &Feature,
        kind: CutKind,
        backend: &dyn CsgBackend,
        timestamp_ms: u64,
    ) -> Result<(Mesh, CutMetadata), CutOpError> {
        self.validate(feature)?;
        let cut_geometry = self.create_cut_geometry(feature)?;
        let result = self.apply_cut(base, &cut_geometry, backend)?;
        let metadata = self.generate_metadata(feature, kind, timestamp_ms);
        Ok((result, metadata))
    }
}
