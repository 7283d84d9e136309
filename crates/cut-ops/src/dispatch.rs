//! Component H: the handler factory/dispatcher (spec §4.H).
//!
//! Builds a priority-ordered index from `CutKind` to the handlers that
//! claim it, so dispatch is a lookup rather than a linear scan over every
//! registered handler on every cut.

use std::collections::BTreeMap;

use csg_kernel::{CsgBackend, Mesh};
use dstv_types::{ContourDescriptor, CutKind, CutMetadata, Feature};

use crate::error::CutOpError;
use crate::handlers::*;
use crate::traits::CutHandler;
use crate::detector;

pub struct HandlerRegistry {
    handlers: Vec<Box<dyn CutHandler>>,
    index: BTreeMap<CutKind, Vec<usize>>,
}

impl HandlerRegistry {
    pub fn new(handlers: Vec<Box<dyn CutHandler>>) -> Self {
        let mut index: BTreeMap<CutKind, Vec<usize>> = BTreeMap::new();
        for (i, handler) in handlers.iter().enumerate() {
            for kind in handler.supported_kinds() {
                index.entry(*kind).or_default().push(i);
            }
        }
        for ids in index.values_mut() {
            ids.sort_by_key(|&i| std::cmp::Reverse(handlers[i].priority()));
        }
        Self { handlers, index }
    }

    pub fn handler_for(&self, kind: CutKind) -> Option<&dyn CutHandler> {
        self.index.get(&kind)?.first().map(|&i| self.handlers[i].as_ref())
    }

    /// Detect `feature`'s cut kind and run the matching handler's full
    /// `validate -> create_cut_geometry -> apply_cut -> generate_metadata`
    /// pipeline, failing with `NoHandler` only if genuinely nothing in the
    /// registry claims the detected kind (shouldn't happen with the
    /// default roster, since every `CutKind` has a handler).
    pub fn dispatch(
        &self,
        base: &Mesh,
        feature: &Feature,
        descriptor: Option<&ContourDescriptor>,
        backend: &dyn CsgBackend,
        timestamp_ms: u64,
    ) -> Result<(Mesh, CutMetadata), CutOpError> {
        let kind = detector::detect(feature, descriptor);
        let handler = self.handler_for(kind).ok_or(CutOpError::NoHandler { kind })?;
        handler.process(base, feature, kind, backend, timestamp_ms)
    }
}

/// The full roster, in the order handler priority ties fall back to.
pub fn default_registry() -> HandlerRegistry {
    let handlers: Vec<Box<dyn CutHandler>> = vec![
        Box::new(EndStraightHandler),
        Box::new(EndAngleHandler),
        Box::new(EndChamferHandler),
        Box::new(EndCompoundHandler),
        Box::new(BevelHandler),
        Box::new(ChamferHandler),
        Box::new(SlotHandler),
        Box::new(CopingHandler),
        Box::new(NotchRectangularHandler),
        Box::new(NotchCurvedHandler),
        Box::new(NotchCompoundHandler),
        Box::new(NotchPartialHandler),
        Box::new(ContourHandler),
        Box::new(StraightThroughPartialHandler),
        Box::new(TransverseFallbackHandler),
    ];
    HandlerRegistry::new(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cut_kind_has_a_handler() {
        let registry = default_registry();
        for kind in ALL_KINDS {
            assert!(registry.handler_for(*kind).is_some(), "no handler for {kind:?}");
        }
    }

    const ALL_KINDS: &[CutKind] = &[
        CutKind::EndStraight,
        CutKind::EndAngle,
        CutKind::EndChamfer,
        CutKind::EndCompound,
        CutKind::BevelCut,
        CutKind::ChamferCut,
        CutKind::SlotCut,
        CutKind::CopingCut,
        CutKind::NotchRectangular,
        CutKind::NotchPartial,
        CutKind::NotchCurved,
        CutKind::NotchCompound,
        CutKind::CutWithNotches,
        CutKind::ContourCut,
        CutKind::ExteriorCut,
        CutKind::InteriorCut,
        CutKind::UnrestrictedContour,
        CutKind::TransverseCut,
        CutKind::StraightCut,
        CutKind::ThroughCut,
        CutKind::PartialCut,
    ];
}
