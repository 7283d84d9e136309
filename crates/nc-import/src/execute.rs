//! Component: cut execution (spec §4.F-L).
//!
//! Turns each [`SceneElement`]'s base dimensions into a box mesh, then
//! folds every [`ClassifiedCut`] through the handler registry, accumulating
//! the result mesh and stamping [`CutMetadata`] back onto the element.

use csg_kernel::primitives;
use cut_ops::HandlerRegistry;
use dstv_types::Scene;

use crate::config::ImportConfig;
use crate::errors::ImportError;

/// Executes every element's cuts in place, mutating `scene.elements[*].cut_metadata`.
#[tracing::instrument(skip(scene, config))]
pub fn execute(scene: &mut Scene, config: &ImportConfig) -> Result<(), ImportError> {
    let backend = csg_kernel::MockBackend::new();
    let service = csg_service::CsgService::new(
        std::sync::Arc::new(backend),
        csg_service_config(config),
    );
    let registry = cut_ops::default_registry();

    for element in &mut scene.elements {
        execute_element(element, &registry, &service)?;
    }
    Ok(())
}

fn csg_service_config(config: &ImportConfig) -> csg_service::CsgServiceConfig {
    csg_service::CsgServiceConfig {
        mode: config.performance_mode,
        worker_count: config.worker_count,
        cache_capacity: config.cache_capacity,
        cache_policy: config.cache_policy,
        cache_ttl: config.cache_ttl,
    }
}

fn execute_element(
    element: &mut dstv_types::SceneElement,
    registry: &HandlerRegistry,
    service: &csg_service::CsgService,
) -> Result<(), ImportError> {
    let mut mesh = primitives::box_mesh(
        element.dimensions.length,
        element.dimensions.height,
        element.dimensions.width,
    );

    for (i, cut) in element.cuts.iter().enumerate() {
        let timestamp_ms = i as u64;
        let (next_mesh, metadata) = registry
            .dispatch(&mesh, &cut.feature, cut.descriptor.as_ref(), service, timestamp_ms)
            .map_err(|source| ImportError::Cut { element_id: element.id.clone(), source })?;
        mesh = next_mesh;
        element.cut_metadata.push(metadata);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::{ClassifiedCut, Dimensions, Face, Feature, FeatureType, Material, MaterialClass, Point2, ProfileKind, SceneElement};

    fn element_with_one_cut() -> SceneElement {
        let mut feature = Feature::new("P1", FeatureType::EndCut, Face::Web);
        feature.params.is_transverse = true;
        feature.params.angle = Some(0.0);
        feature.params.points = Some(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 200.0)]);
        feature.params.depth = Some(30.0);

        SceneElement {
            id: "P1".into(),
            kind: ProfileKind::I,
            dimensions: Dimensions { length: 1000.0, height: 200.0, width: 100.0 },
            material: Material { class: MaterialClass::Beam, grade: None, density_kg_m3: 7850.0 },
            position: [0.0; 3],
            rotation: [0.0; 3],
            features: vec![feature.clone()],
            cuts: vec![ClassifiedCut { feature, descriptor: None }],
            cut_metadata: Vec::new(),
        }
    }

    #[test]
    fn executing_a_single_cut_element_stamps_one_cut_metadata() {
        let registry = cut_ops::default_registry();
        let backend = csg_kernel::MockBackend::new();
        let service = csg_service::CsgService::new(
            std::sync::Arc::new(backend),
            csg_service::CsgServiceConfig::default(),
        );
        let mut element = element_with_one_cut();
        execute_element(&mut element, &registry, &service).unwrap();
        assert_eq!(element.cut_metadata.len(), 1);
        assert_eq!(element.cut_metadata[0].kind, dstv_types::CutKind::EndStraight);
    }

    #[test]
    fn an_element_with_no_cuts_leaves_metadata_empty() {
        let registry = cut_ops::default_registry();
        let backend = csg_kernel::MockBackend::new();
        let service = csg_service::CsgService::new(
            std::sync::Arc::new(backend),
            csg_service::CsgServiceConfig::default(),
        );
        let mut element = element_with_one_cut();
        element.cuts.clear();
        execute_element(&mut element, &registry, &service).unwrap();
        assert!(element.cut_metadata.is_empty());
    }
}
