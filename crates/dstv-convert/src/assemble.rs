//! Component E: scene assembly (spec §4.E).
//!
//! Turns one parsed [`Profile`] into a [`SceneElement`]: holes, markings
//! and (non-base-shape) cuts become [`Feature`]s, and every real cut
//! additionally gets a [`ClassifiedCut`] with its geometric descriptor.
//! `cut_metadata` is left empty here — populating it with a detected
//! `CutKind` is the cut-execution engine's job.

use dstv_types::{
    ClassifiedCut, CutParams, CutRecord, CutSubtype, Dimensions, Feature, FeatureType, Material,
    Point2, Profile, Scene, SceneElement,
};

use crate::{classify, descriptor, transverse};

pub fn assemble_element(profile: &Profile, id: impl Into<String>) -> SceneElement {
    let id = id.into();
    let dimensions = Dimensions {
        length: profile.header.length,
        height: profile.header.height.unwrap_or(0.0),
        width: profile.header.width.unwrap_or(0.0),
    };
    let material = Material::from_grade(profile.kind, profile.header.steel_grade.clone());

    let mut features = Vec::new();
    let mut cuts = Vec::new();

    for hole in &profile.holes {
        let mut feature = Feature::new(&id, FeatureType::Hole, hole.face);
        feature.params = CutParams {
            points: Some(vec![Point2::new(hole.x, hole.y)]),
            radius: Some(hole.diameter / 2.0),
            depth: Some(hole.depth),
            ..CutParams::default()
        };
        features.push(feature);
    }

    for cut in profile.all_cuts() {
        if classify::is_base_shape(cut, &profile.header) {
            continue;
        }

        let feature_type = feature_type_of(cut);
        let notch_rect = classify::extract_partial_notch_rectangle(cut);
        let points = notch_rect.map(|r| r.to_vec()).unwrap_or_else(|| cut.contour.points.clone());

        let mut feature = Feature::new(&id, feature_type, cut.face);
        feature.params = CutParams {
            points: Some(points.clone()),
            depth: Some(cut.depth),
            angle: cut.angle,
            is_transverse: cut.is_transverse,
            cut_type: explicit_cut_type(feature_type, cut),
            ..CutParams::default()
        };

        let descriptor_contour = dstv_types::Contour { points, face: cut.face };
        let desc = descriptor::describe(&descriptor_contour);
        cuts.push(ClassifiedCut { feature: feature.clone(), descriptor: Some(desc) });
        features.push(feature);
    }

    if let Some(cut) = transverse::synthesize(profile) {
        let mut feature = Feature::new(&id, FeatureType::EndCut, cut.face);
        feature.params = CutParams {
            points: Some(cut.contour.points.clone()),
            depth: Some(cut.depth),
            is_transverse: true,
            cut_type: Some(dstv_types::ExplicitCutType::EndCut),
            ..CutParams::default()
        };
        let desc = descriptor::describe(&cut.contour);
        cuts.push(ClassifiedCut { feature: feature.clone(), descriptor: Some(desc) });
        features.push(feature);
    }

    for marking in &profile.markings {
        let mut feature = Feature::new(&id, FeatureType::Marking, marking.face);
        feature.params = CutParams {
            points: Some(vec![Point2::new(marking.x, marking.y)]),
            angle: Some(marking.angle),
            depth: marking.depth,
            ..CutParams::default()
        };
        features.push(feature);
    }

    SceneElement {
        id,
        kind: profile.kind,
        dimensions,
        material,
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        features,
        cuts,
        cut_metadata: Vec::new(),
    }
}

pub fn assemble_scene(profiles: &[Profile]) -> Scene {
    let elements = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let id = p.header.part_id.clone().unwrap_or_else(|| format!("part-{i}"));
            assemble_element(p, id)
        })
        .collect();
    Scene::new(elements)
}

fn feature_type_of(cut: &CutRecord) -> FeatureType {
    if classify::is_partial_notch_shape(cut) {
        FeatureType::Notch
    } else if cut.is_transverse {
        FeatureType::EndCut
    } else if cut.internal {
        FeatureType::Notch
    } else {
        FeatureType::Cut
    }
}

fn explicit_cut_type(
    feature_type: FeatureType,
    cut: &CutRecord,
) -> Option<dstv_types::ExplicitCutType> {
    use dstv_types::ExplicitCutType::*;
    match feature_type {
        FeatureType::EndCut => Some(EndCut),
        FeatureType::Notch if classify::is_partial_notch_shape(cut) => Some(PartialNotches),
        FeatureType::Notch => Some(Notch),
        _ if cut.subtype == Some(CutSubtype::Oblique) => Some(Bevel),
        _ => None,
    }
}
