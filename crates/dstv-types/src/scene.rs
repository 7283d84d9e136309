use serde::{Deserialize, Serialize};

use crate::cut_kind::CutMetadata;
use crate::feature::Feature;
use crate::profile::{Bounds2, MaterialClass, ProfileKind};

/// Default steel density, kg/m^3 (spec §4.E Scene element assembly).
pub const DEFAULT_STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Overall dimensions of a scene element, mm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub height: f64,
    pub width: f64,
}

/// Material appearance/classification record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub class: MaterialClass,
    pub grade: Option<String>,
    pub density_kg_m3: f64,
}

impl Material {
    pub fn from_grade(kind: ProfileKind, grade: Option<String>) -> Self {
        Self {
            class: kind.into(),
            grade,
            density_kg_m3: DEFAULT_STEEL_DENSITY_KG_M3,
        }
    }
}

/// One classified cut carried on a scene element, pairing the raw feature
/// with the classification the cut engine will later refine further.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedCut {
    pub feature: Feature,
    pub descriptor: Option<ContourDescriptor>,
}

/// Geometric descriptors computed per cut contour (spec §4.E).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourDescriptor {
    pub area: f64,
    pub perimeter: f64,
    pub shape: ContourShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourShape {
    Rectangular,
    Circular,
    Polygonal,
    Complex,
}

/// A normalized scene element assembled from one validated `Profile`
/// (spec §4.E Scene element assembly).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneElement {
    pub id: String,
    pub kind: ProfileKind,
    pub dimensions: Dimensions,
    pub material: Material,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub features: Vec<Feature>,
    pub cuts: Vec<ClassifiedCut>,
    pub cut_metadata: Vec<CutMetadata>,
}

/// Scene-level axis-aligned bounds across all elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl SceneBounds {
    pub fn from_elements(elements: &[SceneElement]) -> Self {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for el in elements {
            let lo = el.position;
            let hi = [
                el.position[0] + el.dimensions.length,
                el.position[1] + el.dimensions.height,
                el.position[2] + el.dimensions.width,
            ];
            for i in 0..3 {
                min[i] = min[i].min(lo[i]).min(hi[i]);
                max[i] = max[i].max(lo[i]).max(hi[i]);
            }
        }
        if elements.is_empty() {
            min = [0.0; 3];
            max = [0.0; 3];
        }
        Self { min, max }
    }
}

/// The top-level parsed/converted output: id-keyed elements plus bounds
/// (spec §6 "Profile / scene output").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub elements: Vec<SceneElement>,
    pub bounds: SceneBounds,
}

impl Scene {
    pub fn new(elements: Vec<SceneElement>) -> Self {
        let bounds = SceneBounds::from_elements(&elements);
        Self { elements, bounds }
    }

    pub fn element(&self, id: &str) -> Option<&SceneElement> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// AABB reused by descriptor/validation code that only has Bounds2 to hand.
pub fn bounds2_area(b: Bounds2) -> f64 {
    b.width().max(0.0) * b.height().max(0.0)
}
