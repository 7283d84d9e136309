//! Shared data model for the DSTV/NC import pipeline and cut-execution
//! engine: lexical tokens, profile records, cut-engine features, cut
//! kinds, and the normalized scene the converter produces.
//!
//! This crate has no I/O and no behavior beyond simple classification
//! helpers (`ProfileKind::classify`, `CutKind::category`) — every stage
//! downstream builds these types, it doesn't mutate them in place.

pub mod cut_kind;
pub mod feature;
pub mod profile;
pub mod scene;
pub mod token;

pub use cut_kind::{CutCategory, CutKind, CutMetadata};
pub use feature::{CutParams, ExplicitCutType, Feature, FeatureId, FeatureType};
pub use profile::{
    Bounds2, Chamfer, Contour, CutRecord, CutSubtype, Hole, HoleExtra, Marking, MaterialClass,
    Point2, Profile, ProfileHeader, ProfileKind, TextAlign,
};
pub use scene::{
    ClassifiedCut, ContourDescriptor, ContourShape, Dimensions, Material, Scene, SceneBounds,
    SceneElement, DEFAULT_STEEL_DENSITY_KG_M3,
};
pub use token::{BlockKeyword, Face, FaceConvention, HoleTypeTag, SourcePos, Token, TokenKind};
