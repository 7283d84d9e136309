//! Top-level import configuration (spec §9 "ordinary owned services").
//!
//! One `ImportConfig` is built by the caller and threaded through the whole
//! pipeline; nothing here is a process-wide singleton.

use std::time::Duration;

use dstv_types::FaceConvention;
use dstv_validate::Severity;

use csg_service::{EvictionPolicy, PerformanceMode};

/// Default maximum profile length, mm (spec §4.D structural checks).
pub const DEFAULT_MAX_PROFILE_LENGTH_MM: f64 = 20_000.0;

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Which of the two conflicting face-letter conventions this run uses
    /// (spec §9 "face-mapping ambiguity" — chosen once, never guessed).
    pub face_convention: FaceConvention,
    pub validation_level: Severity,
    pub max_profile_length_mm: f64,
    pub performance_mode: PerformanceMode,
    pub worker_count: usize,
    pub cache_capacity: usize,
    pub cache_policy: EvictionPolicy,
    pub cache_ttl: Duration,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            face_convention: FaceConvention::Dominant,
            validation_level: Severity::Standard,
            max_profile_length_mm: DEFAULT_MAX_PROFILE_LENGTH_MM,
            performance_mode: PerformanceMode::Balanced,
            worker_count: 2,
            cache_capacity: 256,
            cache_policy: EvictionPolicy::Lru,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ImportConfig {
    pub fn with_validation_level(mut self, level: Severity) -> Self {
        self.validation_level = level;
        self
    }

    pub fn with_face_convention(mut self, convention: FaceConvention) -> Self {
        self.face_convention = convention;
        self
    }
}
