//! Component L: the CSG service's instrumentation seam (spec §4.L).
//!
//! Mirrors the teacher's habit of keeping telemetry behind a trait so a
//! no-op implementation costs nothing in tests while a counting one can
//! back a real metrics endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

use dstv_types::CutKind;

/// Observes service-level events without influencing their outcome.
pub trait CsgMonitor: Send + Sync {
    fn record_op(&self, kind: CutKind, duration_ms: u64);
    fn record_cache_hit(&self, hit: bool);
    fn record_offload(&self, offloaded: bool);
}

/// Discards every event. The default for tests and for callers that don't
/// want metrics.
#[derive(Debug, Default)]
pub struct NoopMonitor;

impl CsgMonitor for NoopMonitor {
    fn record_op(&self, _kind: CutKind, _duration_ms: u64) {}
    fn record_cache_hit(&self, _hit: bool) {}
    fn record_offload(&self, _offloaded: bool) {}
}

/// Atomics-backed counters, cheap enough to leave on in production.
#[derive(Debug, Default)]
pub struct CountingMonitor {
    ops: AtomicU64,
    total_duration_ms: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    offloaded: AtomicU64,
    local: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorSnapshot {
    pub ops: u64,
    pub total_duration_ms: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub offloaded: u64,
    pub local: u64,
}

impl CountingMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            ops: self.ops.load(Ordering::Relaxed),
            total_duration_ms: self.total_duration_ms.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            offloaded: self.offloaded.load(Ordering::Relaxed),
            local: self.local.load(Ordering::Relaxed),
        }
    }
}

impl CsgMonitor for CountingMonitor {
    fn record_op(&self, _kind: CutKind, duration_ms: u64) {
        self.ops.fetch_add(1, Ordering::Relaxed);
        self.total_duration_ms.fetch_add(duration_ms, Ordering::Relaxed);
    }

    fn record_cache_hit(&self, hit: bool) {
        if hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_offload(&self, offloaded: bool) {
        if offloaded {
            self.offloaded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.local.fetch_add(1, Ordering::Relaxed);
        }
    }
}
