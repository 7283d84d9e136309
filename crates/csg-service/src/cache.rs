//! Component K: the geometry cache (spec §4.K).
//!
//! Keyed by an FNV-1a fingerprint of both operand meshes plus the
//! operation, so repeating the same boolean on unchanged geometry is a
//! lookup instead of a re-evaluation. Supports LRU, LFU and FIFO eviction
//! and a per-entry TTL.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use fnv::FnvHasher;

use csg_kernel::{CsgOp, Mesh};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    Lru,
    Lfu,
    Fifo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

struct Entry {
    mesh: Mesh,
    inserted_at: Instant,
    last_access: Instant,
    hit_count: u64,
}

pub struct GeometryCache {
    policy: EvictionPolicy,
    capacity: usize,
    ttl: Duration,
    entries: HashMap<u64, Entry>,
    insertion_order: Vec<u64>,
    stats: CacheStats,
}

impl GeometryCache {
    pub fn new(policy: EvictionPolicy, capacity: usize, ttl: Duration) -> Self {
        Self {
            policy,
            capacity,
            ttl,
            entries: HashMap::new(),
            insertion_order: Vec::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn get(&mut self, key: u64) -> Option<Mesh> {
        self.purge_expired();
        let found = self.entries.get_mut(&key).map(|entry| {
            entry.last_access = Instant::now();
            entry.hit_count += 1;
            entry.mesh.clone()
        });
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    pub fn put(&mut self, key: u64, mesh: Mesh) {
        self.purge_expired();
        if !self.entries.contains_key(&key) {
            self.insertion_order.push(key);
        }
        self.entries.insert(
            key,
            Entry { mesh, inserted_at: Instant::now(), last_access: Instant::now(), hit_count: 0 },
        );
        self.evict_to_capacity();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        if self.ttl.is_zero() {
            return;
        }
        let now = Instant::now();
        let expired: Vec<u64> = self
            .entries
            .iter()
            .filter(|(_, e)| now.duration_since(e.inserted_at) > self.ttl)
            .map(|(k, _)| *k)
            .collect();
        for key in expired {
            self.entries.remove(&key);
            self.insertion_order.retain(|k| *k != key);
            self.stats.evictions += 1;
        }
    }

    fn evict_to_capacity(&mut self) {
        while self.entries.len() > self.capacity {
            let victim = match self.policy {
                EvictionPolicy::Fifo => self.insertion_order.first().copied(),
                EvictionPolicy::Lru => self
                    .entries
                    .iter()
                    .min_by_key(|(_, e)| e.last_access)
                    .map(|(k, _)| *k),
                EvictionPolicy::Lfu => {
                    self.entries.iter().min_by_key(|(_, e)| e.hit_count).map(|(k, _)| *k)
                }
            };
            match victim {
                Some(key) => {
                    self.entries.remove(&key);
                    self.insertion_order.retain(|k| *k != key);
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }
    }
}

/// FNV-1a fingerprint of both operand meshes and the operation, used as
/// the cache key (spec §4.K).
pub fn fingerprint(a: &Mesh, b: &Mesh, op: CsgOp) -> u64 {
    let mut hasher = FnvHasher::default();
    hash_mesh(&mut hasher, a);
    hash_mesh(&mut hasher, b);
    (op as u8).hash(&mut hasher);
    hasher.finish()
}

fn hash_mesh(hasher: &mut FnvHasher, mesh: &Mesh) {
    mesh.positions.len().hash(hasher);
    for p in &mesh.positions {
        p[0].to_bits().hash(hasher);
        p[1].to_bits().hash(hasher);
        p[2].to_bits().hash(hasher);
    }
    mesh.indices.hash(hasher);
}

#[cfg(test)]
mod tests {
    use super::*;
    use csg_kernel::primitives;

    #[test]
    fn identical_operands_fingerprint_identically() {
        let a = primitives::box_mesh(10.0, 10.0, 10.0);
        let b = primitives::box_mesh(5.0, 5.0, 5.0);
        assert_eq!(fingerprint(&a, &b, CsgOp::Subtract), fingerprint(&a, &b, CsgOp::Subtract));
        assert_ne!(fingerprint(&a, &b, CsgOp::Subtract), fingerprint(&a, &b, CsgOp::Add));
    }

    #[test]
    fn fifo_eviction_drops_the_oldest_entry() {
        let mut cache = GeometryCache::new(EvictionPolicy::Fifo, 2, Duration::ZERO);
        cache.put(1, primitives::box_mesh(1.0, 1.0, 1.0));
        cache.put(2, primitives::box_mesh(2.0, 2.0, 2.0));
        cache.put(3, primitives::box_mesh(3.0, 3.0, 3.0));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(1).is_none());
        assert!(cache.get(3).is_some());
    }

    #[test]
    fn hit_and_miss_are_tracked() {
        let mut cache = GeometryCache::new(EvictionPolicy::Lru, 4, Duration::ZERO);
        cache.put(1, primitives::box_mesh(1.0, 1.0, 1.0));
        let _ = cache.get(1);
        let _ = cache.get(2);
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}
