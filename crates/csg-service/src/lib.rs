//! Components I-L: the CSG service, its worker pool, geometry cache and
//! monitor (spec §4.I-L).

pub mod cache;
pub mod error;
pub mod monitor;
pub mod service;
pub mod workers;

pub use cache::{CacheStats, EvictionPolicy, GeometryCache};
pub use error::ServiceError;
pub use monitor::{CountingMonitor, CsgMonitor, MonitorSnapshot, NoopMonitor};
pub use service::{CsgService, CsgServiceConfig, PerformanceMode};
pub use workers::WorkerPool;
