//! Component J: the CSG worker pool (spec §4.J).
//!
//! Heavy boolean operations are offloaded here so the caller's thread never
//! blocks on kernel work. Priority ordering uses a `BinaryHeap` behind a
//! `Mutex`/`Condvar` pair (`crossbeam_channel` has no priority queue of its
//! own); each submitted job gets its own rendezvous channel for its result.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};

use crate::error::ServiceError;

const DEFAULT_TASK_TIMEOUT: Duration = Duration::from_secs(30);

type Job = Box<dyn FnOnce() + Send>;

struct QueuedJob {
    priority: i32,
    sequence: u64,
    job: Job,
}

impl PartialEq for QueuedJob {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}
impl Eq for QueuedJob {}
impl PartialOrd for QueuedJob {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueuedJob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Higher priority first; ties broken by submission order (FIFO).
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct SharedQueue {
    heap: Mutex<std::collections::BinaryHeap<QueuedJob>>,
    condvar: Condvar,
    shutdown: std::sync::atomic::AtomicBool,
}

/// A fixed-size pool of worker threads draining a shared priority queue.
///
/// Crash recovery: each job runs under `catch_unwind` so a panicking
/// boolean operation cannot poison the queue mutex or kill its worker
/// thread; the panic is turned into a `ServiceError::WorkerPanicked` result
/// delivered on the job's own channel.
pub struct WorkerPool {
    queue: Arc<SharedQueue>,
    workers: Vec<JoinHandle<()>>,
    desired_workers: Arc<AtomicUsize>,
    pending: Arc<AtomicUsize>,
    next_sequence: AtomicUsize,
}

impl WorkerPool {
    pub fn initialize(worker_count: usize) -> Self {
        let queue = Arc::new(SharedQueue {
            heap: Mutex::new(std::collections::BinaryHeap::new()),
            condvar: Condvar::new(),
            shutdown: std::sync::atomic::AtomicBool::new(false),
        });
        let desired_workers = Arc::new(AtomicUsize::new(worker_count));
        let pending = Arc::new(AtomicUsize::new(0));

        let mut workers = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            workers.push(spawn_worker(id, queue.clone(), desired_workers.clone(), pending.clone()));
        }

        Self { queue, workers, desired_workers, pending, next_sequence: AtomicUsize::new(0) }
    }

    /// Submits `task` at `priority` (higher runs first) and returns a
    /// receiver that yields its result, subject to the 30s task timeout
    /// enforced by [`WorkerPool::recv_result`].
    pub fn submit<F, R>(&self, priority: i32, task: F) -> Receiver<Result<R, ServiceError>>
    where
        F: FnOnce() -> Result<R, ServiceError> + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = bounded(1);
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed) as u64;
        let job: Job = Box::new(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task));
            let result = match outcome {
                Ok(r) => r,
                Err(_) => Err(ServiceError::WorkerPanicked),
            };
            let _ = tx.send(result);
        });

        self.pending.fetch_add(1, Ordering::SeqCst);
        let mut heap = self.queue.heap.lock().expect("worker queue mutex poisoned");
        heap.push(QueuedJob { priority, sequence, job });
        self.queue.condvar.notify_one();
        drop(heap);

        rx
    }

    /// Blocks up to the task timeout for a result, mapping a timeout into
    /// `ServiceError::TaskTimedOut`.
    pub fn recv_result<R>(&self, rx: &Receiver<Result<R, ServiceError>>) -> Result<R, ServiceError> {
        rx.recv_timeout(DEFAULT_TASK_TIMEOUT).map_err(|_| ServiceError::TaskTimedOut)?
    }

    /// Shrinks the pool's advertised worker target; idle workers above the
    /// new target exit on their next queue check rather than being killed.
    pub fn scale_down(&self, target: usize) {
        self.desired_workers.store(target, Ordering::SeqCst);
        self.queue.condvar.notify_all();
    }

    /// Blocks until every submitted job has been drained from the queue.
    pub fn flush(&self) {
        while self.pending.load(Ordering::SeqCst) > 0 {
            thread::yield_now();
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.queue.shutdown.store(true, Ordering::SeqCst);
        self.queue.condvar.notify_all();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn spawn_worker(
    id: usize,
    queue: Arc<SharedQueue>,
    desired_workers: Arc<AtomicUsize>,
    pending: Arc<AtomicUsize>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name(format!("csg-worker-{id}"))
        .spawn(move || loop {
            if queue.shutdown.load(Ordering::SeqCst) {
                return;
            }
            if id >= desired_workers.load(Ordering::SeqCst) {
                return;
            }

            let mut heap = queue.heap.lock().expect("worker queue mutex poisoned");
            while heap.is_empty() && !queue.shutdown.load(Ordering::SeqCst) {
                if id >= desired_workers.load(Ordering::SeqCst) {
                    return;
                }
                heap = queue
                    .condvar
                    .wait_timeout(heap, Duration::from_millis(100))
                    .expect("worker queue mutex poisoned")
                    .0;
            }
            if queue.shutdown.load(Ordering::SeqCst) && heap.is_empty() {
                return;
            }
            let Some(queued) = heap.pop() else { continue };
            drop(heap);

            (queued.job)();
            pending.fetch_sub(1, Ordering::SeqCst);
        })
        .expect("failed to spawn csg worker thread")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_run_and_report_results_in_priority_order() {
        let pool = WorkerPool::initialize(2);
        let rx_low = pool.submit(0, || Ok::<_, ServiceError>(1));
        let rx_high = pool.submit(10, || Ok::<_, ServiceError>(2));

        assert_eq!(pool.recv_result(&rx_high).unwrap(), 2);
        assert_eq!(pool.recv_result(&rx_low).unwrap(), 1);
    }

    #[test]
    fn a_panicking_job_reports_worker_panicked_without_killing_the_pool() {
        let pool = WorkerPool::initialize(1);
        let rx: Receiver<Result<(), ServiceError>> =
            pool.submit(0, || -> Result<(), ServiceError> { panic!("boom") });
        assert!(matches!(pool.recv_result(&rx), Err(ServiceError::WorkerPanicked)));

        // Pool is still usable after a worker thread panicked mid-job.
        let rx2 = pool.submit(0, || Ok::<_, ServiceError>(42));
        assert_eq!(pool.recv_result(&rx2).unwrap(), 42);
    }

    #[test]
    fn flush_waits_for_all_pending_jobs() {
        let pool = WorkerPool::initialize(2);
        for _ in 0..8 {
            let _ = pool.submit(0, || Ok::<_, ServiceError>(()));
        }
        pool.flush();
        assert_eq!(pool.pending_count(), 0);
    }
}
