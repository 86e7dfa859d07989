//! Fixed-size pool of persistent execution units.
//!
//! Each unit is a named OS thread fed through a `crossbeam-channel` queue and
//! guarded by an atomic busy flag. Callers wait for a free unit with a bounded
//! poll, dispatch one batch, and await the reply with a timeout.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use curation_core::errors::FilterError;
use curation_core::models::{FileRecord, FilterCriteria};
use tokio::sync::oneshot;

use crate::predicate::matching_ids;

/// Evaluates one batch inside an execution unit, returning the matching ids.
pub type BatchEvaluator =
    Arc<dyn Fn(&[FileRecord], &FilterCriteria) -> Result<Vec<String>, FilterError> + Send + Sync>;

/// The evaluator used in production: the shared filter predicate.
pub fn default_evaluator() -> BatchEvaluator {
    Arc::new(|batch, criteria| Ok(matching_ids(batch, criteria)))
}

type BatchReply = oneshot::Sender<Result<Vec<String>, FilterError>>;

struct Job {
    batch: Vec<FileRecord>,
    criteria: FilterCriteria,
    reply: BatchReply,
}

struct ExecutionUnit {
    busy: AtomicBool,
    jobs: Sender<Job>,
}

/// Marks a unit busy for as long as it is held.
struct UnitGuard<'a> {
    index: usize,
    unit: &'a ExecutionUnit,
}

impl Drop for UnitGuard<'_> {
    fn drop(&mut self) {
        self.unit.busy.store(false, Ordering::Release);
    }
}

/// Persistent pool of execution units, created once and reused across calls.
pub struct WorkerPool {
    units: Vec<ExecutionUnit>,
    poll_interval: Duration,
}

impl WorkerPool {
    /// Spawn `size` execution units running `evaluator`.
    ///
    /// Fails if any unit thread cannot be spawned; units spawned so far shut
    /// down when the partially built pool is dropped.
    pub fn new(
        size: usize,
        poll_interval: Duration,
        evaluator: BatchEvaluator,
    ) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::PoolUnavailable {
                reason: "pool size must be greater than 0".to_string(),
            });
        }

        let mut units = Vec::with_capacity(size);
        for index in 0..size {
            let (jobs, queue) = unbounded::<Job>();
            let evaluator = Arc::clone(&evaluator);
            thread::Builder::new()
                .name(format!("curation-filter-{index}"))
                .spawn(move || run_unit(index, queue, evaluator))
                .map_err(|e| FilterError::PoolUnavailable {
                    reason: format!("failed to spawn execution unit {index}: {e}"),
                })?;
            units.push(ExecutionUnit {
                busy: AtomicBool::new(false),
                jobs,
            });
        }

        tracing::debug!(
            event = "pool_started",
            size = size,
            "filter worker pool started"
        );
        Ok(Self {
            units,
            poll_interval,
        })
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    /// Units currently marked busy.
    pub fn busy_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.busy.load(Ordering::Acquire))
            .count()
    }

    /// Evaluate one batch on a free unit.
    ///
    /// Waits up to `timeout` for a unit to become free, then up to `timeout`
    /// for its reply. A unit that misses the deadline is released and its
    /// eventual reply discarded.
    pub async fn submit(
        &self,
        batch_index: usize,
        batch: Vec<FileRecord>,
        criteria: FilterCriteria,
        timeout: Duration,
    ) -> Result<Vec<String>, FilterError> {
        let guard = self.acquire(timeout).await?;

        let (reply, response) = oneshot::channel();
        guard
            .unit
            .jobs
            .send(Job {
                batch,
                criteria,
                reply,
            })
            .map_err(|_| FilterError::UnitDisconnected { unit: guard.index })?;

        match tokio::time::timeout(timeout, response).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(FilterError::UnitDisconnected { unit: guard.index }),
            Err(_) => Err(FilterError::BatchTimeout {
                batch: batch_index,
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }

    /// Bounded poll for a free unit.
    async fn acquire(&self, max_wait: Duration) -> Result<UnitGuard<'_>, FilterError> {
        let started = Instant::now();
        loop {
            for (index, unit) in self.units.iter().enumerate() {
                if unit
                    .busy
                    .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
                {
                    return Ok(UnitGuard { index, unit });
                }
            }
            if started.elapsed() >= max_wait {
                return Err(FilterError::NoFreeUnit {
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.units.len())
            .field("busy", &self.busy_count())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Unit thread body: evaluate jobs until the pool drops its sender.
fn run_unit(index: usize, queue: Receiver<Job>, evaluator: BatchEvaluator) {
    for job in queue.iter() {
        let Job {
            batch,
            criteria,
            reply,
        } = job;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluator(&batch, &criteria)))
            .unwrap_or_else(|payload| {
                Err(FilterError::UnitFailed {
                    unit: index,
                    reason: panic_message(payload.as_ref()),
                })
            });
        // The caller may have timed out and dropped the receiver.
        let _ = reply.send(outcome);
    }
    tracing::trace!(
        event = "unit_stopped",
        unit = index,
        "execution unit stopped"
    );
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curation_core::models::ConfidenceScore;

    fn batch(n: usize) -> Vec<FileRecord> {
        (0..n)
            .map(|i| {
                FileRecord::new(format!("f{i}"), "f.md")
                    .with_confidence(ConfidenceScore::new(i as f64 / n as f64, 1))
            })
            .collect()
    }

    #[test]
    fn zero_size_pool_is_rejected() {
        let err = WorkerPool::new(0, Duration::from_millis(10), default_evaluator()).unwrap_err();
        assert!(matches!(err, FilterError::PoolUnavailable { .. }));
    }

    #[tokio::test]
    async fn submit_evaluates_on_a_unit() {
        let pool = WorkerPool::new(2, Duration::from_millis(1), default_evaluator()).unwrap();
        let criteria = FilterCriteria::new().with_confidence_range(50.0, 100.0);
        let ids = pool
            .submit(0, batch(10), criteria, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(pool.busy_count(), 0, "unit released after reply");
    }

    #[tokio::test]
    async fn slow_unit_times_out() {
        let slow: BatchEvaluator = Arc::new(|_, _| {
            std::thread::sleep(Duration::from_millis(200));
            Ok(Vec::new())
        });
        let pool = WorkerPool::new(1, Duration::from_millis(1), slow).unwrap();
        let err = pool
            .submit(
                3,
                batch(1),
                FilterCriteria::new(),
                Duration::from_millis(20),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FilterError::BatchTimeout { batch: 3, .. }));
        assert_eq!(pool.busy_count(), 0);
    }

    #[tokio::test]
    async fn panicking_unit_reports_failure_and_survives() {
        let flaky: BatchEvaluator = Arc::new(|batch, _| {
            if batch.len() == 1 {
                panic!("bad batch");
            }
            Ok(vec!["ok".to_string()])
        });
        let pool = WorkerPool::new(1, Duration::from_millis(1), flaky).unwrap();
        let err = pool
            .submit(0, batch(1), FilterCriteria::new(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(
            matches!(err, FilterError::UnitFailed { unit: 0, ref reason } if reason == "bad batch")
        );

        let ids = pool
            .submit(1, batch(2), FilterCriteria::new(), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(ids, vec!["ok".to_string()]);
    }
}
