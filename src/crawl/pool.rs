// src/crawl/pool.rs
// =============================================================================
// Fans a list of URLs out over concurrent tokio tasks.
//
// How it works:
// 1. Spawn one task per URL straight away
// 2. Each task waits for a permit from a shared Semaphore before working
// 3. The permit is dropped when the task ends, whatever the outcome
//    (success, error, or even a panic while unwinding)
// 4. Wait for every task and count the outcomes
//
// Rust concepts:
// - Arc: shared ownership of the semaphore and worker across tasks
// - OwnedSemaphorePermit: releases its slot when dropped (RAII)
// - Generic closures: the pool does not know what a "worker" does
// =============================================================================

use crate::error::FetchError;
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

// Totals for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages fetched and scanned
    pub pages_ok: usize,
    /// Pages skipped because of an error
    pub pages_failed: usize,
    /// References emitted across all pages (no cross-page deduplication)
    pub references: usize,
}

// Runs `worker` once per URL with at most `limit` calls in flight.
//
// Parameters:
//   urls: the targets, consumed once each (duplicates run twice)
//   limit: capacity of the admission gate, at least 1
//   worker: async fn from URL to "number of references emitted"
//
// Returns: counts of successful and failed pages. Nothing a worker does
// (error or panic) escapes this function.
pub async fn dispatch<F, Fut>(urls: Vec<String>, limit: usize, worker: F) -> RunSummary
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<usize, FetchError>> + Send + 'static,
{
    let gate = Arc::new(Semaphore::new(limit.max(1)));
    let worker = Arc::new(worker);

    let handles: Vec<_> = urls
        .into_iter()
        .map(|url| {
            let gate = Arc::clone(&gate);
            let worker = Arc::clone(&worker);
            tokio::spawn(async move {
                // Held until this task ends, on every path
                let _permit = match gate.acquire_owned().await {
                    Ok(permit) => permit,
                    // Only possible if the semaphore is closed, which we never do
                    Err(e) => return Err(FetchError::Other(e.to_string())),
                };
                worker(url).await
            })
        })
        .collect();

    let mut summary = RunSummary::default();
    for outcome in join_all(handles).await {
        match outcome {
            Ok(Ok(references)) => {
                summary.pages_ok += 1;
                summary.references += references;
            }
            Ok(Err(_)) => summary.pages_failed += 1,
            Err(e) => {
                log::error!("Worker task failed: {}", e);
                summary.pages_failed += 1;
            }
        }
    }

    summary
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why spawn every task up front?
//    - Spawning is cheap; the Semaphore decides when each one actually runs
//    - Tasks waiting on acquire_owned() just sleep, they use no CPU
//
// 2. What is join_all?
//    - Takes a list of futures (here, JoinHandles) and waits for all of them
//    - The results come back in the same order as the handles
//
// 3. What is a JoinError?
//    - tokio catches a panic inside a spawned task and hands it back as
//      Err(JoinError) instead of crashing the whole program
//
// 4. Why Arc<F> for the worker?
//    - Every task needs to call the same closure
//    - Arc lets many tasks share one value without copying it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn urls(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("https://host/{}", i)).collect()
    }

    // Tracks how many workers are running right now and the highest value seen
    #[derive(Default)]
    struct Gauge {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    impl Gauge {
        fn enter(&self) {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
        }
        fn leave(&self) {
            self.current.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_never_more_than_limit_in_flight() {
        let gauge = Arc::new(Gauge::default());
        let worker_gauge = Arc::clone(&gauge);

        let summary = dispatch(urls(60), 5, move |_url| {
            let gauge = Arc::clone(&worker_gauge);
            async move {
                gauge.enter();
                tokio::time::sleep(Duration::from_millis(10)).await;
                gauge.leave();
                Ok(1)
            }
        })
        .await;

        assert_eq!(summary.pages_ok, 60);
        assert_eq!(summary.references, 60);
        let peak = gauge.peak.load(Ordering::SeqCst);
        assert!(peak <= 5, "peak concurrency was {}", peak);
        assert!(peak >= 1);
    }

    #[tokio::test]
    async fn test_failures_do_not_affect_other_urls() {
        let summary = dispatch(urls(10), 3, |url| async move {
            if url.ends_with("/3") || url.ends_with("/7") {
                Err(FetchError::NonSuccessStatus(500))
            } else {
                Ok(2)
            }
        })
        .await;

        assert_eq!(summary.pages_ok, 8);
        assert_eq!(summary.pages_failed, 2);
        assert_eq!(summary.references, 16);
    }

    #[tokio::test]
    async fn test_panicking_worker_releases_its_slot() {
        // With a gate of 1, a permit leaked by the panic would hang the run
        let summary = dispatch(urls(5), 1, |url| async move {
            if url.ends_with("/0") {
                panic!("worker blew up");
            }
            Ok(1)
        })
        .await;

        assert_eq!(summary.pages_ok, 4);
        assert_eq!(summary.pages_failed, 1);
    }

    #[tokio::test]
    async fn test_duplicates_are_processed_independently() {
        let calls = Arc::new(AtomicUsize::new(0));
        let worker_calls = Arc::clone(&calls);
        let input = vec!["https://same".to_string(); 4];

        let summary = dispatch(input, 2, move |_url| {
            let calls = Arc::clone(&worker_calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(0)
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(summary.pages_ok, 4);
    }

    #[tokio::test]
    async fn test_zero_limit_still_makes_progress() {
        let summary = dispatch(urls(3), 0, |_url| async { Ok(0) }).await;
        assert_eq!(summary.pages_ok, 3);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let summary = dispatch(Vec::new(), 4, |_url| async { Ok(1) }).await;
        assert_eq!(summary, RunSummary::default());
    }
}
