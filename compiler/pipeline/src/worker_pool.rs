//! Bounded worker pool for the per-file stages.
//!
//! Workers are scoped threads pulling item indices from a shared counter. Results are
//! returned in item order whatever the scheduling was.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::{CancellationToken, PipelineError, Result};

/// Worker count for a requested `jobs` value (0 = available cores)
pub fn effective_jobs(jobs: usize) -> usize {
    if jobs > 0 {
        jobs
    } else {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }
}

/// Apply `work` to every item on up to `jobs` threads
///
/// With one worker (or one item) everything runs on the calling thread. Returns
/// [`PipelineError::Cancelled`] when the token is set before every item was processed.
pub fn run_indexed<T, R, F>(
    items: &[T],
    jobs: usize,
    cancel: &CancellationToken,
    work: F,
) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let workers = effective_jobs(jobs).min(items.len());
    if workers <= 1 {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            if cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }
            results.push(work(item));
        }
        return Ok(results);
    }

    let next = &AtomicUsize::new(0);
    let work = &work;
    let batches = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            handles.push(scope.spawn(move || {
                let mut done = Vec::new();
                while !cancel.is_cancelled() {
                    let index = next.fetch_add(1, Ordering::SeqCst);
                    let Some(item) = items.get(index) else { break };
                    done.push((index, work(item)));
                }
                done
            }));
        }
        handles
            .into_iter()
            .map(|handle| {
                handle.join().map_err(|_| PipelineError::Message("worker thread panicked".into()))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();
    for (index, result) in batches.into_iter().flatten() {
        slots[index] = Some(result);
    }
    slots.into_iter().collect::<Option<Vec<R>>>().ok_or(PipelineError::Cancelled)
}

/// Apply fallible `work` to every item on up to `jobs` threads
///
/// The first error stops every worker from taking further items and is returned once
/// the items already started have finished.
pub fn try_run_indexed<T, R, F>(
    items: &[T],
    jobs: usize,
    cancel: &CancellationToken,
    work: F,
) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync,
{
    let stop = CancellationToken::new();
    let first_error = Mutex::new(None);
    let results = run_indexed(items, jobs, &stop, |item| {
        let result = if cancel.is_cancelled() { Err(PipelineError::Cancelled) } else { work(item) };
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                stop.cancel();
                first_error.lock().unwrap_or_else(PoisonError::into_inner).get_or_insert(error);
                None
            }
        }
    });

    if let Some(error) = first_error.into_inner().unwrap_or_else(PoisonError::into_inner) {
        return Err(error);
    }
    results?.into_iter().collect::<Option<Vec<R>>>().ok_or(PipelineError::Cancelled)
}
