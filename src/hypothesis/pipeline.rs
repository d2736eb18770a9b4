//! The parallel scoring pipeline of [`GeometricMean`](super::GeometricMean).
//!
//! A feeder pushes members onto a bounded work queue, a fixed pool of
//! workers scores them, and the calling thread fans every score out to
//! one bounded queue per class. Each class queue is drained by its own
//! accumulator thread.
use tracing::debug;

use crate::sample::RecordSet;
use super::geometric_mean::LogAccumulator;
use super::scorer::{Score, Scorer};

use std::sync::{Arc, Mutex};
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;


/// Queue capacity per worker.
pub(crate) const QUEUE_FACTOR: usize = 10;


/// A receiver shared by several consumers.
///
/// [`WorkQueue::next`] blocks while the queue is empty but still open,
/// and returns `None` once every sender is gone and the queue is drained.
pub(crate) struct WorkQueue<T> {
    receiver: Mutex<Receiver<T>>,
}


impl<T> WorkQueue<T> {
    pub(crate) fn new(receiver: Receiver<T>) -> Self {
        Self { receiver: Mutex::new(receiver) }
    }


    pub(crate) fn next(&self) -> Option<T> {
        let receiver = self.receiver
            .lock()
            .expect("work queue mutex poisoned");
        receiver.recv().ok()
    }
}


/// Scores `data` with every member of `hypotheses` on `n_workers`
/// threads and returns the per-row geometric means.
///
/// A panic in any stage closes the queues around it,
/// so the other stages wind down and the panic reaches the caller.
pub(crate) fn score_pipeline<H>(
    hypotheses: &[H],
    data: &RecordSet,
    n_workers: usize,
) -> Score
    where H: Scorer + Sync,
{
    let n_sample = data.len();
    let n_workers = n_workers.max(1);
    let bound = QUEUE_FACTOR * n_workers;

    debug!(n_workers, bound, members = hypotheses.len(), "starting scoring pipeline");

    let (work_tx, work_rx) = sync_channel::<&H>(bound);
    let (score_tx, score_rx) = sync_channel::<Score>(bound);
    let (signal_tx, signal_rx) = sync_channel::<Vec<f64>>(bound);
    let (background_tx, background_rx) = sync_channel::<Vec<f64>>(bound);

    thread::scope(|scope| {
        let signal = scope.spawn(move || accumulate(signal_rx, n_sample));
        let background = scope.spawn(move || accumulate(background_rx, n_sample));

        // Only workers own the queue, so the receiver goes away with
        // the last of them and the feeder stops instead of blocking.
        let work = Arc::new(WorkQueue::new(work_rx));
        for _ in 0..n_workers {
            let work = Arc::clone(&work);
            let score_tx = score_tx.clone();
            scope.spawn(move || {
                while let Some(h) = work.next() {
                    if score_tx.send(h.score(data, false)).is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold the only score senders and queue handles from here on.
        drop(score_tx);
        drop(work);

        scope.spawn(move || {
            for h in hypotheses {
                if work_tx.send(h).is_err() {
                    break;
                }
            }
        });

        for score in score_rx {
            let Score { signal, background } = score;
            if signal_tx.send(signal).is_err()
                || background_tx.send(background).is_err()
            {
                break;
            }
        }
        drop(signal_tx);
        drop(background_tx);

        let signal = signal.join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e));
        let background = background.join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e));
        Score { signal, background }
    })
}


fn accumulate(receiver: Receiver<Vec<f64>>, n_sample: usize) -> Vec<f64> {
    let mut acc = LogAccumulator::new(n_sample);
    for scores in receiver {
        acc.add(&scores[..]);
    }
    acc.finish()
}
