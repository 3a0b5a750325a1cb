use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`    — upper bound on full passes over the training data
/// - `allowed_error` — per-sample MSE at or below which a sample counts as
///                     learned
/// - `stop_on_convergence` — end the run at the first epoch in which every
///                     sample is learned instead of spending the full budget
/// - `shuffle`       — visit samples in a fresh random order every epoch
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed epoch.  If the receiver is dropped the loop
///                     terminates early.
/// - `stop_flag`     — optional atomic flag; when set to `true` from another
///                     thread the loop terminates after the current epoch.
pub struct TrainConfig {
    pub max_epochs: usize,
    pub allowed_error: f64,
    pub stop_on_convergence: bool,
    pub shuffle: bool,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` that runs all `max_epochs`, with shuffling on,
    /// no progress channel and no stop flag.
    pub fn new(max_epochs: usize, allowed_error: f64) -> Self {
        TrainConfig {
            max_epochs,
            allowed_error,
            stop_on_convergence: false,
            shuffle: true,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(2000, 0.01)
    }
}
