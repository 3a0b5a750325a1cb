use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{NetworkError, Result};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::propagation::backprop::Backprop;
use crate::train::epoch_stats::EpochStats;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;

/// Error summary of one pass over the training data.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochError {
    /// Mean per-sample error.
    pub mean: f64,
    /// Worst per-sample error.
    pub max: f64,
    /// Samples whose error is above the allowed error.
    pub still_learning: usize,
    /// Error of every sample, in the order the samples were visited.
    pub samples: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` sample by sample for `config.max_epochs` epochs.
///
/// The error of a sample is the MSE of the prediction `learn` made for it,
/// i.e. the output before that sample's weight update. A sample above
/// `config.allowed_error` is still learning; the report counts as converged
/// when no sample of the last completed epoch is.
///
/// # Early termination
/// The loop breaks early if:
/// - `config.stop_on_convergence` is set and an epoch converged, **or**
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// `InvalidConfig` if there are no samples or `inputs` and `targets` differ
/// in length; `InputMismatch` / `TargetMismatch` from the first bad sample.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainReport> {
    if inputs.is_empty() {
        return Err(NetworkError::InvalidConfig("no training samples".to_string()));
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::InvalidConfig(format!(
            "{} inputs but {} targets",
            inputs.len(),
            targets.len()
        )));
    }

    let mut backprop = Backprop::new(network);
    let mut report = TrainReport {
        epochs_run: 0,
        errors: Vec::with_capacity(config.max_epochs),
        sample_errors: Vec::with_capacity(config.max_epochs),
        converged: false,
    };

    for epoch in 1..=config.max_epochs {
        if stop_requested(config) {
            log::info!("training stopped before epoch {epoch}");
            break;
        }

        let t_start = Instant::now();
        let epoch_error = train_epoch(
            network,
            &mut backprop,
            inputs,
            targets,
            config.allowed_error,
            config.shuffle,
            rng,
        )?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        report.epochs_run = epoch;
        report.errors.push(epoch_error.mean);
        report.converged = epoch_error.still_learning == 0;

        if epoch_error.still_learning > 0 {
            log::debug!(
                "epoch {epoch}: still learning ({} samples), mean error {:.6}",
                epoch_error.still_learning, epoch_error.mean
            );
        }

        let stats = EpochStats {
            epoch,
            max_epochs: config.max_epochs,
            mean_error: epoch_error.mean,
            max_error: epoch_error.max,
            still_learning: epoch_error.still_learning,
            elapsed_ms,
        };
        report.sample_errors.push(epoch_error.samples);

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                log::info!("progress receiver dropped, stopping after epoch {epoch}");
                break;
            }
        }

        if report.converged && config.stop_on_convergence {
            break;
        }
    }

    if report.converged {
        log::info!(
            "training ended after {} epochs with every sample learned, final mean error {:.6}",
            report.epochs_run,
            report.final_error().unwrap_or(f64::NAN)
        );
    } else {
        log::warn!(
            "training ended after {} epochs without converging, final mean error {:.6}",
            report.epochs_run,
            report.final_error().unwrap_or(f64::NAN)
        );
    }
    Ok(report)
}

/// Runs one pass of per-sample SGD over the training data.
pub fn train_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    backprop: &mut Backprop,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    allowed_error: f64,
    shuffle: bool,
    rng: &mut R,
) -> Result<EpochError> {
    let n = inputs.len();
    let mut indices: Vec<usize> = (0..n).collect();
    if shuffle {
        indices.shuffle(rng);
    }

    let mut total = 0.0;
    let mut max: f64 = 0.0;
    let mut still_learning = 0;
    let mut samples = Vec::with_capacity(n);

    for &idx in &indices {
        backprop.learn(network, &inputs[idx], &targets[idx])?;
        let error = MseLoss::loss(&network.output_vector(), &targets[idx]);
        total += error;
        max = max.max(error);
        if error > allowed_error {
            still_learning += 1;
        }
        samples.push(error);
    }

    Ok(EpochError {
        mean: if n == 0 { 0.0 } else { total / n as f64 },
        max,
        still_learning,
        samples,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}
