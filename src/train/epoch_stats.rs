/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
/// Receivers use it to plot the error curve while training runs.
#[derive(Debug, Clone)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch budget for this run.
    pub max_epochs: usize,
    /// Mean per-sample error over this epoch.
    pub mean_error: f64,
    /// Worst per-sample error over this epoch.
    pub max_error: f64,
    /// Samples whose error exceeded `allowed_error`.
    pub still_learning: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
