/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Epochs actually completed.
    pub epochs_run: usize,
    /// Mean sample error of every completed epoch, in order.
    pub errors: Vec<f64>,
    /// Per-sample errors of every completed epoch, in visiting order.
    pub sample_errors: Vec<Vec<f64>>,
    /// Whether every sample of the last completed epoch reached the allowed error.
    pub converged: bool,
}

impl TrainReport {
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// Mean of every `window`-epoch sliding window over the error curve.
    /// Entry `i` covers epochs `i..i + window`. Empty when the curve is
    /// shorter than `window` or `window` is 0.
    pub fn window_means(&self, window: usize) -> Vec<f64> {
        if window == 0 || self.errors.len() < window {
            return Vec::new();
        }
        let mut means = Vec::with_capacity(self.errors.len() - window + 1);
        let mut sum: f64 = self.errors[..window].iter().sum();
        means.push(sum / window as f64);
        for i in window..self.errors.len() {
            sum += self.errors[i] - self.errors[i - window];
            means.push(sum / window as f64);
        }
        means
    }
}
