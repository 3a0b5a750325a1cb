use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// A rectangular lattice of 2-D points to classify.
///
/// Points run from `x_min` (inclusive) to `x_max` (exclusive) in steps of
/// `step`, and likewise for y. A spec with a non-positive step or
/// non-finite bounds has no points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub step: f64,
}

impl Default for GridSpec {
    /// A 100 x 100 lattice of unit cells centred on the origin.
    fn default() -> Self {
        GridSpec { x_min: -50.0, x_max: 50.0, y_min: -50.0, y_max: 50.0, step: 1.0 }
    }
}

impl GridSpec {
    /// Whether the step and every bound describe a finite lattice.
    pub fn is_valid(&self) -> bool {
        self.step.is_finite()
            && self.step > 0.0
            && [self.x_min, self.x_max, self.y_min, self.y_max].iter().all(|v| v.is_finite())
    }

    /// Coordinates along one axis; empty unless `step` is positive and the
    /// bounds are finite.
    fn axis(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
        let finite = step.is_finite() && step > 0.0 && min.is_finite() && max.is_finite();
        let bound = if finite && max > min {
            ((max - min) / step).ceil() as usize + 1
        } else {
            0
        };
        (0..bound)
            .map(move |i| min + i as f64 * step)
            .take_while(move |&v| v < max)
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> {
        GridSpec::axis(self.x_min, self.x_max, self.step)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> {
        GridSpec::axis(self.y_min, self.y_max, self.step)
    }
}

/// Network response at one grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub x: f64,
    pub y: f64,
    pub outputs: Vec<f64>,
}

impl GridCell {
    pub fn classification(&self) -> Classification {
        Classification::from_outputs(&self.outputs)
    }
}

/// Class picked from an output vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification(pub usize);

impl Classification {
    /// A single output is thresholded at 0.5 (class 0 at or above it);
    /// wider outputs pick their largest entry.
    pub fn from_outputs(outputs: &[f64]) -> Classification {
        match outputs {
            [single] => Classification(if *single >= 0.5 { 0 } else { 1 }),
            _ => Classification(argmax(outputs)),
        }
    }
}

/// Runs inference on every point of `spec`, x outer and y inner.
///
/// Requires a network with exactly 2 inputs.
pub fn classify_grid(network: &mut Network, spec: &GridSpec) -> Result<Vec<GridCell>> {
    if !spec.is_valid() {
        return Err(NetworkError::InvalidConfig(format!("grid needs a positive step and finite bounds, got {spec:?}")));
    }
    let mut cells = Vec::new();
    for x in spec.xs() {
        for y in spec.ys() {
            network.run(&[x, y])?;
            cells.push(GridCell { x, y, outputs: network.output_vector() });
        }
    }
    Ok(cells)
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
