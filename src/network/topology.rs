use std::ops::Range;

use crate::error::{NetworkError, Result};
use crate::network::config::NetworkConfig;

/// Maps (layer, position) pairs onto the flat neuron store.
///
/// Layers are stored back to back. When bias is enabled, every layer except
/// the last stores its bias unit at position 0, followed by its regular
/// neurons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    layer_sizes: Vec<usize>,
    use_bias: bool,
    /// Prefix sums of effective widths; `offsets[l]` is the flat index of
    /// position 0 in layer `l`, the last entry is the total neuron count.
    offsets: Vec<usize>,
}

impl Topology {
    pub fn new(config: &NetworkConfig) -> Topology {
        let mut topology = Topology {
            layer_sizes: config.layer_sizes.clone(),
            use_bias: config.use_bias,
            offsets: Vec::with_capacity(config.layer_sizes.len() + 1),
        };
        let mut offset = 0;
        topology.offsets.push(offset);
        for layer in 0..topology.num_layers() {
            offset += topology.effective_width(layer);
            topology.offsets.push(offset);
        }
        topology
    }

    pub fn num_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    pub fn last_layer(&self) -> usize {
        self.num_layers() - 1
    }

    /// Regular (non-bias) neuron count of `layer`.
    pub fn layer_size(&self, layer: usize) -> usize {
        self.layer_sizes[layer]
    }

    pub fn has_bias(&self, layer: usize) -> bool {
        self.use_bias && layer != self.last_layer()
    }

    /// Position of the first regular neuron in `layer`: 1 behind a bias unit, else 0.
    pub fn bias_offset(&self, layer: usize) -> usize {
        usize::from(self.has_bias(layer))
    }

    /// Neurons stored for `layer`, bias unit included.
    pub fn effective_width(&self, layer: usize) -> usize {
        self.layer_sizes[layer] + self.bias_offset(layer)
    }

    /// Length of every outgoing weight vector in `layer`: the regular width of
    /// the following layer, or 0 for the output layer.
    pub fn fan_out(&self, layer: usize) -> usize {
        if layer == self.last_layer() {
            0
        } else {
            self.layer_sizes[layer + 1]
        }
    }

    pub fn total_neurons(&self) -> usize {
        self.offsets[self.num_layers()]
    }

    /// Flat index range covering every neuron of `layer`.
    pub fn layer_range(&self, layer: usize) -> Range<usize> {
        self.offsets[layer]..self.offsets[layer + 1]
    }

    /// Flat index of `position` in `layer`, or `IndexOutOfRange`.
    pub fn try_locate(&self, layer: usize, position: usize) -> Result<usize> {
        if layer >= self.num_layers() || position >= self.effective_width(layer) {
            return Err(NetworkError::IndexOutOfRange { layer, position });
        }
        Ok(self.offsets[layer] + position)
    }

    /// Flat index of `position` in `layer`.
    ///
    /// # Panics
    /// Panics on an out-of-range index; callers only ever pass positions
    /// derived from this topology.
    pub fn locate(&self, layer: usize, position: usize) -> usize {
        self.try_locate(layer, position)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Flat index of regular neuron `index` in `layer`, skipping the bias unit.
    /// Outgoing weight `k` of the previous layer targets `regular(layer, k)`.
    pub fn regular(&self, layer: usize, index: usize) -> usize {
        self.locate(layer, index + self.bias_offset(layer))
    }
}
