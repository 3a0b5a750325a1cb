use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Error backpropagation and fixed-step SGD weight update.
///
/// Owns the per-neuron error signals as a scratch buffer, indexed like the
/// network's flat neuron store. The buffer is overwritten by every `learn`
/// call and carries nothing from one call to the next.
pub struct Backprop {
    errors: Vec<f64>,
}

impl Backprop {
    /// Sizes the error buffer for `network`.
    pub fn new(network: &Network) -> Backprop {
        Backprop { errors: vec![0.0; network.neurons().len()] }
    }

    /// Error signals from the most recent `learn` call, in flat-store order.
    /// Input-layer entries are always 0.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// One training step on a single sample: forward pass, error assignment
    /// from the output layer down, then weight update.
    ///
    /// After the call `network.output_vector()` still holds the prediction
    /// made before the weights moved.
    pub fn learn(&mut self, network: &mut Network, inputs: &[f64], targets: &[f64]) -> Result<()> {
        let expected = network.config().output_width();
        if targets.len() != expected {
            return Err(NetworkError::TargetMismatch { expected, actual: targets.len() });
        }
        network.run(inputs)?;

        if self.errors.len() != network.neurons().len() {
            self.errors.resize(network.neurons().len(), 0.0);
        }
        self.errors.fill(0.0);

        self.assign_errors(network, targets);
        self.update_weights(network);
        Ok(())
    }

    /// Walks layers last to first (input layer excluded). Bias units get an
    /// error like any other neuron in their layer; nothing reads it.
    fn assign_errors(&mut self, network: &Network, targets: &[f64]) {
        let topology = network.topology();
        let derivative = network.activation().derivative;
        let neurons = network.neurons();
        let last = topology.last_layer();

        for layer in (1..=last).rev() {
            for index in topology.layer_range(layer) {
                let neuron = &neurons[index];
                let signal = if layer == last {
                    // the output layer has no bias unit, so position == target index
                    let position = index - topology.locate(last, 0);
                    targets[position] - neuron.output
                } else {
                    neuron.weights.iter()
                        .enumerate()
                        .map(|(k, w)| self.errors[topology.regular(layer + 1, k)] * w)
                        .sum()
                };
                self.errors[index] = derivative(neuron.output) * signal;
            }
        }
    }

    /// `w += learning_rate * error(target) * output(source)` for every weight.
    fn update_weights(&self, network: &mut Network) {
        let learning_rate = network.config().learning_rate;
        let (topology, _, neurons) = network.parts_mut();

        for layer in 0..topology.last_layer() {
            for index in topology.layer_range(layer) {
                let neuron = &mut neurons[index];
                let output = neuron.output;
                for (k, w) in neuron.weights.iter_mut().enumerate() {
                    *w += learning_rate * self.errors[topology.regular(layer + 1, k)] * output;
                }
            }
        }
    }
}
