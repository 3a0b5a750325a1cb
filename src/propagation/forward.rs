use crate::error::{NetworkError, Result};
use crate::network::network::Network;

impl Network {
    /// Forward pass. Loads `inputs` into the input layer, then computes every
    /// regular neuron layer by layer; bias units keep their output of 1.
    ///
    /// Fails with `InputMismatch` before touching any neuron when
    /// `inputs.len()` differs from the input width.
    pub fn run(&mut self, inputs: &[f64]) -> Result<()> {
        let expected = self.config().input_width();
        if inputs.len() != expected {
            return Err(NetworkError::InputMismatch { expected, actual: inputs.len() });
        }

        let (topology, activation, neurons) = self.parts_mut();
        let activate = activation.function;

        for (i, &value) in inputs.iter().enumerate() {
            neurons[topology.regular(0, i)].output = value;
        }

        for layer in 1..topology.num_layers() {
            let previous = topology.layer_range(layer - 1);
            for target in 0..topology.layer_size(layer) {
                let sum: f64 = neurons[previous.clone()]
                    .iter()
                    .map(|n| n.output * n.weights[target])
                    .sum();
                neurons[topology.regular(layer, target)].output = activate(sum);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::activation::activation::ActivationFunction;
    use crate::error::NetworkError;
    use crate::network::{Network, NetworkConfig};
    use approx::assert_abs_diff_eq;

    fn network(sizes: &[usize], use_bias: bool, activation: ActivationFunction) -> Network {
        Network::new(NetworkConfig::new(sizes.to_vec(), use_bias, activation, 0.1)).unwrap()
    }

    #[test]
    fn single_weight_sigmoid() {
        let mut net = network(&[1, 1], false, ActivationFunction::Sigmoid);
        net.set_weights(0, 0, &[0.3]);
        net.run(&[2.0]).unwrap();
        let expected = 1.0 / (1.0 + (-0.6f64).exp());
        assert_abs_diff_eq!(net.output_vector()[0], expected, epsilon = 1e-9);
    }

    #[test]
    fn bias_unit_adds_its_weight() {
        let mut net = network(&[1, 1], true, ActivationFunction::Tanh);
        // position 0 is the bias unit, position 1 the input
        net.set_weights(0, 0, &[0.5]);
        net.set_weights(0, 1, &[0.25]);
        net.run(&[2.0]).unwrap();
        assert_abs_diff_eq!(net.output_vector()[0], (0.5 + 0.5f64).tanh(), epsilon = 1e-12);
        assert_eq!(net.neuron(0, 0).output, 1.0);
    }

    #[test]
    fn hidden_layer_feeds_output() {
        let mut net = network(&[2, 2, 1], false, ActivationFunction::Sigmoid);
        net.fill_weights(0.5);
        net.run(&[1.0, 1.0]).unwrap();
        let sigmoid = |x: f64| 1.0 / (1.0 + (-x).exp());
        let hidden = sigmoid(1.0);
        assert_abs_diff_eq!(net.neuron(1, 0).output, hidden, epsilon = 1e-12);
        assert_abs_diff_eq!(net.output_vector()[0], sigmoid(hidden), epsilon = 1e-12);
    }

    #[test]
    fn binary_activation_thresholds() {
        let mut net = network(&[2, 1], false, ActivationFunction::Binary);
        net.set_weights(0, 0, &[1.0]);
        net.set_weights(0, 1, &[-1.0]);
        net.run(&[1.0, 2.0]).unwrap();
        assert_eq!(net.output_vector(), vec![0.0]);
        net.run(&[2.0, 2.0]).unwrap();
        assert_eq!(net.output_vector(), vec![1.0]);
    }

    #[test]
    fn wrong_input_width_leaves_outputs_untouched() {
        let mut net = network(&[2, 3, 2], true, ActivationFunction::Sigmoid);
        net.run(&[0.2, -0.4]).unwrap();
        let before: Vec<f64> = net.neurons().iter().map(|n| n.output).collect();

        let err = net.run(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, NetworkError::InputMismatch { expected: 2, actual: 3 }));
        let after: Vec<f64> = net.neurons().iter().map(|n| n.output).collect();
        assert_eq!(before, after);
    }
}
