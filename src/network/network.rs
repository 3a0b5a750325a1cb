use rand::Rng;

use crate::activation::activation::Activation;
use crate::error::Result;
use crate::network::config::NetworkConfig;
use crate::network::neuron::{Neuron, NeuronKind};
use crate::network::topology::Topology;

/// A fully-connected feed-forward network stored as a flat arena of neurons.
///
/// Neurons are allocated once by the constructor; afterwards only their
/// outputs (during `run`) and weights (during `Backprop::learn`) change.
#[derive(Debug)]
pub struct Network {
    config: NetworkConfig,
    topology: Topology,
    activation: Activation,
    neurons: Vec<Neuron>,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local generator.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        Network::with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a network, drawing every weight uniformly from [0, 1) out of `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;
        let topology = Topology::new(&config);
        let mut neurons = Vec::with_capacity(topology.total_neurons());

        for layer in 0..topology.num_layers() {
            let kind = match layer {
                0 => NeuronKind::Input,
                l if l == topology.last_layer() => NeuronKind::Output,
                _ => NeuronKind::Hidden,
            };
            let fan_out = topology.fan_out(layer);

            if topology.has_bias(layer) {
                neurons.push(Neuron::new(NeuronKind::Bias, random_weights(fan_out, rng)));
            }
            for _ in 0..topology.layer_size(layer) {
                neurons.push(Neuron::new(kind, random_weights(fan_out, rng)));
            }
        }
        debug_assert_eq!(neurons.len(), topology.total_neurons());

        log::debug!(
            "built network: layers={:?} bias={} activation={:?} neurons={}",
            config.layer_sizes, config.use_bias, config.activation, neurons.len()
        );

        Ok(Network {
            activation: config.activation.resolve(),
            config,
            topology,
            neurons,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// The whole flat store, layer by layer.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Borrows the read-only layout next to the mutable neuron store.
    pub(crate) fn parts_mut(&mut self) -> (&Topology, Activation, &mut [Neuron]) {
        (&self.topology, self.activation, &mut self.neurons)
    }

    pub fn neuron(&self, layer: usize, position: usize) -> &Neuron {
        &self.neurons[self.topology.locate(layer, position)]
    }

    /// Neurons of `layer` in position order, bias unit first when present.
    pub fn layer(&self, layer: usize) -> &[Neuron] {
        &self.neurons[self.topology.layer_range(layer)]
    }

    /// Outputs of the last layer in position order.
    pub fn output_vector(&self) -> Vec<f64> {
        self.layer(self.topology.last_layer())
            .iter()
            .map(|neuron| neuron.output)
            .collect()
    }

    /// Overwrites the outgoing weights of one neuron.
    ///
    /// # Panics
    /// Panics if the index is out of range or `weights` has the wrong length.
    pub fn set_weights(&mut self, layer: usize, position: usize, weights: &[f64]) {
        let index = self.topology.locate(layer, position);
        let neuron = &mut self.neurons[index];
        assert_eq!(
            neuron.weights.len(),
            weights.len(),
            "layer {layer} position {position} has {} outgoing weights",
            neuron.weights.len()
        );
        neuron.weights.copy_from_slice(weights);
    }

    /// Sets every weight in the network to `value`.
    pub fn fill_weights(&mut self, value: f64) {
        for neuron in &mut self.neurons {
            neuron.weights.iter_mut().for_each(|w| *w = value);
        }
    }
}

fn random_weights<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>()).collect()
}
