use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};

/// Shape and training hyperparameters of a network.
///
/// Fields:
/// - `layer_sizes`   — neuron count per layer, input first, output last
/// - `use_bias`      — adds one bias unit (output pinned to 1) to every
///                     non-output layer
/// - `activation`    — activation applied by every hidden and output neuron
/// - `learning_rate` — fixed SGD step size
///
/// The configuration is immutable once a `Network` has been built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub layer_sizes: Vec<usize>,
    pub use_bias: bool,
    pub activation: ActivationFunction,
    pub learning_rate: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            layer_sizes: vec![2, 6, 2],
            use_bias: false,
            activation: ActivationFunction::Sigmoid,
            learning_rate: 0.1,
        }
    }
}

impl NetworkConfig {
    pub fn new(layer_sizes: Vec<usize>, use_bias: bool, activation: ActivationFunction, learning_rate: f64) -> Self {
        NetworkConfig { layer_sizes, use_bias, activation, learning_rate }
    }

    /// Checks the constraints a network needs to be constructible.
    pub fn validate(&self) -> Result<()> {
        if self.layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidConfig(format!(
                "at least 2 layers are required, got {}",
                self.layer_sizes.len()
            )));
        }
        if let Some(layer) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidConfig(format!("layer {layer} has no neurons")));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    pub fn input_width(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    pub fn output_width(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    /// Serializes the configuration to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a configuration from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
