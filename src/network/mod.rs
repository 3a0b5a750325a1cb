pub mod config;
pub mod network;
pub mod neuron;
pub mod topology;

pub use config::NetworkConfig;
pub use network::Network;
pub use neuron::{Neuron, NeuronKind};
pub use topology::Topology;
