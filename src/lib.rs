pub mod error;
pub mod activation;
pub mod network;
pub mod propagation;
pub mod loss;
pub mod train;
pub mod grid;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::activation::ActivationFunction;
pub use network::network::Network;
pub use network::config::NetworkConfig;
pub use network::topology::Topology;
pub use propagation::backprop::Backprop;
pub use loss::mse::MseLoss;
pub use train::{train_loop, TrainConfig, TrainReport};
pub use grid::{classify_grid, GridSpec};
