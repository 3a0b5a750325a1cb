/// Result type for this library.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by network construction, propagation and training.
///
/// `InputMismatch`, `TargetMismatch` and `IndexOutOfRange` are caller-contract
/// violations: the call that produced them is abandoned and neuron outputs
/// must not be trusted until the next successful `run`.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("inputs mismatch: expected {expected} values, got {actual}")]
    InputMismatch { expected: usize, actual: usize },

    #[error("targets mismatch: expected {expected} values, got {actual}")]
    TargetMismatch { expected: usize, actual: usize },

    #[error("neuron index out of range: layer {layer}, position {position}")]
    IndexOutOfRange { layer: usize, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
