#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronKind {
    Input,
    Hidden,
    Output,
    Bias,
}

/// One unit of the flat neuron store.
///
/// `weights` holds the outgoing connections, one per regular neuron of the
/// next layer; it is empty in the output layer.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub kind: NeuronKind,
    /// Last computed activation. Raw input for `Input`, constant 1 for `Bias`.
    pub output: f64,
    pub weights: Vec<f64>,
}

impl Neuron {
    pub fn new(kind: NeuronKind, weights: Vec<f64>) -> Neuron {
        let output = if kind == NeuronKind::Bias { 1.0 } else { 0.0 };
        Neuron { kind, output, weights }
    }
}
