use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Selects the (activation, derivative) pair used by every computed neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    /// Step function. Not differentiable, so its derivative is defined as 0
    /// and a Binary network never changes its weights under `learn`.
    Binary,
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation of a weighted sum.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::Binary => binary(x),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Derivative expressed in terms of the already-activated output `y`.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid_derivative(y),
            ActivationFunction::Binary => binary_derivative(y),
            ActivationFunction::Tanh => tanh_derivative(y),
        }
    }

    /// Resolves the variant into plain function pointers once, so the
    /// propagation loops do not re-dispatch per neuron.
    pub fn resolve(&self) -> Activation {
        match self {
            ActivationFunction::Sigmoid => Activation {
                function: sigmoid,
                derivative: sigmoid_derivative,
            },
            ActivationFunction::Binary => Activation {
                function: binary,
                derivative: binary_derivative,
            },
            ActivationFunction::Tanh => Activation {
                function: f64::tanh,
                derivative: tanh_derivative,
            },
        }
    }
}

/// A resolved (activation, derivative) pair.
#[derive(Debug, Clone, Copy)]
pub struct Activation {
    pub function: fn(f64) -> f64,
    /// Takes the activated output, not the weighted sum.
    pub derivative: fn(f64) -> f64,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

fn binary(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { 0.0 }
}

fn binary_derivative(_y: f64) -> f64 {
    0.0
}

fn tanh_derivative(y: f64) -> f64 {
    1.0 - y * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_matches_closed_form() {
        let f = ActivationFunction::Sigmoid;
        assert_abs_diff_eq!(f.function(0.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(f.function(2.0), 1.0 / (1.0 + (-2.0f64).exp()), epsilon = 1e-12);
        assert_abs_diff_eq!(f.derivative(0.5), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn binary_steps_at_zero_and_has_flat_derivative() {
        let f = ActivationFunction::Binary;
        assert_eq!(f.function(0.0), 1.0);
        assert_eq!(f.function(-1e-9), 0.0);
        assert_eq!(f.function(3.0), 1.0);
        assert_eq!(f.derivative(1.0), 0.0);
        assert_eq!(f.derivative(0.0), 0.0);
    }

    #[test]
    fn tanh_derivative_uses_output() {
        let f = ActivationFunction::Tanh;
        let y = f.function(0.7);
        assert_abs_diff_eq!(y, 0.7f64.tanh(), epsilon = 1e-12);
        assert_abs_diff_eq!(f.derivative(y), 1.0 - y * y, epsilon = 1e-12);
    }

    #[test]
    fn resolved_pair_agrees_with_enum_dispatch() {
        for kind in [ActivationFunction::Sigmoid, ActivationFunction::Binary, ActivationFunction::Tanh] {
            let pair = kind.resolve();
            for x in [-3.0, -0.5, 0.0, 0.25, 4.0] {
                assert_eq!((pair.function)(x), kind.function(x));
                let y = kind.function(x);
                assert_eq!((pair.derivative)(y), kind.derivative(y));
            }
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ActivationFunction::Tanh).unwrap();
        assert_eq!(json, "\"tanh\"");
    }
}
