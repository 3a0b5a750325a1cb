//! End-to-end behaviour of construction, inference and training.

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dot_nn::network::NeuronKind;
use dot_nn::{
    train_loop, ActivationFunction, Backprop, Network, NetworkConfig, NetworkError, TrainConfig,
};

fn seeded(sizes: &[usize], use_bias: bool, activation: ActivationFunction, rate: f64, seed: u64) -> Network {
    let config = NetworkConfig::new(sizes.to_vec(), use_bias, activation, rate);
    Network::with_rng(config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap()
}

fn outputs(network: &Network) -> Vec<f64> {
    network.neurons().iter().map(|n| n.output).collect()
}

#[test]
fn test_single_weight_inference() {
    for (x, w) in [(0.0f64, 0.3f64), (1.5, 0.8), (-2.0, 0.1), (4.0, 0.999)] {
        let mut network = seeded(&[1, 1], false, ActivationFunction::Sigmoid, 0.1, 1);
        network.set_weights(0, 0, &[w]);
        network.run(&[x]).unwrap();
        let expected = 1.0 / (1.0 + (-(x * w)).exp());
        assert_abs_diff_eq!(network.output_vector()[0], expected, epsilon = 1e-9);
    }
}

#[test]
fn test_inference_is_deterministic() {
    let mut network = seeded(&[2, 6, 2], true, ActivationFunction::Tanh, 0.1, 11);
    network.run(&[0.3, -0.7]).unwrap();
    let first = network.output_vector();
    network.run(&[5.0, 5.0]).unwrap();
    for _ in 0..5 {
        network.run(&[0.3, -0.7]).unwrap();
        assert_eq!(network.output_vector(), first);
    }
}

#[test]
fn test_weight_vectors_match_next_layer_width() {
    let shapes: [&[usize]; 4] = [&[1, 1], &[2, 6, 2], &[3, 5, 4, 1], &[4, 1, 7]];
    for (seed, sizes) in shapes.iter().enumerate() {
        for use_bias in [false, true] {
            let network = seeded(sizes, use_bias, ActivationFunction::Sigmoid, 0.1, seed as u64);
            let topology = network.topology();
            for layer in 0..topology.num_layers() {
                let expected = if layer == topology.last_layer() { 0 } else { sizes[layer + 1] };
                for neuron in network.layer(layer) {
                    assert_eq!(neuron.weights.len(), expected, "sizes {sizes:?} bias {use_bias} layer {layer}");
                }
            }
            let bias_units = network.neurons().iter().filter(|n| n.kind == NeuronKind::Bias).count();
            let expected_bias = if use_bias { sizes.len() - 1 } else { 0 };
            assert_eq!(bias_units, expected_bias);
            assert_eq!(network.neurons().len(), sizes.iter().sum::<usize>() + expected_bias);
        }
    }
}

#[test]
fn test_bias_units_stay_pinned_to_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut network = seeded(&[2, 4, 3, 2], true, ActivationFunction::Sigmoid, 0.3, 21);
    let mut backprop = Backprop::new(&network);

    let check = |network: &Network| {
        for layer in 0..network.topology().last_layer() {
            let bias = network.neuron(layer, 0);
            assert_eq!(bias.kind, NeuronKind::Bias);
            assert_eq!(bias.output, 1.0);
        }
    };

    check(&network);
    for _ in 0..50 {
        let inputs: [f64; 2] = [rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)];
        network.run(&inputs).unwrap();
        check(&network);
        backprop.learn(&mut network, &inputs, &[1.0, 0.0]).unwrap();
        check(&network);
    }
}

#[test]
fn test_wrong_input_width_fails_without_mutation() {
    let mut network = seeded(&[2, 3, 1], true, ActivationFunction::Sigmoid, 0.1, 4);
    network.run(&[0.5, 0.25]).unwrap();
    let before = outputs(&network);

    for bad in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
        match network.run(bad) {
            Err(NetworkError::InputMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, bad.len());
            }
            other => panic!("expected InputMismatch, got {other:?}"),
        }
        assert_eq!(outputs(&network), before);
    }
}

#[test]
fn test_one_step_raises_hidden_to_output_weights() {
    let mut network = seeded(&[2, 2, 1], false, ActivationFunction::Sigmoid, 0.5, 8);
    network.fill_weights(0.5);
    let mut backprop = Backprop::new(&network);
    backprop.learn(&mut network, &[1.0, 1.0], &[1.0]).unwrap();

    for position in 0..2 {
        let weight = network.neuron(1, position).weights[0];
        assert!(weight > 0.5, "hidden neuron {position} weight {weight} did not increase");
    }
}

/// Points on either side of the line y = x, kept a margin away from it.
fn separable_points(rng: &mut ChaCha8Rng, count: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut inputs = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);
    while inputs.len() < count {
        let x: f64 = rng.gen_range(-1.0..1.0);
        let y: f64 = rng.gen_range(-1.0..1.0);
        let margin = y - x;
        if margin.abs() < 0.2 {
            continue;
        }
        inputs.push(vec![x, y]);
        targets.push(if margin > 0.0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] });
    }
    (inputs, targets)
}

#[test]
fn test_training_error_trends_down() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let (inputs, targets) = separable_points(&mut rng, 20);
    let config = NetworkConfig::new(vec![2, 6, 2], false, ActivationFunction::Sigmoid, 0.1);
    let mut network = Network::with_rng(config, &mut rng).unwrap();

    let train_config = TrainConfig::new(2000, 0.0);
    let report = train_loop(&mut network, &inputs, &targets, &train_config, &mut rng).unwrap();
    assert_eq!(report.epochs_run, 2000);

    let windows = report.window_means(100);
    let first = windows[0];
    for (start, &mean) in windows.iter().enumerate().skip(500) {
        assert!(mean <= first, "window at epoch {start} averaged {mean}, first window {first}");
    }
    assert!(report.final_error().unwrap() < first);
}
