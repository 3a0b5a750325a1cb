use dot_nn::{ActivationFunction, Backprop, MseLoss, Network, NetworkConfig};

fn main() {
    let config = NetworkConfig::new(vec![2, 3, 1], true, ActivationFunction::Sigmoid, 0.5);
    let mut network = Network::new(config).expect("valid configuration");
    let mut backprop = Backprop::new(&network);

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 10000;

    for epoch in 0..epochs {
        let mut loss = 0.0;
        for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
            backprop.learn(&mut network, input, expected).expect("sample widths match the network");
            loss += MseLoss::loss(&network.output_vector(), expected);
        }
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {:.6}", loss / inputs.len() as f64);
        }
    }

    for input in &inputs {
        network.run(input).expect("input width matches the network");
        println!("Input: {:?} -> Output: {:.4}", input, network.output_vector()[0]);
    }
}
