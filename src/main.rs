// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run the dot classifier with:
//   cargo run --bin dots
fn main() {
    println!("dot-nn: a neuron-and-weight feed-forward network in Rust.");
    println!("Run `cargo run --bin dots` to train on the dot set and render the decision grid.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
