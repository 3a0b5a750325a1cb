/// dot-nn dots
///
/// Trains a network on the built-in two-class dot set, then writes the
/// decision grid and the training error curve as PNG files.
///
/// Run with:
///   cargo run --bin dots --release -- --seed 7
///
/// Log verbosity follows `RUST_LOG` (default `info`).

mod dots;
mod render;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dot_nn::grid::{classify_grid, GridSpec};
use dot_nn::{Network, NetworkConfig, TrainConfig, train_loop};

#[derive(Parser, Debug)]
#[command(name = "dots", about = "Train a feed-forward network on 2-D dots and render its decision grid")]
struct Cli {
    /// Network configuration JSON; defaults to [2, 6, 2], sigmoid, no bias
    #[arg(short, long)]
    config: Option<String>,

    /// Maximum number of epochs
    #[arg(short, long, default_value_t = 2000)]
    epochs: usize,

    /// Per-sample error at which a dot counts as learned
    #[arg(long, default_value_t = 0.01)]
    allowed_error: f64,

    /// Stop as soon as every dot is learned instead of running all epochs
    #[arg(long)]
    stop_on_convergence: bool,

    /// Overrides the configured learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Adds bias units regardless of the configuration
    #[arg(long)]
    bias: bool,

    /// Seed for weight initialisation and sample order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output path of the decision grid image
    #[arg(short, long, default_value = "grid.png")]
    output: String,

    /// Output path of the error curve image
    #[arg(long, default_value = "error.png")]
    error_output: String,

    /// Pixel size of one grid cell
    #[arg(long, default_value_t = 7)]
    cell_size: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NetworkConfig::load_json(path)?,
        None => NetworkConfig::default(),
    };
    if let Some(rate) = cli.learning_rate {
        config.learning_rate = rate;
    }
    config.use_bias |= cli.bias;

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut network = Network::with_rng(config, &mut rng)?;
    let (inputs, targets) = dots::training_set();
    log::info!(
        "training {:?} network on {} dots for up to {} epochs",
        network.config().layer_sizes, inputs.len(), cli.epochs
    );

    let mut train_config = TrainConfig::new(cli.epochs, cli.allowed_error);
    train_config.stop_on_convergence = cli.stop_on_convergence;
    let report = train_loop(&mut network, &inputs, &targets, &train_config, &mut rng)?;
    log::info!(
        "ran {} epochs, converged: {}, final mean error: {:.6}",
        report.epochs_run,
        report.converged,
        report.final_error().unwrap_or(f64::NAN)
    );

    let spec = GridSpec::default();
    let cells = classify_grid(&mut network, &spec)?;
    render::render_grid(&cli.output, spec, cli.cell_size, &cells, &inputs, &targets)?;
    log::info!("decision grid written to {}", cli.output);

    let height = (spec.ys().count() as u32 * cli.cell_size * 2) / 3;
    render::render_error_curve(&cli.error_output, &report.sample_errors, cli.allowed_error, height)?;
    log::info!("error curve written to {}", cli.error_output);

    Ok(())
}
