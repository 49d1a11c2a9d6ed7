//! Trains the 3-4-4-1 tanh network on the four-sample reference dataset and
//! prints its final predictions.
//!
//! Hyper-parameters come from `SCALARGRAD_*` environment variables, e.g.
//!
//! ```text
//! RUST_LOG=info SCALARGRAD_EPOCHS=500 cargo run --example xor_like
//! ```

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::Sequential;
use scalargrad_core::nn::Init;
use scalargrad_core::Graph;
use scalargrad_train::config::from_env;
use scalargrad_train::{predict, Dataset, TrainError, Trainer, VecDataset};

fn main() -> Result<(), TrainError> {
    env_logger::init();

    let config = from_env()?;
    let dataset = VecDataset::from_rows(
        vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )?;

    let mut graph: Graph<f64> = Graph::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let model = Sequential::mlp(&mut graph, 3, &[4, 4, 1], &Init::default(), &mut rng)?;
    info!("Built 3-4-4-1 network with seed {}", config.seed);

    let trainer = Trainer::new(config)?;
    let report = trainer.fit(&mut graph, &model, &dataset)?;
    if let Some(loss) = report.final_loss() {
        println!("Final loss after {} epochs: {:.6}", report.epochs_run, loss);
    }

    println!("Final predictions:");
    for index in 0..dataset.len() {
        let sample = dataset.get(index)?;
        let y = predict(&mut graph, &model, &sample.features)?;
        println!("target {:>5.2} {}", sample.target, graph.describe(y)?);
    }
    Ok(())
}
