mod common;

use common::{init_logging, reference_dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::Sequential;
use scalargrad_core::nn::{Init, Module};
use scalargrad_core::Graph;
use scalargrad_train::{Dataset, TrainConfig, TrainError, Trainer};

fn reference_model(graph: &mut Graph<f64>, seed: u64) -> Result<Sequential<f64>, TrainError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Sequential::mlp(graph, 3, &[4, 4, 1], &Init::default(), &mut rng)?)
}

#[test]
fn test_reference_network_learns_dataset() -> Result<(), TrainError> {
    init_logging();
    let dataset = reference_dataset()?;
    let mut graph = Graph::<f64>::new();
    let model = reference_model(&mut graph, 42)?;
    assert_eq!(model.parameters().len(), 41);

    let config = TrainConfig {
        epochs: 400,
        log_every: 100,
        ..TrainConfig::default()
    };
    let report = Trainer::new(config)?.fit(&mut graph, &model, &dataset)?;

    assert_eq!(report.epochs_run, 400);
    let first = report.initial_loss().unwrap_or(f64::NAN);
    let last = report.final_loss().unwrap_or(f64::NAN);
    assert!(last < first, "loss went from {} to {}", first, last);
    assert!(last < 0.1, "final loss {} is not below 0.1", last);

    // Every prediction has the sign of its target.
    for (i, &pred) in report.predictions.iter().enumerate() {
        let target = dataset.get(i)?.target;
        assert!(pred * target > 0.0, "sample {}: predicted {} for {}", i, pred, target);
    }
    Ok(())
}

#[test]
fn test_same_seed_same_run() -> Result<(), TrainError> {
    let dataset = reference_dataset()?;
    let config = TrainConfig {
        epochs: 25,
        log_every: 0,
        shuffle: true,
        ..TrainConfig::default()
    };

    let mut reports = Vec::new();
    for _ in 0..2 {
        let mut graph = Graph::<f64>::new();
        let model = reference_model(&mut graph, 7)?;
        reports.push(Trainer::new(config.clone())?.fit(&mut graph, &model, &dataset)?);
    }
    assert_eq!(reports[0], reports[1]);
    Ok(())
}

#[test]
fn test_momentum_training_reduces_loss() -> Result<(), TrainError> {
    let dataset = reference_dataset()?;
    let mut graph = Graph::<f64>::new();
    let model = reference_model(&mut graph, 1)?;
    let config = TrainConfig {
        epochs: 200,
        learning_rate: 0.05,
        momentum: 0.5,
        log_every: 0,
        ..TrainConfig::default()
    };
    let report = Trainer::new(config)?.fit(&mut graph, &model, &dataset)?;
    let first = report.initial_loss().unwrap_or(f64::NAN);
    let last = report.final_loss().unwrap_or(f64::NAN);
    assert!(last < first && last < 0.1, "loss went from {} to {}", first, last);
    Ok(())
}
