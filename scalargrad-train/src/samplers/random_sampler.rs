// scalargrad-train/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A sampler that visits the dataset in a fresh random permutation per pass.
///
/// Owns a seeded generator: two samplers built with the same seed yield the
/// same sequence of epochs.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        RandomSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut self.rng);
        Box::new(indices.into_iter())
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
