// scalargrad-train/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_iter_is_permutation() {
    let dataset_len = 10;
    let mut sampler = RandomSampler::new(1);
    let indices: Vec<usize> = sampler.iter(dataset_len).collect();
    assert_eq!(indices.len(), dataset_len);
    let unique_indices: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique_indices, (0..dataset_len).collect());
}

#[test]
fn test_random_sampler_same_seed_same_epochs() {
    let mut a = RandomSampler::new(99);
    let mut b = RandomSampler::new(99);
    for _ in 0..3 {
        let ia: Vec<usize> = a.iter(8).collect();
        let ib: Vec<usize> = b.iter(8).collect();
        assert_eq!(ia, ib);
    }
}

#[test]
fn test_random_sampler_empty_dataset() {
    let mut sampler = RandomSampler::new(5);
    assert_eq!(sampler.iter(0).count(), 0);
}
