use scalargrad_core::ScalarGradError;
use scalargrad_train::{Sample, VecDataset};

/// The four-sample dataset of the reference 3-4-4-1 network.
#[allow(dead_code)]
pub fn reference_dataset() -> Result<VecDataset<Sample<f64>>, ScalarGradError> {
    VecDataset::from_rows(
        vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )
}

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
