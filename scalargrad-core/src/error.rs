use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Numeric edge cases (division by zero, `exp` overflow, ...) are never reported
/// here: they surface as IEEE infinities or NaNs in node values. This enum only
/// covers misuse of the graph arena and of the layers built on top of it.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Node #{index} is out of bounds for a graph holding {len} nodes")]
    NodeOutOfBounds { index: usize, len: usize },

    #[error("Node #{index} belongs to generation {generation}, but the slot now holds generation {current} (graph was rewound)")]
    StaleNode {
        index: usize,
        generation: u32,
        current: u32,
    },

    #[error("Node #{index} is not a leaf (produced by '{op}'); only leaf values can be replaced")]
    NotALeaf { index: usize, op: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Graph generation {generation} cannot be incremented; build a new graph")]
    GenerationOverflow { generation: u32 },

    #[error("Cannot rewind to mark {mark}: graph only holds {len} nodes")]
    MarkOutOfRange { mark: usize, len: usize },

    #[error("Input arity mismatch in {module}: expected {expected} inputs, got {actual}")]
    InputArityMismatch {
        expected: usize,
        actual: usize,
        module: String,
    },

    #[error("Length mismatch: {predictions} predictions for {targets} targets")]
    LengthMismatch { predictions: usize, targets: usize },

    #[error("Operation '{operation}' requires at least one input")]
    EmptyInput { operation: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Value {value} cannot be represented in the graph's scalar type")]
    NumericCast { value: f64 },

    #[error("Invalid hyperparameter '{name}' = {value}: {reason}")]
    InvalidHyperparameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
