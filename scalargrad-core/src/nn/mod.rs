// src/nn/mod.rs
// Neural-network building blocks on top of the scalar graph: parameters,
// the Module trait, neurons and layers, initialisation and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

pub use init::Init;
pub use layers::{Activation, Linear, Neuron};
pub use losses::{mse_loss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
