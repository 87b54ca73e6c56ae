//! Error types for neuron evaluation, mutation and construction.

use std::{error, fmt};

/// The reason why a [`Neuron`][super::Neuron] or [`Network`][crate::Network] could not be
/// evaluated with the given inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// A neuron received a different number of parameters than it has genes.
    ParameterCount { expected: usize, found: usize },
    /// A network received a different number of inputs than it has sensors.
    InputCount { expected: usize, found: usize },
    /// A network received an input for a sensor it does not have.
    UnknownSensor(String),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ParameterCount { expected, found } => {
                write!(f, "expected {} parameters, got {}", expected, found)
            }
            Self::InputCount { expected, found } => {
                write!(f, "expected {} sensor inputs, got {}", expected, found)
            }
            Self::UnknownSensor(name) => write!(f, "input for unknown sensor {:?}", name),
        }
    }
}

impl error::Error for ComputeError {}

/// The reason why a mutated child could not be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationError {
    /// The deviation must be strictly positive. Contains the rejected value.
    InvalidDeviation(i32),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidDeviation(deviation) => {
                write!(f, "deviation must be positive, got {}", deviation)
            }
        }
    }
}

impl error::Error for MutationError {}

/// A gene vector is too long for its count to fit the 16-bit wire header. Contains the length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneCountError(pub usize);

impl fmt::Display for GeneCountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a neuron holds at most {} genes, got {}",
            u16::MAX,
            self.0
        )
    }
}

impl error::Error for GeneCountError {}
