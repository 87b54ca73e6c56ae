//! The error type for creation of networks.

use std::{error, fmt};

use super::Layer;

/// The reason why a set of sensors, actions and layers does not form a valid network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No sensor names were given.
    EmptySensors,
    /// No action names were given.
    EmptyActions,
    /// More distinct sensor names were given than the encoding can hold. Contains their count.
    TooManySensors(usize),
    /// More distinct action names were given than the encoding can hold. Contains their count.
    TooManyActions(usize),
    /// A sensor or action name contains a NUL byte, which terminates names in the encoding.
    InvalidName(String),
    /// A layer does not hold exactly one neuron per action.
    LayerSize {
        layer: Layer,
        expected: usize,
        found: usize,
    },
    /// A neuron does not have exactly one gene per input of its layer.
    NeuronSize {
        layer: Layer,
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptySensors => write!(f, "no sensor supplied"),
            Self::EmptyActions => write!(f, "no action supplied"),
            Self::TooManySensors(count) => {
                write!(f, "{} sensors exceed the maximum of {}", count, u16::MAX)
            }
            Self::TooManyActions(count) => {
                write!(f, "{} actions exceed the maximum of {}", count, u16::MAX)
            }
            Self::InvalidName(name) => write!(f, "name {:?} contains a NUL byte", name),
            Self::LayerSize {
                layer,
                expected,
                found,
            } => write!(
                f,
                "{} layer: expected one neuron for each of the {} actions, got {}",
                layer, expected, found
            ),
            Self::NeuronSize {
                layer,
                index,
                expected,
                found,
            } => write!(
                f,
                "{} layer, neuron {}: expected size {}, got {}",
                layer, index, expected, found
            ),
        }
    }
}

impl error::Error for Error {}
