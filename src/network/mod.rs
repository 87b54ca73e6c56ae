//! The two-layer sensor/action network.

mod error;
mod evaluate;

pub use error::Error;

use num_traits::Float;
use rand::Rng;

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::io::{Read, Write};
use std::path::Path;

use crate::encoding::{self, DecodeError};
use crate::neuron::{ComputeError, MutationError, Neuron};

/// One of the two layers of a [`Network`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The first layer, one neuron per action, each taking every sensor value.
    Front,
    /// The second layer, one neuron per action, each taking every front layer output.
    Back,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

// NOTE: All `Network` objects must be fully valid, and all methods assume this to be true
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    // Sorted and deduplicated; the position of a sensor is its input slot
    sensors: Vec<String>,
    // Sorted and deduplicated; the position of an action is its output slot
    actions: Vec<String>,
    // One neuron per action, each with one gene per sensor
    front: Vec<Neuron>,
    // One neuron per action, each with one gene per action
    back: Vec<Neuron>,
}

impl Network {
    /// Returns a new `Network` with the given sensors, actions and layers.
    ///
    /// Sensor and action names are deduplicated and sorted; this order is the order of the
    /// network's inputs and outputs. Both layers must hold one neuron per action. Front layer
    /// neurons must have one gene per sensor, and back layer neurons one gene per action.
    pub fn new<S, A>(sensors: S, actions: A, front: Vec<Neuron>, back: Vec<Neuron>) -> Result<Self, Error>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let sensors = canonical_names(sensors);
        let actions = canonical_names(actions);

        check_names(&sensors, &actions)?;
        check_layer(Layer::Front, &front, actions.len(), sensors.len())?;
        check_layer(Layer::Back, &back, actions.len(), actions.len())?;

        Ok(Self {
            sensors,
            actions,
            front,
            back,
        })
    }

    /// Returns a new `Network` with the given sensors and actions, and random neurons.
    ///
    /// See [`Neuron::random`].
    pub fn random<S, A, R>(sensors: S, actions: A, rng: &mut R) -> Result<Self, Error>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        R: Rng + ?Sized,
    {
        let sensors = canonical_names(sensors);
        let actions = canonical_names(actions);

        check_names(&sensors, &actions)?;
        // `check_names` bounds both counts
        let sensor_count = u16::try_from(sensors.len()).map_err(|_| Error::TooManySensors(sensors.len()))?;
        let action_count = u16::try_from(actions.len()).map_err(|_| Error::TooManyActions(actions.len()))?;

        let front = (0..action_count)
            .map(|_| Neuron::random(sensor_count, rng))
            .collect();
        let back = (0..action_count)
            .map(|_| Neuron::random(action_count, rng))
            .collect();

        Self::new(sensors, actions, front, back)
    }

    /// Loads a network saved by [`save`][Self::save] from `reader`, leaving any following bytes
    /// unread.
    ///
    /// The loaded parts are validated as by [`Network::new`]. Names are read one byte at a time, so
    /// a buffered reader should be used for unbuffered sources.
    pub fn load<R: Read + ?Sized>(reader: &mut R) -> Result<Self, encoding::Error> {
        encoding::read_network(reader)
    }

    /// Saves this network to `writer` in the binary network format.
    ///
    /// Fails with [`PayloadTooLarge`][encoding::Error::PayloadTooLarge] if the encoding exceeds
    /// the format's 16-bit length header, in which case nothing is written.
    pub fn save<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), encoding::Error> {
        encoding::write_network(self, writer)
    }

    /// Decodes a network from `bytes`, which must hold exactly one saved network.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, encoding::Error> {
        let mut reader = bytes;
        let network = Self::load(&mut reader)?;

        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                expected: bytes.len() - reader.len(),
                found: bytes.len(),
            }
            .into());
        }

        Ok(network)
    }

    /// Returns this network in the binary network format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, encoding::Error> {
        let mut bytes = Vec::new();
        self.save(&mut bytes)?;
        Ok(bytes)
    }

    /// Loads a network in the binary network format from a file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, encoding::Error> {
        encoding::load_file(path)
    }

    /// Saves this network in the binary network format to a file.
    ///
    /// Recursively creates missing directories if `create_dirs` is `true`.
    pub fn to_file<P: AsRef<Path>>(&self, path: P, create_dirs: bool) -> Result<(), encoding::Error> {
        encoding::to_file(self, path, create_dirs)
    }

    /// Loads a network from a JSON string produced by [`to_json_string`][Self::to_json_string].
    #[cfg(feature = "json")]
    pub fn load_json_str(s: &str) -> Result<Self, encoding::Error> {
        encoding::load_json_str(s)
    }

    /// Encodes this network as a JSON string. See [`PortableNet`][encoding::PortableNet] for other
    /// formats.
    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> Result<String, encoding::Error> {
        encoding::to_json_string(self)
    }

    /// Returns the sorted sensor names.
    pub fn sensors(&self) -> &[String] {
        &self.sensors
    }

    /// Returns the sorted action names.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Returns the front layer, one neuron per action.
    pub fn front_layer(&self) -> &[Neuron] {
        &self.front
    }

    /// Returns the back layer, one neuron per action.
    pub fn back_layer(&self) -> &[Neuron] {
        &self.back
    }

    /// Returns the neurons of the given layer.
    pub fn layer(&self, layer: Layer) -> &[Neuron] {
        match layer {
            Layer::Front => &self.front,
            Layer::Back => &self.back,
        }
    }

    /// Evaluates the network and returns whether each action is triggered.
    ///
    /// `inputs` must hold one value for each sensor and nothing else. The sensor values, in sensor
    /// order, are computed by every front layer neuron; those outputs, in order, are computed by
    /// every back layer neuron. An action is triggered if its back layer neuron outputs more than
    /// zero.
    pub fn compute<K, T>(&self, inputs: &HashMap<K, T>) -> Result<HashMap<String, bool>, ComputeError>
    where
        K: Borrow<str> + Hash + Eq,
        T: Float,
    {
        let inputs = evaluate::collect_inputs(&self.sensors, inputs)?;
        let middle = evaluate::evaluate_layer(&self.front, &inputs)?;
        let outputs = evaluate::evaluate_layer(&self.back, &evaluate::to_inputs::<T>(&middle))?;

        Ok(self
            .actions
            .iter()
            .cloned()
            .zip(outputs.into_iter().map(|output| output > 0))
            .collect())
    }

    /// Returns a copy of this network with every neuron replaced by an independently drawn
    /// [`child`][Neuron::child].
    pub fn child<R: Rng + ?Sized>(&self, deviation: i32, rng: &mut R) -> Result<Self, MutationError> {
        let front = self
            .front
            .iter()
            .map(|neuron| neuron.child(deviation, rng))
            .collect::<Result<_, _>>()?;
        let back = self
            .back
            .iter()
            .map(|neuron| neuron.child(deviation, rng))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            sensors: self.sensors.clone(),
            actions: self.actions.clone(),
            front,
            back,
        })
    }
}

/// Formats the sensors, the actions and the text form of every neuron, one per line, with each
/// layer followed by an empty line.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SENSORS: {}", self.sensors.join(", "))?;
        writeln!(f, "ACTIONS: {}", self.actions.join(", "))?;
        writeln!(f, "NEURONS:")?;

        for layer in [&self.front, &self.back] {
            for neuron in layer {
                writeln!(f, "{}", neuron)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "-----")
    }
}

fn canonical_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn check_names(sensors: &[String], actions: &[String]) -> Result<(), Error> {
    if sensors.is_empty() {
        return Err(Error::EmptySensors);
    }
    if actions.is_empty() {
        return Err(Error::EmptyActions);
    }
    if sensors.len() > usize::from(u16::MAX) {
        return Err(Error::TooManySensors(sensors.len()));
    }
    if actions.len() > usize::from(u16::MAX) {
        return Err(Error::TooManyActions(actions.len()));
    }

    match sensors.iter().chain(actions).find(|name| name.contains('\0')) {
        Some(name) => Err(Error::InvalidName(name.clone())),
        None => Ok(()),
    }
}

fn check_layer(layer: Layer, neurons: &[Neuron], count: usize, size: usize) -> Result<(), Error> {
    if neurons.len() != count {
        return Err(Error::LayerSize {
            layer,
            expected: count,
            found: neurons.len(),
        });
    }

    for (index, neuron) in neurons.iter().enumerate() {
        if neuron.len() != size {
            return Err(Error::NeuronSize {
                layer,
                index,
                expected: size,
                found: neuron.len(),
            });
        }
    }

    Ok(())
}
