//! Evaluation of networks.

use num_traits::Float;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::neuron::{ComputeError, Neuron};

/// Orders the sensor inputs by sensor. `inputs` must hold exactly one value for every sensor.
pub fn collect_inputs<K, T>(sensors: &[String], inputs: &HashMap<K, T>) -> Result<Vec<T>, ComputeError>
where
    K: Borrow<str> + Hash + Eq,
    T: Float,
{
    if inputs.len() != sensors.len() {
        return Err(ComputeError::InputCount {
            expected: sensors.len(),
            found: inputs.len(),
        });
    }

    let unknown = inputs.keys().find(|&key| {
        let key = <K as Borrow<str>>::borrow(key);
        sensors
            .binary_search_by(|sensor| sensor.as_str().cmp(key))
            .is_err()
    });
    if let Some(key) = unknown {
        let key = <K as Borrow<str>>::borrow(key);
        return Err(ComputeError::UnknownSensor(key.to_string()));
    }

    // Same count, no unknown keys and distinct sensors: every sensor has an input
    Ok(sensors.iter().map(|sensor| inputs[sensor.as_str()]).collect())
}

/// Computes every neuron of `layer` with the same `inputs`, in order.
pub fn evaluate_layer<T: Float>(layer: &[Neuron], inputs: &[T]) -> Result<Vec<i64>, ComputeError> {
    layer.iter().map(|neuron| neuron.compute(inputs)).collect()
}

/// Converts the outputs of one layer into inputs for the next.
pub fn to_inputs<T: Float>(outputs: &[i64]) -> Vec<T> {
    outputs
        .iter()
        .map(|&output| T::from(output).unwrap_or_else(T::zero))
        .collect()
}
