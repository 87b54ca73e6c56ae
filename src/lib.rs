//! Linear-threshold neurons with integer genes, and a two-layer network that maps named sensor
//! values to triggered actions. Both have a compact binary encoding; neurons also have a base32hex
//! text form.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use neuron_net::Network;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let network = Network::random(vec!["light", "sound"], vec!["flee", "hide"], &mut rng).unwrap();
//!
//! // Get the triggered actions for the given sensor values
//! let inputs: HashMap<_, _> = vec![("light", 0.5), ("sound", 2.0)].into_iter().collect();
//! let actions = network.compute(&inputs).unwrap();
//! assert_eq!(2, actions.len());
//!
//! // Save and load the network
//! let bytes = network.to_bytes().unwrap();
//! assert_eq!(network, neuron_net::Network::from_bytes(&bytes).unwrap());
//!
//! // Derive a mutated network
//! let child = network.child(100, &mut rng).unwrap();
//! assert_eq!(network.sensors(), child.sensors());
//! ```

// Weighted sums are computed in the caller's float type. Non-finite sums never panic: NaN yields
// zero and positive infinity saturates.

pub mod encoding;
pub mod network;
pub mod neuron;

pub use self::network::{Layer, Network};
pub use self::neuron::Neuron;
