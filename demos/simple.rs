//! An example of building, evaluating, and mutating a network.

use std::collections::HashMap;

use neuron_net::{Network, Neuron};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Build a network from explicit weights; names are sorted, so "sensor 1" is the first input
    let network = Network::new(
        vec!["sensor 3", "sensor 2", "sensor 1"],
        vec!["action 2", "action 1"],
        vec![
            Neuron::new(vec![274, -486, 353]).unwrap(),
            Neuron::new(vec![-494, 515, -504]).unwrap(),
        ],
        vec![
            Neuron::new(vec![-233, 77]).unwrap(),
            Neuron::new(vec![288, -72]).unwrap(),
        ],
    )
    .unwrap();

    println!("{}", network);

    // Use the network
    let inputs: HashMap<_, _> = vec![("sensor 1", 1.0), ("sensor 2", 1.0), ("sensor 3", 1.0)]
        .into_iter()
        .collect();
    let output = network.compute(&inputs).unwrap();
    println!("output: {:?}", output);

    // Mutate the network
    let mut rng = StdRng::seed_from_u64(0);
    let child = network.child(100, &mut rng).unwrap();
    println!("{}", child);

    let output_2 = child.compute(&inputs).unwrap();
    println!("output 2: {:?}", output_2);
}
