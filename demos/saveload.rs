//! An example of saving and loading a network to/from files. Requires the `json` feature.

use neuron_net::Network;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let network = Network::random(vec!["light", "sound", "smell"], vec!["flee", "hide"], &mut rng)
        .unwrap();

    // Save the network in the binary format and load it back
    network.to_file("test_output/network.net", true).unwrap();
    let loaded = Network::load_file("test_output/network.net").unwrap();
    assert_eq!(network, loaded);

    // Neurons have a text form as well
    for neuron in loaded.front_layer().iter().chain(loaded.back_layer()) {
        println!("{}", neuron);
    }

    // The same network as JSON
    let json = loaded.to_json_string().unwrap();
    println!("{}", json);
    assert_eq!(network, Network::load_json_str(&json).unwrap());
}
