use std::collections::HashMap;
use std::fs;

use neuron_net::encoding::{self, DecodeError};
use neuron_net::network::Error as NetworkError;
use neuron_net::{Layer, Network, Neuron};
use rand::rngs::StdRng;
use rand::SeedableRng;

// A network saved by the format's first implementation: sensors "sensor 1".."sensor 3", actions
// "action 1" and "action 2"
const SAVED_NETWORK: &str = "01QG00000C000SR5DPPMUSH064076PBEEDNN481I01PMARJJDTP20CO000100031CDQ6IRRE40OG0\
                             OB3EHKMURH0680000G000004000001G00012BVVVVGQ00002O800FVVVVGI000040VVVVV0G002\
                             000000NVVVVHE000016G00G0000I1VVVVUS0000000";

const FRONT_NEURONS: [&str; 2] = ["001G00012BVVVVGQ00002O8", "001VVVVU280000G3VVVVS20"];
const BACK_NEURONS: [&str; 2] = ["001FVVVV2S00002D", "0010000143VVVVTO"];

fn saved_bytes() -> Vec<u8> {
    encoding::decode_text(SAVED_NETWORK).unwrap()
}

fn parse_layer(texts: &[&str]) -> Vec<Neuron> {
    texts.iter().map(|text| text.parse().unwrap()).collect()
}

fn reference_network() -> Network {
    Network::new(
        vec!["sensor 3", "sensor 2", "sensor 1"],
        vec!["action 2", "action 1"],
        parse_layer(&FRONT_NEURONS),
        parse_layer(&BACK_NEURONS),
    )
    .unwrap()
}

fn texts(layer: &[Neuron]) -> Vec<String> {
    layer.iter().map(ToString::to_string).collect()
}

#[test]
fn test_save_matches_reference() {
    let bytes = reference_network().to_bytes().unwrap();

    assert_eq!(saved_bytes(), bytes);
    assert_eq!(SAVED_NETWORK, encoding::encode_text(&bytes));
}

#[test]
fn test_load_reference() {
    let bytes = saved_bytes();
    let network = Network::load(&mut &bytes[..]).unwrap();

    assert_eq!(&["sensor 1", "sensor 2", "sensor 3"], network.sensors());
    assert_eq!(&["action 1", "action 2"], network.actions());
    assert_eq!(FRONT_NEURONS.to_vec(), texts(network.layer(Layer::Front)));
    assert_eq!(BACK_NEURONS.to_vec(), texts(network.layer(Layer::Back)));
    assert_eq!(reference_network(), network);
}

#[test]
fn test_header_fields() {
    let bytes = saved_bytes();
    let declared = usize::from(u16::from_be_bytes([bytes[0], bytes[1]]));

    assert_eq!(bytes.len() - 4, declared);
    assert_eq!(&[0, 0], &bytes[2..4]);
    assert_eq!(&[0, 0, 0, 0], &bytes[bytes.len() - 4..]);
}

#[test]
fn test_compute_reference() {
    let network = reference_network();

    let inputs: HashMap<_, _> = vec![("sensor 1", 1.0), ("sensor 2", 1.0), ("sensor 3", 1.0)]
        .into_iter()
        .collect();
    let outputs = network.compute(&inputs).unwrap();
    assert_eq!(1, outputs.values().filter(|&&triggered| triggered).count());
    assert!(outputs["action 2"]);

    let inputs: HashMap<_, _> = vec![("sensor 1", 10.0), ("sensor 2", 2.5), ("sensor 3", -100.0)]
        .into_iter()
        .collect();
    let outputs = network.compute(&inputs).unwrap();
    assert!(outputs["action 1"]);
    assert!(!outputs["action 2"]);
}

#[test]
fn test_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for count in 1..5 {
        let sensors: Vec<String> = (0..count * 3).map(|i| format!("sensor {}", i)).collect();
        let actions: Vec<String> = (0..count).map(|i| format!("action {}", i)).collect();
        let network = Network::random(sensors, actions, &mut rng).unwrap();

        let mut bytes = Vec::new();
        network.save(&mut bytes).unwrap();
        assert_eq!(network, Network::load(&mut &bytes[..]).unwrap());

        for neuron in network.front_layer().iter().chain(network.back_layer()) {
            let encoded: Vec<u8> = neuron.marshal().collect();
            assert_eq!(neuron, &Neuron::from_bytes(&encoded).unwrap());
            assert_eq!(neuron, &neuron.to_string().parse::<Neuron>().unwrap());
        }
    }
}

#[test]
fn test_from_bytes_trailing() {
    let mut bytes = saved_bytes();
    let len = bytes.len();
    bytes.push(0);

    assert!(matches!(
        Network::from_bytes(&bytes),
        Err(encoding::Error::Decode(DecodeError::TrailingBytes { expected, found }))
            if expected == len && found == len + 1
    ));
}

#[test]
fn test_load_rejects_invalid_network() {
    let network = Network::new(
        vec!["a", "b", "c"],
        vec!["x", "y", "z"],
        vec![Neuron::new(vec![1, 2, 3]).unwrap(); 3],
        vec![Neuron::new(vec![1, 2, 3]).unwrap(); 3],
    )
    .unwrap();
    let mut bytes = network.to_bytes().unwrap();

    // Drop the last action; both layers then hold one neuron too many
    let actions_end = bytes.windows(2).position(|w| w == b"z\0").unwrap();
    bytes.drain(actions_end..actions_end + 2);
    bytes[15] = 0x02;

    assert!(matches!(
        Network::from_bytes(&bytes),
        Err(encoding::Error::Network(NetworkError::LayerSize {
            layer: Layer::Front,
            expected: 2,
            found: 3
        }))
    ));
}

#[test]
fn test_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("neuron-net-test-{}", std::process::id()));
    let path = dir.join("nested").join("reference.net");

    let network = reference_network();
    network.to_file(&path, true).unwrap();

    assert_eq!(saved_bytes(), fs::read(&path).unwrap());
    assert_eq!(network, Network::load_file(&path).unwrap());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_file_missing() {
    let path = std::env::temp_dir().join("neuron-net-missing").join("none.net");
    assert!(matches!(
        Network::load_file(&path),
        Err(encoding::Error::Io(_))
    ));
}

#[cfg(feature = "json")]
#[test]
fn test_json_round_trip() {
    let network = reference_network();
    let json = network.to_json_string().unwrap();

    assert_eq!(network, Network::load_json_str(&json).unwrap());

    let invalid = json.replace("\"sensor 3\"", "\"sensor 2\"");
    assert!(matches!(
        Network::load_json_str(&invalid),
        Err(encoding::Error::Network(NetworkError::NeuronSize { .. }))
    ));
}
