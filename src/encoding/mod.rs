//! The binary and text encodings of [`Neuron`]s and [`Network`]s.
//!
//! A network is saved as:
//!
//! 1. a length field holding the number of bytes that follow it,
//! 2. the sensor names, as a count field followed by NUL-terminated names,
//! 3. the action names, in the same shape,
//! 4. a count field holding the number of layers, always `2`,
//! 5. the front layer, as a count field followed by the wire encoding of each neuron,
//! 6. the back layer, in the same shape,
//! 7. four zero bytes.
//!
//! Length and count fields are four bytes wide, with the big-endian `u16` value in the first two
//! bytes and the last two bytes always zero.

mod error;
mod functions;

use data_encoding::BASE32HEX_NOPAD;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::io::{self, Read, Write};

use crate::network::{self, Network};
use crate::neuron::Neuron;

pub use error::{DecodeError, Error};
pub(crate) use functions::*;

/// Width in bytes of the length and count fields.
const FIELD_LEN: usize = 4;
/// The number of layers every encoded network declares.
const LAYER_COUNT: usize = 2;
const TRAILER: [u8; FIELD_LEN] = [0; FIELD_LEN];

/// Encodes bytes as unpadded, upper-case base32hex (RFC 4648, section 7).
pub fn encode_text(bytes: &[u8]) -> String {
    BASE32HEX_NOPAD.encode(bytes)
}

/// Decodes unpadded, upper-case base32hex text.
pub fn decode_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    BASE32HEX_NOPAD
        .decode(text.as_bytes())
        .map_err(|_| DecodeError::InvalidText)
}

/// Fills `buf` from `reader`, reporting a short read as [`DecodeError::Truncated`].
pub(crate) fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), Error> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(DecodeError::Truncated {
                    expected: buf.len(),
                    found: filled,
                }
                .into())
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

// NOTE: The zero low half of every field is most likely an artifact of the format's first
//       implementation reusing one zeroed four-byte buffer, but existing files depend on it
fn write_field(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
    buf.extend_from_slice(&[0, 0]);
}

// Network validation bounds every count written here by `u16::MAX`
fn write_count(buf: &mut Vec<u8>, count: usize) {
    write_field(buf, count as u16);
}

fn read_field<R: Read + ?Sized>(reader: &mut R) -> Result<usize, Error> {
    let mut field = [0; FIELD_LEN];
    read_full(reader, &mut field)?;
    Ok(usize::from(u16::from_be_bytes([field[0], field[1]])))
}

fn write_names(buf: &mut Vec<u8>, names: &[String]) {
    write_count(buf, names.len());

    for name in names {
        buf.extend_from_slice(name.as_bytes());
        buf.push(0);
    }
}

fn read_names<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<String>, Error> {
    let count = read_field(reader)?;
    (0..count).map(|_| read_name(reader)).collect()
}

fn read_name<R: Read + ?Sized>(reader: &mut R) -> Result<String, Error> {
    let mut bytes = Vec::new();

    loop {
        let mut byte = [0; 1];
        read_full(reader, &mut byte)?;

        if byte[0] == 0 {
            break;
        }
        bytes.push(byte[0]);
    }

    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidName.into())
}

fn write_layer(buf: &mut Vec<u8>, layer: &[Neuron]) {
    write_count(buf, layer.len());

    for neuron in layer {
        buf.extend(neuron.marshal());
    }
}

fn read_layer<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<Neuron>, Error> {
    let count = read_field(reader)?;
    (0..count).map(|_| Neuron::read_from(reader)).collect()
}

/// Writes `network` to `writer` in the binary network format.
pub(crate) fn write_network<W: Write + ?Sized>(network: &Network, writer: &mut W) -> Result<(), Error> {
    let mut payload = Vec::new();

    write_names(&mut payload, network.sensors());
    write_names(&mut payload, network.actions());
    write_count(&mut payload, LAYER_COUNT);
    write_layer(&mut payload, network.front_layer());
    write_layer(&mut payload, network.back_layer());
    payload.extend_from_slice(&TRAILER);

    if payload.len() > usize::from(u16::MAX) {
        return Err(Error::PayloadTooLarge(payload.len()));
    }

    let mut header = Vec::with_capacity(FIELD_LEN);
    write_count(&mut header, payload.len());

    writer.write_all(&header)?;
    writer.write_all(&payload)?;

    log::debug!(
        "saved network with {} sensors and {} actions ({} bytes)",
        network.sensors().len(),
        network.actions().len(),
        FIELD_LEN + payload.len()
    );
    Ok(())
}

/// Reads one network in the binary network format from `reader` and validates it.
pub(crate) fn read_network<R: Read + ?Sized>(reader: &mut R) -> Result<Network, Error> {
    // The declared length is not needed to parse the rest
    let declared_len = read_field(reader)?;
    let sensors = read_names(reader)?;
    let actions = read_names(reader)?;

    let layer_count = read_field(reader)?;
    if layer_count != LAYER_COUNT {
        return Err(DecodeError::LayerCount(layer_count).into());
    }

    let front = read_layer(reader)?;
    let back = read_layer(reader)?;

    let mut trailer = [0; FIELD_LEN];
    read_full(reader, &mut trailer)?;
    if trailer != TRAILER {
        return Err(DecodeError::Trailer.into());
    }

    log::debug!(
        "loaded network with {} sensors and {} actions ({} bytes declared)",
        sensors.len(),
        actions.len(),
        declared_len
    );
    Network::new(sensors, actions, front, back).map_err(Into::into)
}

/// A serializable form of a [`Network`], for formats other than the binary network format.
///
/// Building it runs the same validation as [`Network::new`].
///
/// # Examples
///
/// ```
/// # use neuron_net::{Network, Neuron};
/// # let network = Network::new(
/// #     vec!["light"],
/// #     vec!["move"],
/// #     vec![Neuron::new(vec![3]).unwrap()],
/// #     vec![Neuron::new(vec![1]).unwrap()],
/// # ).unwrap();
/// use neuron_net::encoding::PortableNet;
///
/// // Any format supported by `serde` can be used here
/// let string = serde_json::to_string(&PortableNet::new(&network)).unwrap();
/// let deserialized: PortableNet = serde_json::from_str(&string).unwrap();
/// assert_eq!(network, deserialized.build().unwrap());
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortableNet {
    pub sensors: Vec<String>,
    pub actions: Vec<String>,
    pub front: Vec<Neuron>,
    pub back: Vec<Neuron>,
}

#[cfg(feature = "serde")]
impl PortableNet {
    /// Copies the parts of `network` into a `PortableNet`.
    pub fn new(network: &Network) -> Self {
        Self {
            sensors: network.sensors().to_vec(),
            actions: network.actions().to_vec(),
            front: network.front_layer().to_vec(),
            back: network.back_layer().to_vec(),
        }
    }

    /// Builds the `PortableNet` into a [`Network`].
    pub fn build(self) -> Result<Network, network::Error> {
        Network::new(self.sensors, self.actions, self.front, self.back)
    }
}

#[cfg(feature = "serde")]
impl From<&Network> for PortableNet {
    fn from(network: &Network) -> Self {
        Self::new(network)
    }
}
