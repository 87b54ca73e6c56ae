//! Functions that wrap up the encoding functionality.

use std::fs::{DirBuilder, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(feature = "json")]
use super::PortableNet;
use super::{read_network, write_network, Error};
use crate::network::Network;

/// Loads a network in the binary network format from a file.
pub(crate) fn load_file<P: AsRef<Path>>(path: P) -> Result<Network, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    log::debug!("loading network from {}", path.display());
    read_network(&mut reader)
}

/// Saves a network in the binary network format to a file.
///
/// Recursively creates missing directories if `create_dirs` is `true`.
pub(crate) fn to_file<P: AsRef<Path>>(
    network: &Network,
    path: P,
    create_dirs: bool,
) -> Result<(), Error> {
    let path = path.as_ref();

    if create_dirs {
        if let Some(parent) = path.parent() {
            DirBuilder::new().recursive(true).create(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_network(network, &mut writer)?;

    writer.flush()?;

    log::debug!("saved network to {}", path.display());
    Ok(())
}

/// Loads a network from a JSON string.
#[cfg(feature = "json")]
pub(crate) fn load_json_str(s: &str) -> Result<Network, Error> {
    serde_json::from_str::<PortableNet>(s)?
        .build()
        .map_err(Into::into)
}

/// Encodes a network as a pretty-printed JSON string.
#[cfg(feature = "json")]
pub(crate) fn to_json_string(network: &Network) -> Result<String, Error> {
    serde_json::to_string_pretty(&PortableNet::new(network)).map_err(Into::into)
}
