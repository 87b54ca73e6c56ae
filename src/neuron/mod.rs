//! The integer-gene neuron and its wire encoding.

mod error;
mod marshal;

pub use error::{ComputeError, GeneCountError, MutationError};
pub use marshal::Marshal;
pub(crate) use marshal::{GENE_LEN, HEADER_LEN};

use num_traits::Float;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::io::Read;
use std::ops::Range;
use std::str::FromStr;

use crate::encoding::{self, DecodeError};

/// The range random genes are drawn from by [`Neuron::random`].
pub const RANDOM_GENE_RANGE: Range<i32> = -1000..1000;

/// A linear-threshold neuron: an ordered vector of integer weights ("genes").
///
/// The number of genes is fixed at construction. A `Neuron` is a plain value; mutation through
/// [`child`][Self::child] produces a new one, and [`Clone`] produces an independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<i32>", into = "Vec<i32>"))]
pub struct Neuron {
    genes: Vec<i32>,
}

impl Neuron {
    /// Returns a new `Neuron` with the given genes, in order.
    ///
    /// Fails if there are more than `u16::MAX` genes, which the wire format cannot describe.
    pub fn new<G: Into<Vec<i32>>>(genes: G) -> Result<Self, GeneCountError> {
        let genes = genes.into();

        if genes.len() > usize::from(u16::MAX) {
            return Err(GeneCountError(genes.len()));
        }

        Ok(Self { genes })
    }

    /// Returns a new `Neuron` with `size` genes, each drawn uniformly from [`RANDOM_GENE_RANGE`].
    pub fn random<R: Rng + ?Sized>(size: u16, rng: &mut R) -> Self {
        let genes = (0..size)
            .map(|_| rng.gen_range(RANDOM_GENE_RANGE))
            .collect();

        Self { genes }
    }

    /// Decodes a `Neuron` from its wire encoding. `bytes` must hold exactly one encoded neuron.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let header = bytes.get(..HEADER_LEN).ok_or(DecodeError::Truncated {
            expected: HEADER_LEN,
            found: bytes.len(),
        })?;
        let count = usize::from(u16::from_be_bytes([header[0], header[1]]));
        let expected = HEADER_LEN + GENE_LEN * count;

        match bytes.len().cmp(&expected) {
            Ordering::Less => Err(DecodeError::Truncated {
                expected,
                found: bytes.len(),
            }),
            Ordering::Greater => Err(DecodeError::TrailingBytes {
                expected,
                found: bytes.len(),
            }),
            Ordering::Equal => Ok(Self::from_gene_bytes(&bytes[HEADER_LEN..])),
        }
    }

    /// Reads exactly one encoded `Neuron` from `reader`, leaving any following bytes unread.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self, encoding::Error> {
        let mut header = [0; HEADER_LEN];
        encoding::read_full(reader, &mut header)?;

        let count = usize::from(u16::from_be_bytes(header));
        let mut body = vec![0; GENE_LEN * count];
        encoding::read_full(reader, &mut body)?;

        log::trace!("read neuron with {} genes", count);
        Ok(Self::from_gene_bytes(&body))
    }

    /// Decodes a `Neuron` from its base32hex text form (see [`Display`][fmt::Display]).
    /// Surrounding whitespace is ignored.
    pub fn from_text(text: &str) -> Result<Self, DecodeError> {
        let bytes = encoding::decode_text(text.trim())?;
        Self::from_bytes(&bytes)
    }

    // The caller guarantees `body` is a whole number of genes and at most `u16::MAX` of them
    fn from_gene_bytes(body: &[u8]) -> Self {
        let genes = body
            .chunks_exact(GENE_LEN)
            .map(|chunk| i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Self { genes }
    }

    /// Returns the number of genes of this `Neuron`.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns whether this `Neuron` has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn gene(&self, index: usize) -> i32 {
        self.genes[index]
    }

    /// Returns the genes of this `Neuron`.
    pub fn genes(&self) -> &[i32] {
        &self.genes
    }

    /// Evaluates the neuron: the sum of each parameter weighted by the gene at the same position.
    /// A strictly positive sum is truncated toward zero, anything else yields `0`.
    ///
    /// Exactly one parameter per gene is required.
    pub fn compute<T: Float>(&self, params: &[T]) -> Result<i64, ComputeError> {
        if params.len() != self.genes.len() {
            return Err(ComputeError::ParameterCount {
                expected: self.genes.len(),
                found: params.len(),
            });
        }

        let sum = params
            .iter()
            .zip(&self.genes)
            .fold(T::zero(), |sum, (&param, &gene)| sum + param * weight::<T>(gene));

        Ok(threshold(sum))
    }

    /// Returns a mutated copy of this `Neuron`. Each gene is offset by an independent value drawn
    /// uniformly from `-(deviation / 2)..deviation - deviation / 2`.
    ///
    /// `deviation` must be positive. Offset genes saturate at the bounds of `i32`.
    pub fn child<R: Rng + ?Sized>(&self, deviation: i32, rng: &mut R) -> Result<Self, MutationError> {
        if deviation <= 0 {
            return Err(MutationError::InvalidDeviation(deviation));
        }

        let half = deviation / 2;
        let genes = self
            .genes
            .iter()
            .map(|&gene| gene.saturating_add(rng.gen_range(0..deviation) - half))
            .collect();

        Ok(Self { genes })
    }

    /// Returns the wire encoding of this `Neuron` as a lazy byte sequence.
    pub fn marshal(&self) -> Marshal<'_> {
        Marshal::new(&self.genes)
    }
}

// Every `i32` is exactly representable by the float types `compute` is used with
fn weight<T: Float>(gene: i32) -> T {
    T::from(gene).unwrap_or_else(T::zero)
}

fn threshold<T: Float>(sum: T) -> i64 {
    if sum > T::zero() {
        sum.to_i64().unwrap_or(i64::MAX)
    } else {
        0
    }
}

/// Formats the neuron as the unpadded base32hex encoding of its wire bytes.
impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes: Vec<u8> = self.marshal().collect();
        f.write_str(&encoding::encode_text(&bytes))
    }
}

impl FromStr for Neuron {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<Vec<i32>> for Neuron {
    type Error = GeneCountError;

    fn try_from(genes: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(genes)
    }
}

impl From<Neuron> for Vec<i32> {
    fn from(neuron: Neuron) -> Self {
        neuron.genes
    }
}
