//! The lazy byte sequence produced by [`Neuron::marshal`][super::Neuron::marshal].

use std::iter::FusedIterator;

/// Size in bytes of the gene count header.
pub(crate) const HEADER_LEN: usize = 2;
/// Size in bytes of a single encoded gene.
pub(crate) const GENE_LEN: usize = 4;

/// Yields the wire encoding of a neuron one byte at a time: the gene count as a big-endian `u16`
/// followed by every gene as a big-endian two's-complement `i32`.
///
/// Every call to `marshal` starts a new sequence; cloning a `Marshal` forks it at its current
/// position.
#[derive(Clone, Debug)]
pub struct Marshal<'a> {
    genes: &'a [i32],
    position: usize,
}

impl<'a> Marshal<'a> {
    pub(crate) fn new(genes: &'a [i32]) -> Self {
        Self { genes, position: 0 }
    }

    fn total_len(&self) -> usize {
        HEADER_LEN + GENE_LEN * self.genes.len()
    }

    fn byte_at(&self, position: usize) -> u8 {
        if position < HEADER_LEN {
            // Construction caps the gene count at `u16::MAX`
            let count = self.genes.len() as u16;
            count.to_be_bytes()[position]
        } else {
            let offset = position - HEADER_LEN;
            self.genes[offset / GENE_LEN].to_be_bytes()[offset % GENE_LEN]
        }
    }
}

impl<'a> Iterator for Marshal<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.position >= self.total_len() {
            return None;
        }

        let byte = self.byte_at(self.position);
        self.position += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Marshal<'a> {}

impl<'a> FusedIterator for Marshal<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_layout() {
        let genes = [-1, 1];
        let bytes: Vec<u8> = Marshal::new(&genes).collect();

        assert_eq!(
            vec![0x00, 0x02, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01],
            bytes
        );
    }

    #[test]
    fn test_marshal_empty() {
        let bytes: Vec<u8> = Marshal::new(&[]).collect();
        assert_eq!(vec![0x00, 0x00], bytes);
    }

    #[test]
    fn test_marshal_len_and_fork() {
        let genes = [7, -7, 0x01020304];
        let mut marshal = Marshal::new(&genes);
        assert_eq!(14, marshal.len());

        marshal.next();
        marshal.next();
        let fork = marshal.clone();
        assert_eq!(12, fork.len());

        let rest: Vec<u8> = marshal.collect();
        let forked: Vec<u8> = fork.collect();
        assert_eq!(rest, forked);
        assert_eq!(&[0x01, 0x02, 0x03, 0x04], &rest[8..]);
    }
}
