//! Dense memory images.

use std::fmt;

use crate::*;

/// Fixed-depth memory of `W`-bit words. Every word starts as the all-zero default.
pub struct MemArray<W: Num, const DEPTH: usize> {
    words: [Bits<W>; DEPTH],
}

impl<W: Num, const DEPTH: usize> MemArray<W, DEPTH> {
    /// Creates a memory filled with the all-zero default.
    pub fn new() -> Self { Self { words: [Bits::zero(); DEPTH] } }

    /// Returns the word at the address.
    pub fn get(&self, addr: usize) -> Option<Bits<W>> { self.words.get(addr).copied() }

    /// Writes the word at the address. Returns false, leaving the memory untouched, if the address is out of range.
    pub fn set(&mut self, addr: usize, word: Bits<W>) -> bool {
        let slot = some_or!(self.words.get_mut(addr), return false);
        *slot = word;
        true
    }

    /// Iterates over all words in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = Bits<W>> + '_ { self.words.iter().copied() }

    /// Number of words that differ from the default.
    pub fn populated(&self) -> usize { self.words.iter().filter(|word| **word != Bits::zero()).count() }
}

impl<W: Num, const DEPTH: usize> Default for MemArray<W, DEPTH> {
    fn default() -> Self { Self::new() }
}

impl<W: Num, const DEPTH: usize> Clone for MemArray<W, DEPTH> {
    fn clone(&self) -> Self { Self { words: self.words } }
}

impl<W: Num, const DEPTH: usize> fmt::Debug for MemArray<W, DEPTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemArray")
            .field("width", &W::WIDTH)
            .field("depth", &DEPTH)
            .field("populated", &self.populated())
            .finish()
    }
}

/// Encoder memory, indexed by octet.
pub type EncodeMem = MemArray<CodeWidth, ENCODE_DEPTH>;

/// Decoder memory, indexed by code group.
pub type DecodeMem = MemArray<DecodeWidth, DECODE_DEPTH>;
