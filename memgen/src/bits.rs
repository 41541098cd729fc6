//! Fixed-width bit-strings.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

use crate::*;

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    #[error("expected {expected} bits, found {found} characters in {literal:?}")]
    Width { literal: String, expected: usize, found: usize },

    #[error("invalid bit {character:?} in {literal:?}")]
    Digit { literal: String, character: char },
}

/// Unsigned value of exactly `N::WIDTH` bits, written most significant bit first.
pub struct Bits<N: Num> {
    value: u32,
    _marker: PhantomData<N>,
}

impl<N: Num> Bits<N> {
    /// Width of the bit-string.
    pub const WIDTH: usize = N::WIDTH;

    /// Creates a bit-string, or `None` if `value` does not fit in `N::WIDTH` bits.
    pub fn new(value: u32) -> Option<Self> {
        if value & !mask(N::WIDTH) == 0 {
            Some(Self { value, _marker: PhantomData })
        } else {
            None
        }
    }

    /// The all-zero bit-string.
    pub fn zero() -> Self { Self { value: 0, _marker: PhantomData } }

    /// Returns the unsigned value.
    pub fn value(self) -> u32 { self.value }

    /// Returns the value as a memory address.
    pub fn as_index(self) -> usize { self.value as usize }

    /// Places `self` in the upper bits and `lo` in the lower bits.
    pub fn concat<M: Num>(self, lo: Bits<M>) -> Bits<Sum<N, M>> {
        Bits { value: (self.value << M::WIDTH) | lo.value, _marker: PhantomData }
    }
}

impl Bits<U<1>> {
    /// Single bit from a flag.
    pub fn bit(flag: bool) -> Self { Self { value: flag as u32, _marker: PhantomData } }
}

impl From<u8> for Bits<OctetWidth> {
    fn from(octet: u8) -> Self { Self { value: u32::from(octet), _marker: PhantomData } }
}

impl<N: Num> FromStr for Bits<N> {
    type Err = BitsError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let found = literal.chars().count();
        if found != N::WIDTH {
            return Err(BitsError::Width { literal: literal.to_string(), expected: N::WIDTH, found });
        }

        let value = literal.chars().try_fold(0u32, |acc, character| match character {
            '0' => Ok(acc << 1),
            '1' => Ok((acc << 1) | 1),
            _ => Err(BitsError::Digit { literal: literal.to_string(), character }),
        })?;

        Ok(Self { value, _marker: PhantomData })
    }
}

impl<N: Num> fmt::Display for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:0width$b}", self.value, width = N::WIDTH) }
}

impl<N: Num> fmt::Debug for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Bits({})", self) }
}

impl<N: Num> Default for Bits<N> {
    fn default() -> Self { Self::zero() }
}

impl<N: Num> Clone for Bits<N> {
    fn clone(&self) -> Self { *self }
}

impl<N: Num> Copy for Bits<N> {}

impl<N: Num> PartialEq for Bits<N> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<N: Num> Eq for Bits<N> {}

impl<N: Num> PartialOrd for Bits<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<N: Num> Ord for Bits<N> {
    fn cmp(&self, other: &Self) -> Ordering { self.value.cmp(&other.value) }
}

impl<N: Num> Hash for Bits<N> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}
