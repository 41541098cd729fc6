//! Type-level bit widths.

use std::fmt::Debug;
use std::marker::PhantomData;

use static_assertions::const_assert_eq;

use crate::clog2;

/// Bit width known at compile time.
pub trait Num: Debug + Clone + Copy + 'static {
    /// Width.
    const WIDTH: usize;
}

/// Literal width.
#[derive(Debug, Clone, Copy)]
pub struct U<const N: usize>;

impl<const N: usize> Num for U<N> {
    const WIDTH: usize = N;
}

/// Concatenation of two fields, `L` in the upper bits.
#[derive(Debug, Clone, Copy)]
pub struct Sum<L: Num, R: Num>(PhantomData<(L, R)>);

impl<L: Num, R: Num> Num for Sum<L, R> {
    const WIDTH: usize = L::WIDTH + R::WIDTH;
}

/// Number of addresses reachable by an `N`-bit index.
#[derive(Debug, Clone, Copy)]
pub struct Pow2<N: Num>(PhantomData<N>);

impl<N: Num> Num for Pow2<N> {
    const WIDTH: usize = 2_usize.pow(N::WIDTH as u32);
}

/// 5b/6b sub-block, transmitted as `abcdei`.
pub type AbcdeiWidth = U<6>;

/// 3b/4b sub-block, transmitted as `fghj`.
pub type FghjWidth = U<4>;

/// Full code group.
pub type CodeWidth = Sum<AbcdeiWidth, FghjWidth>;

/// Unencoded octet.
pub type OctetWidth = U<8>;

/// Decoder entry: `{valid, control, octet}`.
pub type DecodeWidth = Sum<Sum<U<1>, U<1>>, OctetWidth>;

/// Depth of the encoder memories, one entry per octet.
pub const ENCODE_DEPTH: usize = <Pow2<OctetWidth> as Num>::WIDTH;

/// Depth of the decoder memories, one entry per code group.
pub const DECODE_DEPTH: usize = <Pow2<CodeWidth> as Num>::WIDTH;

const_assert_eq!(<CodeWidth as Num>::WIDTH, 10);
const_assert_eq!(<DecodeWidth as Num>::WIDTH, <CodeWidth as Num>::WIDTH);
const_assert_eq!(ENCODE_DEPTH, 256);
const_assert_eq!(DECODE_DEPTH, 1024);
const_assert_eq!(clog2(DECODE_DEPTH), <CodeWidth as Num>::WIDTH);
