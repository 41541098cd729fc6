//! Utilities.

/// Returns ceiling log2.
pub const fn clog2(value: usize) -> usize {
    if value == 0 {
        0
    } else {
        (::std::mem::size_of::<usize>() * 8) - (value - 1).leading_zeros() as usize
    }
}

/// Returns the bit mask covering the lowest `width` bits.
pub const fn mask(width: usize) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Strips an optional `0x`/`0X` prefix from a hexadecimal literal.
pub fn strip_hex_prefix(literal: &str) -> &str {
    literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")).unwrap_or(literal)
}

/// Some or executing the given expression.
#[macro_export]
macro_rules! some_or {
    ($e:expr, $err:expr) => {{
        match $e {
            Some(r) => r,
            None => $err,
        }
    }};
}
