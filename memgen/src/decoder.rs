//! Decoder memories.
//!
//! The decoder memory for a disparity is addressed by the 10-bit code group itself. Each word packs
//! `{valid, control, octet[7:0]}`; addresses that are not a code group of the table stay all-zero, i.e. invalid.

use itertools::iproduct;
use linked_hash_map::LinkedHashMap;

use crate::*;

/// Decoded code group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeEntry {
    /// Control code group
    pub control: bool,

    /// Decoded octet
    pub octet: u8,
}

impl DecodeEntry {
    /// Packs into a valid decoder word.
    pub fn pack(self) -> Bits<DecodeWidth> {
        Bits::<U<1>>::bit(true).concat(Bits::<U<1>>::bit(self.control)).concat(Bits::<OctetWidth>::from(self.octet))
    }

    /// Unpacks a decoder word, or `None` if its valid bit is clear.
    pub fn unpack(word: Bits<DecodeWidth>) -> Option<Self> {
        let value = word.value();
        let octet_width = <OctetWidth as Num>::WIDTH;
        if (value >> (octet_width + 1)) & 1 == 0 {
            return None;
        }
        Some(Self { control: (value >> octet_width) & 1 == 1, octet: (value & mask(octet_width)) as u8 })
    }
}

/// Two code groups of one disparity mapped to the same code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Disparity of the colliding codes
    pub disparity: Disparity,

    /// The shared code group
    pub code: Bits<CodeWidth>,

    /// Name of the code group that was replaced
    pub previous_name: String,

    /// Entry that was replaced
    pub previous: DecodeEntry,

    /// Name of the code group that won
    pub replacement_name: String,

    /// Entry that won
    pub replacement: DecodeEntry,
}

/// The two decoder memories.
#[derive(Debug, Default, Clone)]
pub struct DecodeTables {
    /// Indexed by RD- code groups
    pub rd_neg: DecodeMem,

    /// Indexed by RD+ code groups
    pub rd_pos: DecodeMem,
}

struct Reverse<'a> {
    name: &'a str,
    entry: DecodeEntry,
}

impl DecodeTables {
    /// Inverts the code tables. Data code groups are indexed before control code groups, so a control code group
    /// replaces a data code group with the same code. Every replacement is returned as a [`Collision`].
    pub fn from_tables(tables: &CodeTables) -> (Self, Vec<Collision>) {
        let mut decode = Self::default();
        let mut collisions = Vec::new();

        for disparity in Disparity::ALL {
            let mut index = LinkedHashMap::<Bits<CodeWidth>, Reverse<'_>>::new();

            let data = tables.data.iter().map(|group| (group, false));
            let ctrl = tables.ctrl.iter().map(|group| (group, true));
            for (group, control) in data.chain(ctrl) {
                let code = group.code(disparity);
                let reverse = Reverse { name: &group.name, entry: DecodeEntry { control, octet: group.octet } };

                if let Some(previous) = index.insert(code, reverse) {
                    tracing::warn!("{} code {} of {} replaces {}", disparity, code, group.name, previous.name);
                    collisions.push(Collision {
                        disparity,
                        code,
                        previous_name: previous.name.to_string(),
                        previous: previous.entry,
                        replacement_name: group.name.clone(),
                        replacement: DecodeEntry { control, octet: group.octet },
                    });
                }
            }

            let mem = decode.mem_mut(disparity);
            for (code, reverse) in index.iter() {
                if !mem.set(code.as_index(), reverse.entry.pack()) {
                    tracing::warn!(
                        "{} code {} of {} is outside the decoder address space",
                        disparity,
                        code,
                        reverse.name
                    );
                }
            }
        }

        (decode, collisions)
    }

    /// Returns the memory for the disparity.
    pub fn mem(&self, disparity: Disparity) -> &DecodeMem {
        match disparity {
            Disparity::Negative => &self.rd_neg,
            Disparity::Positive => &self.rd_pos,
        }
    }

    fn mem_mut(&mut self, disparity: Disparity) -> &mut DecodeMem {
        match disparity {
            Disparity::Negative => &mut self.rd_neg,
            Disparity::Positive => &mut self.rd_pos,
        }
    }

    /// Decodes a code group received under the given disparity.
    pub fn lookup(&self, disparity: Disparity, code: Bits<CodeWidth>) -> Option<DecodeEntry> {
        DecodeEntry::unpack(self.mem(disparity).get(code.as_index())?)
    }
}

/// Code group whose encoder and decoder entries disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripMismatch {
    /// Name of the code group
    pub name: String,

    /// Disparity checked
    pub disparity: Disparity,

    /// Code group expected to round-trip
    pub code: Bits<CodeWidth>,

    /// Entry the decoder should produce
    pub expected: DecodeEntry,

    /// Entry the decoder produces
    pub found: Option<DecodeEntry>,
}

/// Checks that every code group in the tables encodes to its code and decodes back to its octet and kind.
pub fn verify_round_trip(tables: &CodeTables, encode: &EncodeTables, decode: &DecodeTables) -> Vec<RoundTripMismatch> {
    let mut mismatches = Vec::new();

    for (kind, disparity) in iproduct!([CodeKind::Data, CodeKind::Control], Disparity::ALL) {
        let table = some_or!(tables.table(kind), continue);
        for group in table.iter() {
            let code = some_or!(encode.lookup(kind, disparity, group.octet), continue);
            let expected = DecodeEntry { control: kind == CodeKind::Control, octet: group.octet };
            let found = decode.lookup(disparity, code);

            if code != group.code(disparity) || found != Some(expected) {
                tracing::warn!("{} {} does not round-trip through code {}", group.name, disparity, code);
                mismatches.push(RoundTripMismatch { name: group.name.clone(), disparity, code, expected, found });
            }
        }
    }

    mismatches
}
