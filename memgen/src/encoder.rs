//! Encoder memories.

use crate::*;

/// The four encoder memories: `{data, control} x {RD-, RD+}`.
#[derive(Debug, Default, Clone)]
pub struct EncodeTables {
    /// Data code groups, RD-
    pub data_rd_neg: EncodeMem,

    /// Data code groups, RD+
    pub data_rd_pos: EncodeMem,

    /// Control code groups, RD-
    pub ctrl_rd_neg: EncodeMem,

    /// Control code groups, RD+
    pub ctrl_rd_pos: EncodeMem,
}

impl EncodeTables {
    /// Expands the code tables into dense octet-indexed memories. Missing octets keep the all-zero code.
    pub fn from_tables(tables: &CodeTables) -> Self {
        let mut encode = Self::default();

        for group in tables.data.iter() {
            let addr = usize::from(group.octet);
            encode.data_rd_neg.set(addr, group.rd_neg);
            encode.data_rd_pos.set(addr, group.rd_pos);
        }

        for group in tables.ctrl.iter() {
            let addr = usize::from(group.octet);
            encode.ctrl_rd_neg.set(addr, group.rd_neg);
            encode.ctrl_rd_pos.set(addr, group.rd_pos);
        }

        encode
    }

    /// Returns the memory for the given kind and disparity, or `None` for [`CodeKind::Other`].
    pub fn mem(&self, kind: CodeKind, disparity: Disparity) -> Option<&EncodeMem> {
        match (kind, disparity) {
            (CodeKind::Data, Disparity::Negative) => Some(&self.data_rd_neg),
            (CodeKind::Data, Disparity::Positive) => Some(&self.data_rd_pos),
            (CodeKind::Control, Disparity::Negative) => Some(&self.ctrl_rd_neg),
            (CodeKind::Control, Disparity::Positive) => Some(&self.ctrl_rd_pos),
            (CodeKind::Other, _) => None,
        }
    }

    /// Returns the stored code group for an octet.
    pub fn lookup(&self, kind: CodeKind, disparity: Disparity, octet: u8) -> Option<Bits<CodeWidth>> {
        self.mem(kind, disparity)?.get(usize::from(octet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(records: &[(&str, u8, &str, &str)]) -> CodeTables {
        let records = records.iter().map(|(name, octet, rd_neg, rd_pos)| {
            CodeGroup::new(*name, *octet, rd_neg.parse().unwrap(), rd_pos.parse().unwrap())
        });
        CodeTables::build(records).0
    }

    #[test]
    fn writes_codes_at_octet_address() {
        let encode = EncodeTables::from_tables(&tables(&[("D12.3", 0x0C, "1100100101", "0011010101")]));

        assert_eq!(encode.data_rd_neg.get(12).unwrap().to_string(), "1100100101");
        assert_eq!(encode.data_rd_pos.get(12).unwrap().to_string(), "0011010101");
        assert_eq!(encode.data_rd_neg.populated(), 1);
        assert_eq!(encode.ctrl_rd_neg.populated(), 0);
    }

    #[test]
    fn missing_octets_keep_default() {
        let encode = EncodeTables::from_tables(&tables(&[("K28.5", 0xBC, "0011111010", "1100000101")]));

        assert_eq!(encode.lookup(CodeKind::Control, Disparity::Positive, 0xBC).unwrap().to_string(), "1100000101");
        assert_eq!(encode.lookup(CodeKind::Control, Disparity::Positive, 0xBD), Some(Bits::zero()));
        assert_eq!(encode.lookup(CodeKind::Data, Disparity::Negative, 0xBC), Some(Bits::zero()));
        assert_eq!(encode.lookup(CodeKind::Other, Disparity::Negative, 0xBC), None);
        assert_eq!(encode.data_rd_pos.iter().count(), 256);
    }
}
