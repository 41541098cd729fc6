//! Logical code tables.

use crate::*;

/// Number of data code groups in a complete table.
pub const FULL_DATA_CODES: usize = 256;

/// Number of control code groups in a complete table.
pub const FULL_CTRL_CODES: usize = 12;

/// Octet-indexed code-group table. Later insertions replace earlier ones.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: [Option<CodeGroup>; ENCODE_DEPTH],
}

impl Default for CodeTable {
    fn default() -> Self { Self { entries: std::array::from_fn(|_| None) } }
}

impl CodeTable {
    /// Inserts the record at its octet, returning the record it replaced.
    pub fn insert(&mut self, group: CodeGroup) -> Option<CodeGroup> {
        let slot = &mut self.entries[usize::from(group.octet)];
        slot.replace(group)
    }

    /// Returns the record for the octet.
    pub fn get(&self, octet: u8) -> Option<&CodeGroup> { self.entries[usize::from(octet)].as_ref() }

    /// Number of populated octets.
    pub fn len(&self) -> usize { self.entries.iter().flatten().count() }

    /// Returns true if no octet is populated.
    pub fn is_empty(&self) -> bool { self.entries.iter().all(Option::is_none) }

    /// Iterates over the populated records in ascending octet order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeGroup> + '_ { self.entries.iter().flatten() }
}

/// Counts gathered while building the tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries in the data table
    pub data: usize,

    /// Entries in the control table
    pub ctrl: usize,

    /// Records with neither a `D` nor a `K` prefix
    pub ignored: usize,

    /// Records that replaced an earlier record for the same octet
    pub overwritten: usize,
}

impl BuildReport {
    /// Returns true if both tables have their standard size.
    pub fn is_full(&self) -> bool { self.data == FULL_DATA_CODES && self.ctrl == FULL_CTRL_CODES }
}

/// Data and control tables.
#[derive(Debug, Default, Clone)]
pub struct CodeTables {
    /// Data code groups
    pub data: CodeTable,

    /// Control code groups
    pub ctrl: CodeTable,
}

impl CodeTables {
    /// Builds the tables from records in encounter order.
    pub fn build<I>(records: I) -> (Self, BuildReport)
    where I: IntoIterator<Item = CodeGroup> {
        let mut tables = Self::default();
        let mut report = BuildReport::default();

        for group in records {
            let table = match group.kind {
                CodeKind::Data => &mut tables.data,
                CodeKind::Control => &mut tables.ctrl,
                CodeKind::Other => {
                    tracing::debug!(name = %group.name, "ignoring code group with unknown prefix");
                    report.ignored += 1;
                    continue;
                }
            };

            if let Some(previous) = table.insert(group) {
                tracing::debug!(name = %previous.name, octet = previous.octet, "replacing earlier code group");
                report.overwritten += 1;
            }
        }

        report.data = tables.data.len();
        report.ctrl = tables.ctrl.len();

        tracing::info!("Found {} data codes and {} control codes", report.data, report.ctrl);
        if !report.is_full() {
            tracing::warn!(
                "expected {} data codes and {} control codes, tables are incomplete",
                FULL_DATA_CODES,
                FULL_CTRL_CODES
            );
        }

        (tables, report)
    }

    /// Returns the table holding the given kind, or `None` for [`CodeKind::Other`].
    pub fn table(&self, kind: CodeKind) -> Option<&CodeTable> {
        match kind {
            CodeKind::Data => Some(&self.data),
            CodeKind::Control => Some(&self.ctrl),
            CodeKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, octet: u8, rd_neg: &str, rd_pos: &str) -> CodeGroup {
        CodeGroup::new(name, octet, rd_neg.parse().unwrap(), rd_pos.parse().unwrap())
    }

    #[test]
    fn splits_records_by_kind() {
        let (tables, report) = CodeTables::build(vec![
            group("D12.3", 0x0C, "1100100101", "0011010101"),
            group("K28.5", 0xBC, "0011111010", "1100000101"),
            group("X1.0", 0x01, "0111011001", "1000101001"),
        ]);

        assert_eq!(report, BuildReport { data: 1, ctrl: 1, ignored: 1, overwritten: 0 });
        assert!(!report.is_full());
        assert_eq!(tables.data.get(0x0C).unwrap().name, "D12.3");
        assert_eq!(tables.ctrl.get(0xBC).unwrap().name, "K28.5");
        assert!(tables.data.get(0x01).is_none());
        assert!(tables.table(CodeKind::Other).is_none());
    }

    #[test]
    fn last_record_wins_on_duplicate_octet() {
        let (tables, report) = CodeTables::build(vec![
            group("D12.3", 0x0C, "1100100101", "0011010101"),
            group("D12.3b", 0x0C, "1111100000", "0000011111"),
        ]);

        assert_eq!(report.data, 1);
        assert_eq!(report.overwritten, 1);
        assert_eq!(tables.data.get(0x0C).unwrap().rd_neg.to_string(), "1111100000");
    }

    #[test]
    fn iterates_in_octet_order() {
        let (tables, _) = CodeTables::build(vec![
            group("D2.0", 0x02, "1011010100", "0100101011"),
            group("D0.0", 0x00, "1001110100", "0110001011"),
        ]);

        let octets = tables.data.iter().map(|group| group.octet).collect::<Vec<_>>();
        assert_eq!(octets, vec![0x00, 0x02]);
        assert!(tables.ctrl.is_empty());
    }
}
