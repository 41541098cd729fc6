//! Encode/decode round-trip over generated tables.

use memgen::*;
use proptest::prelude::*;

/// Table text where every record has a distinct octet per kind and every code is distinct per disparity.
fn table_text(codes: &[u16]) -> String {
    codes
        .iter()
        .enumerate()
        .map(|(index, code)| {
            let name = if index % 5 == 0 { format!("K{}.0", index) } else { format!("D{}.0", index) };
            let rd_neg = format!("{:010b}", code);
            let rd_pos = format!("{:010b}", code ^ 0x3FF);
            format!("{} {:02X} {} {} {} {}\n", name, index, &rd_neg[..6], &rd_neg[6..], &rd_pos[..6], &rd_pos[6..])
        })
        .collect()
}

proptest! {
    #[test]
    fn every_code_group_decodes_to_its_octet(codes in prop::collection::btree_set(0u16..1024, 1..=64)) {
        let codes = codes.into_iter().collect::<Vec<_>>();
        let parsed = parse_str(&table_text(&codes)).unwrap();
        let (tables, report) = CodeTables::build(parsed.records);
        prop_assert_eq!(report.data + report.ctrl, codes.len());

        let encode = EncodeTables::from_tables(&tables);
        let (decode, collisions) = DecodeTables::from_tables(&tables);
        prop_assert!(collisions.is_empty());
        prop_assert!(verify_round_trip(&tables, &encode, &decode).is_empty());

        for (kind, table) in [(CodeKind::Data, &tables.data), (CodeKind::Control, &tables.ctrl)] {
            for group in table.iter() {
                for disparity in Disparity::ALL {
                    let code = encode.lookup(kind, disparity, group.octet).unwrap();
                    let entry = decode.lookup(disparity, code).unwrap();
                    prop_assert_eq!(entry, DecodeEntry { control: kind == CodeKind::Control, octet: group.octet });
                }
            }
        }

        prop_assert_eq!(decode.rd_neg.populated(), codes.len());
        prop_assert_eq!(decode.rd_pos.populated(), codes.len());
    }

    #[test]
    fn encoder_memories_hold_one_entry_per_octet(codes in prop::collection::btree_set(1u16..1024, 1..=64)) {
        let codes = codes.into_iter().collect::<Vec<_>>();
        let parsed = parse_str(&table_text(&codes)).unwrap();
        let (tables, report) = CodeTables::build(parsed.records);
        let encode = EncodeTables::from_tables(&tables);

        prop_assert_eq!(encode.data_rd_neg.populated(), report.data);
        prop_assert_eq!(encode.ctrl_rd_neg.populated(), report.ctrl);
        prop_assert_eq!(encode.data_rd_neg.iter().count(), 256);
    }
}
