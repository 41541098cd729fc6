//! Code-group table parser.
//!
//! Each record line has six whitespace-separated fields:
//!
//! ```text
//! CODE_NAME OCTET_HEX RD_NEG_ABCDEI RD_NEG_FGHJ RD_POS_ABCDEI RD_POS_FGHJ
//! ```
//!
//! Lines starting with `#` are comments. Lines with any other number of fields are not records and are skipped,
//! while a record with a corrupt field value fails the whole parse.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::*;

/// Number of fields in a record line.
pub const RECORD_FIELDS: usize = 6;

/// Comment marker.
pub const COMMENT_MARKER: char = '#';

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: {literal:?} is not a hexadecimal octet (00-FF)")]
    Octet { line: usize, literal: String },

    #[error("line {line}: invalid {field} field: {source}")]
    Field { line: usize, field: &'static str, source: BitsError },
}

/// Classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace only.
    Blank,

    /// Comment line.
    Comment,

    /// Wrong number of fields.
    Malformed {
        /// Number of fields found
        fields: usize,
    },

    /// Code-group record.
    Record(CodeGroup),
}

/// Line skipped because it had the wrong number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,

    /// Number of fields found
    pub fields: usize,
}

/// Result of parsing a whole table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Records in encounter order
    pub records: Vec<CodeGroup>,

    /// Lines skipped for having the wrong shape
    pub skipped: Vec<SkippedLine>,
}

fn parse_field<N: Num>(line: usize, field: &'static str, literal: &str) -> Result<Bits<N>, ParseError> {
    literal.parse().map_err(|source| ParseError::Field { line, field, source })
}

/// Parses one line. `line` is the 1-based line number used in errors.
pub fn parse_line(line: usize, text: &str) -> Result<Line, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Line::Blank);
    }
    if text.starts_with(COMMENT_MARKER) {
        return Ok(Line::Comment);
    }

    let mut tokens = text.split_whitespace();
    let mut fields = ArrayVec::<&str, RECORD_FIELDS>::new();
    while let Some(token) = tokens.next() {
        if fields.try_push(token).is_err() {
            let fields = RECORD_FIELDS + 1 + tokens.count();
            return Ok(Line::Malformed { fields });
        }
    }
    let [name, octet, neg_abcdei, neg_fghj, pos_abcdei, pos_fghj] = some_or!(fields.into_inner().ok(), {
        let fields = text.split_whitespace().count();
        return Ok(Line::Malformed { fields });
    });

    let octet = u8::from_str_radix(strip_hex_prefix(octet), 16)
        .map_err(|_| ParseError::Octet { line, literal: octet.to_string() })?;

    let rd_neg = parse_field::<AbcdeiWidth>(line, "RD_NEG_ABCDEI", neg_abcdei)?
        .concat(parse_field::<FghjWidth>(line, "RD_NEG_FGHJ", neg_fghj)?);
    let rd_pos = parse_field::<AbcdeiWidth>(line, "RD_POS_ABCDEI", pos_abcdei)?
        .concat(parse_field::<FghjWidth>(line, "RD_POS_FGHJ", pos_fghj)?);

    Ok(Line::Record(CodeGroup::new(name, octet, rd_neg, rd_pos)))
}

/// Parses a whole table, stopping at the first corrupt record.
pub fn parse_str(input: &str) -> Result<Parsed, ParseError> {
    let mut parsed = Parsed::default();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        match parse_line(line, text)? {
            Line::Blank | Line::Comment => {}
            Line::Malformed { fields } => {
                tracing::warn!(line, fields, "skipping line with {} fields, expected {}", fields, RECORD_FIELDS);
                parsed.skipped.push(SkippedLine { line, fields });
            }
            Line::Record(group) => {
                tracing::debug!(line, name = %group.name, octet = group.octet, "parsed code group");
                parsed.records.push(group);
            }
        }
    }

    Ok(parsed)
}
