//! Code-group records.

use std::fmt;

use crate::*;

/// Classification of a code group by its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// `Dx.y` data code group.
    Data,

    /// `Kx.y` control code group.
    Control,

    /// Any other prefix; parsed but never stored.
    Other,
}

impl CodeKind {
    /// Classifies a code-group name.
    pub fn from_name(name: &str) -> Self {
        if name.starts_with('D') {
            Self::Data
        } else if name.starts_with('K') {
            Self::Control
        } else {
            Self::Other
        }
    }
}

/// Running disparity in effect before a code group is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disparity {
    /// RD-
    Negative,

    /// RD+
    Positive,
}

impl Disparity {
    /// Both disparities, negative first.
    pub const ALL: [Disparity; 2] = [Disparity::Negative, Disparity::Positive];

    /// Suffix used in artifact names.
    pub fn suffix(self) -> &'static str {
        match self {
            Disparity::Negative => "rd_neg",
            Disparity::Positive => "rd_pos",
        }
    }
}

impl fmt::Display for Disparity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disparity::Negative => write!(f, "RD-"),
            Disparity::Positive => write!(f, "RD+"),
        }
    }
}

/// One parsed line of the code-group table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGroup {
    /// Name, e.g. `D12.3` or `K28.5`
    pub name: String,

    /// Classification derived from the name
    pub kind: CodeKind,

    /// Unencoded octet
    pub octet: u8,

    /// Code group transmitted when the running disparity is negative
    pub rd_neg: Bits<CodeWidth>,

    /// Code group transmitted when the running disparity is positive
    pub rd_pos: Bits<CodeWidth>,
}

impl CodeGroup {
    /// Creates a record, classifying it by name.
    pub fn new(name: impl Into<String>, octet: u8, rd_neg: Bits<CodeWidth>, rd_pos: Bits<CodeWidth>) -> Self {
        let name = name.into();
        let kind = CodeKind::from_name(&name);
        Self { name, kind, octet, rd_neg, rd_pos }
    }

    /// Returns the code group for the given running disparity.
    pub fn code(&self, disparity: Disparity) -> Bits<CodeWidth> {
        match disparity {
            Disparity::Negative => self.rd_neg,
            Disparity::Positive => self.rd_pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(CodeKind::from_name("D12.3"), CodeKind::Data);
        assert_eq!(CodeKind::from_name("K28.5"), CodeKind::Control);
        assert_eq!(CodeKind::from_name("X1.0"), CodeKind::Other);
        assert_eq!(CodeKind::from_name("d1.0"), CodeKind::Other);
    }

    #[test]
    fn selects_code_by_disparity() {
        let group = CodeGroup::new("K28.5", 0xBC, "0011111010".parse().unwrap(), "1100000101".parse().unwrap());
        assert_eq!(group.kind, CodeKind::Control);
        assert_eq!(group.code(Disparity::Negative).to_string(), "0011111010");
        assert_eq!(group.code(Disparity::Positive).to_string(), "1100000101");
    }
}
