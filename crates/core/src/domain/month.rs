use crate::domain::transaction::Transaction;
use std::fmt;

/// Calendar month, 1 = January. The year is never part of a month match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Used by the statistics endpoints, where a month is mandatory.
    pub fn parse_required(raw: Option<&str>) -> Result<Self, InvalidMonth> {
        let Some(raw) = raw else {
            return Err(InvalidMonth { raw: None });
        };
        parse_number(raw)
            .and_then(Self::new)
            .ok_or_else(|| InvalidMonth {
                raw: Some(raw.to_string()),
            })
    }

    /// Used by the listing endpoint: anything unusable means "no month filter".
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        raw.and_then(parse_number).and_then(Self::new)
    }

    pub fn matches(self, tx: &Transaction) -> bool {
        tx.month() == self.0
    }
}

// Plain decimal digits, optionally followed by a zero fraction ("3", " 03 ", "3.0").
// Exponent, signed, and fractional forms are rejected.
fn parse_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(f) = frac_part {
        if f.is_empty() || !f.bytes().all(|b| b == b'0') {
            return None;
        }
    }
    int_part.parse::<u32>().ok()
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMonth {
    pub raw: Option<String>,
}

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "month must be an integer between 1 and 12 (got {raw:?})"),
            None => write!(f, "month is required"),
        }
    }
}

impl std::error::Error for InvalidMonth {}
