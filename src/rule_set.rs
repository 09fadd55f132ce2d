use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::parse_util;
use crate::parse_util::ParseError;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// HighLife, which has a small replicator.
pub const B36S23: RuleSet = RuleSet::new(0b100_1000, 0b1100);

/// Seeds: no cell survives more than a single generation.
pub const B2S: RuleSet = RuleSet::new(0b100, 0);

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: u8 = 8;

const COUNT_MASK: u16 = 0x1FF;

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// B3/S23:               0000_0000_0000_1000_0000_0000_0000_1100
///
/// B/S:                  0000_0000_0000_0000_0000_0000_0000_0000
/// B012345678/S012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// Only the low 9 bits of each half are ever set, so no neighbor count outside `0..=8` is
/// representable.
///
/// # Format
///
/// `B[0-8]*/?S[0-8]*`, case-sensitive. Digits may come in any order but not twice; the
/// [`Display`](fmt::Display) form always lists them ascending with the `/` separator.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    ///
    /// Big endian is used here (i.e. `b = 0b1` means B0, and `b = 0b1_0000_0000` means B8).
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & COUNT_MASK;
        let s = s & COUNT_MASK;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule >> 0x10) as u16) & COUNT_MASK
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule as u16) & COUNT_MASK
    }

    /// Whether a dead cell with `count` alive neighbors is born.
    pub const fn birth(&self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.births() & (1 << count) != 0
    }

    /// Whether an alive cell with `count` alive neighbors survives.
    pub const fn survives(&self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.survivals() & (1 << count) != 0
    }

    /// State of a cell in the next generation.
    pub const fn next_state(&self, alive: bool, count: u8) -> bool {
        if alive {
            self.survives(count)
        } else {
            self.birth(count)
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn digits(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
            for n in 0..=MAX_NEIGHBORS {
                if mask & (1 << n) != 0 {
                    write!(f, "{n}")?;
                }
            }

            Ok(())
        }

        f.write_str("B")?;
        digits(f, self.births())?;
        f.write_str("/S")?;
        digits(f, self.survivals())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Missing birth marker: {0}")]
    MissingBirth(#[source] ParseError),

    #[error("Missing survival marker: {0}")]
    MissingSurvival(#[source] ParseError),

    #[error("Invalid neighbor count '{got}', expected a digit in 0-8")]
    InvalidDigit { got: char },

    #[error("Neighbor count {digit} is listed more than once")]
    DuplicateDigit { digit: u8 },

    #[error("Unexpected input \"{rest}\" after the survival counts")]
    TrailingInput { rest: String },

    #[error("Rule strings are ASCII, found '{got}'")]
    NonAscii { got: char },
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(got) = s.chars().find(|c| !c.is_ascii()) {
            warn!(rule = s, "Rejected non-ASCII rule string");
            return Err(RuleError::NonAscii { got });
        }

        // From here on every byte is a whole character.
        parse_rule(s.as_bytes()).inspect_err(|e| warn!(rule = s, "Rejected rule string: {e}"))
    }
}

// Parse rules that look like B3/S23 or B3S23
fn parse_rule(bytes: &[u8]) -> Result<RuleSet, RuleError> {
    let bytes = parse_util::expect(b'B', bytes).map_err(RuleError::MissingBirth)?;
    let (b, bytes) = read_counts(bytes)?;

    let bytes = match parse_util::peek_1(bytes) {
        Some(b'/' | b'S') | None => parse_util::skip(b'/', bytes),
        Some(got) => return Err(RuleError::InvalidDigit { got: got as char }),
    };

    let bytes = parse_util::expect(b'S', bytes).map_err(RuleError::MissingSurvival)?;
    let (s, bytes) = read_counts(bytes)?;

    if !bytes.is_empty() {
        return Err(RuleError::TrailingInput {
            rest: String::from_utf8_lossy(bytes).into_owned(),
        });
    }

    Ok(RuleSet::new(b, s))
}

/// Convert a run of human readable neighbor counts to a packed bit representation
fn read_counts(bytes: &[u8]) -> Result<(u16, &[u8]), RuleError> {
    let (Some(digits), bytes) = parse_util::take_until_fn(|b| !b.is_ascii_digit(), bytes) else {
        return Ok((0, bytes));
    };

    let mut n = 0u16;

    for &d in digits {
        let digit = d - b'0';

        if digit > MAX_NEIGHBORS {
            return Err(RuleError::InvalidDigit { got: d as char });
        }

        if n & (1 << digit) != 0 {
            return Err(RuleError::DuplicateDigit { digit });
        }

        n |= 1 << digit;
    }

    Ok((n, bytes))
}
