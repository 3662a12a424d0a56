//! Binary numerals and validation of input lines.
//!
//! Line is accepted if it consists only of `0`, `1` and whitespace, and digits are grouped the
//! way people usually group long numbers: whitespace separated groups after the first one all
//! have the same width, and the first group is not wider than them (it can be shorter, as in
//! `1 0110 1001`). Any whitespace around is fine. Whitespace is stripped on acceptance.

use std::fmt;

/// Non empty string of binary digits, most significant first.
///
/// Digits are kept as ASCII bytes - `b'0'` and `b'1'` only.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Numeral(Vec<u8>);

impl Numeral {
    pub fn zero() -> Self {
        Self(vec![b'0'])
    }

    /// Caller guarantees `digits` is not empty and contains ASCII binary digits only
    pub(super) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|d| matches!(d, b'0' | b'1')));
        Self(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn is_minimal(&self) -> bool {
        self.0.len() == 1 || self.0[0] == b'1'
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

/// Validated line
#[derive(PartialEq, Eq, Debug)]
pub enum Line {
    /// Nothing but whitespace - to be skipped
    Blank,
    Numeral(Numeral),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Malformed {
    /// Byte which is neither binary digit nor whitespace (position is 0-based)
    Character { position: usize, byte: u8 },
    /// Digit group (1-based) breaks the grouping rule
    Grouping { group: usize },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Malformed::Character { position, byte } if byte.is_ascii_graphic() => write!(
                f,
                "unexpected character '{}' at column {}",
                *byte as char,
                position + 1
            ),
            Malformed::Character { position, byte } => write!(
                f,
                "unexpected byte 0x{:02x} at column {}",
                byte,
                position + 1
            ),
            Malformed::Grouping { group } => {
                write!(f, "digit group {} does not match grouping", group)
            }
        }
    }
}

/// Whitespace as in C locale `isspace`, vertical tab included
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Tracks widths of digit groups seen so far
#[derive(Default)]
struct Grouping {
    first: Option<usize>,
    width: Option<usize>,
    groups: usize,
}

impl Grouping {
    /// Closes group of given width, `false` if it breaks the rule
    fn close(&mut self, width: usize) -> bool {
        self.groups += 1;
        match (self.first, self.width) {
            (None, _) => {
                self.first = Some(width);
                true
            }
            (Some(first), None) => {
                self.width = Some(width);
                first <= width
            }
            (Some(_), Some(w)) => w == width,
        }
    }
}

pub fn parse(line: &[u8]) -> Result<Line, Malformed> {
    let mut digits = Vec::with_capacity(line.len());
    let mut grouping = Grouping::default();
    let mut current = 0;

    // Trailing `None` closes the last group
    let bytes = line.iter().copied().map(Some).chain(std::iter::once(None));
    for (position, byte) in bytes.enumerate() {
        match byte {
            Some(digit @ b'0') | Some(digit @ b'1') => {
                digits.push(digit);
                current += 1;
            }
            Some(byte) if !is_space(byte) => {
                return Err(Malformed::Character { position, byte });
            }
            _ => {
                if current > 0 && !grouping.close(current) {
                    return Err(Malformed::Grouping {
                        group: grouping.groups,
                    });
                }
                current = 0;
            }
        }
    }

    if digits.is_empty() {
        Ok(Line::Blank)
    } else {
        Ok(Line::Numeral(Numeral::from_digits(digits)))
    }
}
