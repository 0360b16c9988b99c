//! Route direction markers parsed from headsigns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a character is not a recognised direction marker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction marker: {0:?}")]
pub struct InvalidDirection(char);

/// A direction suffix attached to a route number on a headsign.
///
/// The transit agency writes these as a single letter directly after the
/// route number: `22N Illini` runs northbound, `2U Red` is the U variant
/// of route 2. Valid markers are `N`, `S`, `E`, `W`, `U` and `C`.
///
/// # Examples
///
/// ```
/// use transit_board::domain::Direction;
///
/// let north = Direction::try_from('N').unwrap();
/// assert_eq!(north.as_char(), 'N');
/// assert!(Direction::try_from('X').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Direction(u8);

impl Direction {
    const MARKERS: &'static [u8] = b"NSEWUC";

    /// Returns the marker letter.
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Direction {
    type Error = InvalidDirection;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() && Self::MARKERS.contains(&(c as u8)) {
            Ok(Direction(c as u8))
        } else {
            Err(InvalidDirection(c))
        }
    }
}

impl From<Direction> for char {
    fn from(d: Direction) -> Self {
        d.as_char()
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({})", self.as_char())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Extract the direction marker from a headsign.
///
/// Scans left to right and accepts the first character that is a direction
/// marker, is immediately preceded by an ASCII digit, and is followed by
/// either a space or the end of the string. The scan has no notion of word
/// boundaries before the digit, so `"Lot A12E Shuttle"` yields `E`.
pub fn extract_direction(headsign: &str) -> Option<Direction> {
    let chars: Vec<char> = headsign.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        let Ok(direction) = Direction::try_from(c) else {
            continue;
        };

        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let at_boundary = chars.get(i + 1).is_none_or(|&next| next == ' ');

        if after_digit && at_boundary {
            return Some(direction);
        }
    }

    None
}
