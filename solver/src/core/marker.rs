//! Cell markers that make up a maze grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The symbolic content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Start,
    End,
    Wall,
    Space,
    /// Any character without special meaning, carried through unchanged.
    Other(char),
}

impl Marker {
    /// Map a maze file character to its marker.
    pub fn from_char(c: char) -> Self {
        match c {
            'S' => Self::Start,
            'F' => Self::End,
            '#' => Self::Wall,
            ' ' => Self::Space,
            other => Self::Other(other),
        }
    }

    /// The character this marker renders as.
    pub fn as_char(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'F',
            Self::Wall => '#',
            Self::Space => ' ',
            Self::Other(c) => c,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_characters_map_to_markers() {
        assert_eq!(Marker::from_char('S'), Marker::Start);
        assert_eq!(Marker::from_char('F'), Marker::End);
        assert_eq!(Marker::from_char('#'), Marker::Wall);
        assert_eq!(Marker::from_char(' '), Marker::Space);
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(Marker::from_char('X'), Marker::Other('X'));
        assert_eq!(Marker::Other('X').as_char(), 'X');
    }
}
