//! Named board positions for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a position from an index (0-8) or a label.
    ///
    /// Labels match case-insensitively, with spaces or underscores standing in
    /// for the hyphen. An unambiguous prefix is also accepted ("bottom-r").
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        if wanted.is_empty() {
            return None;
        }

        let labels = || {
            <Position as strum::IntoEnumIterator>::iter().map(|pos| (pos, pos.label().to_lowercase()))
        };

        if let Some((pos, _)) = labels().find(|(_, label)| *label == wanted) {
            return Some(pos);
        }

        let mut prefixed = labels().filter(|(_, label)| label.starts_with(&wanted));
        match (prefixed.next(), prefixed.next()) {
            (Some((pos, _)), None) => Some(pos),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" 0 "), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("Top Right"),
            Some(Position::TopRight)
        );
        assert_eq!(
            Position::from_label_or_number("bottom_center"),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(
            Position::from_label_or_number("bottom-r"),
            Some(Position::BottomRight)
        );
        // Ambiguous prefix
        assert_eq!(Position::from_label_or_number("top"), None);
        assert_eq!(Position::from_label_or_number(""), None);
        assert_eq!(Position::from_label_or_number("nowhere"), None);
    }
}
