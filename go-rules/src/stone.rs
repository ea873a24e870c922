use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A player's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Stone {
    Black = 1,
    White = 2,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// Contents of a single intersection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl CellState {
    pub fn stone(self) -> Option<Stone> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Stone::Black),
            CellState::White => Some(Stone::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Diagram character: `X` black, `O` white, `.` empty.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '+' => Some(CellState::Empty),
            'X' | 'B' => Some(CellState::Black),
            'O' | 'W' => Some(CellState::White),
            _ => None,
        }
    }
}

impl From<Stone> for CellState {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => CellState::Black,
            Stone::White => CellState::White,
        }
    }
}

impl From<Option<Stone>> for CellState {
    fn from(stone: Option<Stone>) -> Self {
        stone.map_or(CellState::Empty, CellState::from)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stone() {
            Some(stone) => stone.fmt(f),
            None => write!(f, "Empty"),
        }
    }
}
