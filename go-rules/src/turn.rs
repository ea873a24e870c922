use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;

/// A move request: a stone at a point, or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
}

impl Move {
    /// Negative coordinates encode a pass.
    pub fn from_coords(x: i32, y: i32) -> Self {
        if x < 0 || y < 0 {
            Move::Pass
        } else {
            Move::Play((x, y))
        }
    }

    pub fn is_pass(&self) -> bool {
        *self == Move::Pass
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            Move::Pass => None,
        }
    }
}

/// Parses `pass` or a zero-based `x,y` pair.
impl std::str::FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }

        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid move: {s}"))?;
        let x = x.trim().parse().map_err(|_| format!("invalid column: {x}"))?;
        let y = y.trim().parse().map_err(|_| format!("invalid row: {y}"))?;
        Ok(Move::from_coords(x, y))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play((x, y)) => write!(f, "{x},{y}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}
