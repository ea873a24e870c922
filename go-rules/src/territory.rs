use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, Point};
use crate::board::{Board, CELLS};
use crate::stone::{CellState, Stone};

const BLACK_SEEN: u8 = 1;
const WHITE_SEEN: u8 = 2;

impl Board {
    /// Owner of the empty region containing `(x, y)`.
    ///
    /// A region bordered by stones of a single color belongs to that color.
    /// Regions touching both colors, or none, are neutral and yield `Empty`,
    /// as does any point that is occupied or off the board.
    pub fn get_territory_owner(&self, x: i32, y: i32) -> CellState {
        if self.get(x, y) != Some(CellState::Empty) {
            return CellState::Empty;
        }
        let mut visited = [false; CELLS];
        let (_, owner) = empty_region(self, (x, y), &mut visited);
        owner
    }
}

/// Flood-fill the empty region around `seed`, collecting the colors that border it
/// anywhere along the region.
fn empty_region(board: &Board, seed: Point, visited: &mut [bool]) -> (Vec<Point>, CellState) {
    let mut region = Vec::new();
    let mut border_colors: u8 = 0;
    let mut stack = vec![seed];

    while let Some(p) = stack.pop() {
        let pi = board.idx(p);
        if visited[pi] {
            continue;
        }
        visited[pi] = true;
        region.push(p);

        for n in board.neighbors(p) {
            match board.stone_at(n) {
                Some(Stone::Black) => border_colors |= BLACK_SEEN,
                Some(Stone::White) => border_colors |= WHITE_SEEN,
                None if !visited[board.idx(n)] => stack.push(n),
                None => {}
            }
        }
    }

    let owner = match border_colors {
        BLACK_SEEN => CellState::Black,
        WHITE_SEEN => CellState::White,
        _ => CellState::Empty,
    };

    (region, owner)
}

/// Territory owner of every intersection, row-major.
///
/// Occupied points map to `Empty`. Each empty region is filled once, so this is
/// the cheap way to query the whole board; it agrees with
/// [`Board::get_territory_owner`] on every empty point.
pub fn ownership_map(board: &Board) -> Vec<CellState> {
    let size = BOARD_SIZE as usize;
    let mut ownership = vec![CellState::Empty; CELLS];
    let mut visited = [false; CELLS];

    for (i, cell) in board.cells().iter().enumerate() {
        if visited[i] || !cell.is_empty() {
            continue;
        }
        let seed = ((i % size) as i32, (i / size) as i32);
        let (region, owner) = empty_region(board, seed, &mut visited);
        for p in region {
            ownership[board.idx(p)] = owner;
        }
    }

    ownership
}

/// Area score: stones on the board plus surrounded empty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone) {
        match stone {
            Stone::Black => self.black += 1,
            Stone::White => self.white += 1,
        }
    }

    /// The leading color, or `None` on a tie.
    pub fn winner(&self) -> Option<Stone> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<Score> for (u32, u32) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(stone) => write!(f, "{stone} wins!")?,
            None => write!(f, "Tie!")?,
        }
        write!(f, " | Black: {} - White: {}", self.black, self.white)
    }
}

/// Count stones and territory for both colors.
pub fn area_score(board: &Board) -> Score {
    let mut score = Score::default();
    for (cell, owner) in board.cells().iter().zip(ownership_map(board)) {
        let counted = if cell.is_empty() { owner } else { *cell };
        if let Some(stone) = counted.stone() {
            score.add(stone);
        }
    }
    score
}
