use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::GoError;
use crate::stone::{CellState, Stone};
use crate::{BOARD_SIZE, Point};

pub(crate) const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// The 19x19 board stored as a flat array.
///
/// Cloning is a bulk copy of the grid, so trial boards and history
/// snapshots never share state with the live board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [CellState; CELLS],
    ko: Option<Point>,
    last_move: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            grid: [CellState::Empty; CELLS],
            ko: None,
            last_move: None,
        }
    }

    /// Restore a board from a flat row-major grid.
    pub fn from_cells(
        cells: Vec<CellState>,
        ko: Option<Point>,
        last_move: Option<Point>,
    ) -> Result<Self, GoError> {
        let grid: [CellState; CELLS] = cells.try_into().map_err(|_| GoError::MalformedBoard)?;
        let board = Board {
            grid,
            ko,
            last_move,
        };

        let on_board = |p: Option<Point>| p.is_none_or(|p| board.on_board(p));
        if !on_board(ko) || !on_board(last_move) {
            return Err(GoError::MalformedBoard);
        }

        Ok(board)
    }

    // -- Accessors --

    /// The cell at `(x, y)`, or `None` when the coordinate is off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        if self.on_board((x, y)) {
            Some(self.grid[self.idx((x, y))])
        } else {
            None
        }
    }

    /// Write a cell without any rule checks. Off-board writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if self.on_board((x, y)) {
            let i = self.idx((x, y));
            self.grid[i] = state;
        }
    }

    pub fn stone_at(&self, (x, y): Point) -> Option<Stone> {
        self.get(x, y).and_then(CellState::stone)
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.grid
    }

    /// Copy of the grid as rows (`rows()[y][x]`).
    pub fn rows(&self) -> Vec<Vec<CellState>> {
        self.grid
            .chunks(BOARD_SIZE as usize)
            .map(<[CellState]>::to_vec)
            .collect()
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(|c| c.is_empty())
    }

    // -- Rules --

    /// Check whether `stone` may be played at `(x, y)` without touching this board.
    pub fn check_move(&self, x: i32, y: i32, stone: Stone) -> Result<(), GoError> {
        let point = (x, y);
        match self.get(x, y) {
            None => return Err(GoError::NotOnBoard),
            Some(cell) if !cell.is_empty() => return Err(GoError::Overwrite),
            Some(_) => {}
        }

        if self.ko == Some(point) {
            return Err(GoError::KoViolation);
        }

        let mut scratch = self.clone();
        scratch.set(x, y, stone.into());
        let captured = scratch.capture_groups(point, stone.opp());

        // A capture always opens a liberty, so suicide is only possible without one.
        if captured.is_empty() && !scratch.has_liberties(point) {
            return Err(GoError::Suicide);
        }

        Ok(())
    }

    pub fn is_valid_move(&self, x: i32, y: i32, stone: Stone) -> bool {
        self.check_move(x, y, stone).is_ok()
    }

    /// Play a stone and resolve captures. Returns the captured points.
    pub fn try_play(&mut self, (x, y): Point, stone: Stone) -> Result<Vec<Point>, GoError> {
        self.check_move(x, y, stone)?;

        self.set(x, y, stone.into());
        self.last_move = Some((x, y));

        let captured = self.capture_groups((x, y), stone.opp());
        self.ko = match captured.as_slice() {
            [group] if group.len() == 1 => Some(group[0]),
            _ => None,
        };

        let dead: Vec<Point> = captured.into_iter().flatten().collect();
        tracing::debug!(
            x,
            y,
            %stone,
            captured = dead.len(),
            ko = ?self.ko,
            "stone placed"
        );

        Ok(dead)
    }

    pub fn make_move(&mut self, x: i32, y: i32, stone: Stone) -> bool {
        self.try_play((x, y), stone).is_ok()
    }

    /// Every legal point for `stone`, in row-major order.
    pub fn get_valid_moves(&self, stone: Stone) -> Vec<Point> {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_valid_move(x, y, stone))
            .collect()
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < BOARD_SIZE {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < BOARD_SIZE {
            result.push((x, y + 1));
        }
        result
    }

    /// Flood-fill the group of same-colored stones containing `point`.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let mut visited = [false; CELLS];
        self.chain_from(point, &mut visited)
    }

    /// Whether the group containing `point` touches at least one empty point.
    pub fn has_liberties(&self, point: Point) -> bool {
        let Some(stone) = self.stone_at(point) else {
            return false;
        };

        let mut visited = [false; CELLS];
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            for n in self.neighbors(p) {
                match self.stone_at(n) {
                    None => return true,
                    Some(s) if s == stone && !visited[self.idx(n)] => stack.push(n),
                    Some(_) => {}
                }
            }
        }

        false
    }

    /// Distinct empty points adjacent to the group containing `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let mut seen = [false; CELLS];
        let mut libs = Vec::new();
        for p in self.chain(point) {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.grid[ni].is_empty() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Remove every `color` group next to `point` that has no liberties left.
    fn capture_groups(&mut self, point: Point, color: Stone) -> Vec<Vec<Point>> {
        let mut visited = [false; CELLS];
        let mut captured = Vec::new();

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(color) || visited[self.idx(n)] {
                continue;
            }
            let group = self.chain_from(n, &mut visited);
            if !self.has_liberties(n) {
                for &(x, y) in &group {
                    self.set(x, y, CellState::Empty);
                }
                captured.push(group);
            }
        }

        captured
    }

    /// Chain flood-fill using a shared visited set.
    fn chain_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Internal helpers --

    /// Flat index of an on-board point.
    #[inline]
    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        y as usize * BOARD_SIZE as usize + x as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.chunks(BOARD_SIZE as usize) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses a diagram of `X`/`B` (black), `O`/`W` (white) and `.`/`+` (empty).
///
/// Whitespace inside a row is ignored. Missing rows and columns are empty,
/// so small diagrams describe the top-left corner.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() > BOARD_SIZE as usize {
            return Err(format!("too many rows: {}", lines.len()));
        }

        for (y, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() > BOARD_SIZE as usize {
                return Err(format!("row {y} has {} columns", cells.len()));
            }
            for (x, &c) in cells.iter().enumerate() {
                let cell =
                    CellState::from_symbol(c).ok_or_else(|| format!("unknown cell: {c:?}"))?;
                board.set(x as i32, y as i32, cell);
            }
        }

        Ok(board)
    }
}
