use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::stone::{CellState, Stone};
use crate::territory::{self, Score};
use crate::turn::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    Over,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Over => write!(f, "over"),
        }
    }
}

/// Serializable snapshot of a whole game position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<CellState>,
    pub ko: Option<Point>,
    pub last_move: Option<Point>,
    pub current_player: Stone,
    pub black_pass: bool,
    pub white_pass: bool,
    pub game_over: bool,
}

/// Everything `undo` has to put back.
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    current_player: Stone,
    black_pass: bool,
    white_pass: bool,
    game_over: bool,
}

/// A single game session: the board, whose turn it is, pass flags and undo history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Stone,
    black_pass: bool,
    white_pass: bool,
    game_over: bool,
    history: Vec<Snapshot>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Stone::Black,
            black_pass: false,
            white_pass: false,
            game_over: false,
            history: Vec::new(),
        }
    }

    /// Rebuild a game from a snapshot. History starts out empty.
    pub fn from_state(state: GameState) -> Result<Self, GoError> {
        let board = Board::from_cells(state.board, state.ko, state.last_move)?;
        Ok(Game {
            board,
            current_player: state.current_player,
            black_pass: state.black_pass,
            white_pass: state.white_pass,
            game_over: state.game_over,
            history: Vec::new(),
        })
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the grid as rows (`board_state()[y][x]`).
    pub fn board_state(&self) -> Vec<Vec<CellState>> {
        self.board.rows()
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_passed(&self, stone: Stone) -> bool {
        match stone {
            Stone::Black => self.black_pass,
            Stone::White => self.white_pass,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn stage(&self) -> Stage {
        if self.game_over {
            Stage::Over
        } else {
            match self.current_player {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.cells().to_vec(),
            ko: self.board.ko(),
            last_move: self.board.last_move(),
            current_player: self.current_player,
            black_pass: self.black_pass,
            white_pass: self.white_pass,
            game_over: self.game_over,
        }
    }

    // -- Game actions --

    /// Apply a move for the player to move. On error nothing changes.
    pub fn play(&mut self, mv: Move) -> Result<Stage, GoError> {
        if self.game_over {
            tracing::trace!(%mv, "move rejected: game over");
            return Err(GoError::GameOver);
        }

        let stone = self.current_player;
        self.history.push(self.snapshot());

        match mv {
            Move::Pass => {
                self.set_passed(stone, true);
                if self.black_pass && self.white_pass {
                    self.game_over = true;
                    tracing::debug!(%stone, "second pass, game over");
                } else {
                    tracing::debug!(%stone, "pass");
                }
            }
            Move::Play(point) => {
                if let Err(e) = self.board.try_play(point, stone) {
                    self.history.pop();
                    tracing::trace!(%mv, %stone, reason = %e, "move rejected");
                    return Err(e);
                }
                self.set_passed(stone, false);
            }
        }

        self.current_player = stone.opp();
        Ok(self.stage())
    }

    /// Negative `x` or `y` is a pass. Returns whether the move was applied.
    pub fn make_move(&mut self, x: i32, y: i32) -> bool {
        self.play(Move::from_coords(x, y)).is_ok()
    }

    pub fn pass(&mut self) -> bool {
        self.play(Move::Pass).is_ok()
    }

    /// Restore the position from before the last applied move or pass.
    pub fn try_undo(&mut self) -> Result<(), GoError> {
        let snapshot = self.history.pop().ok_or(GoError::NothingToUndo)?;
        self.board = snapshot.board;
        self.current_player = snapshot.current_player;
        self.black_pass = snapshot.black_pass;
        self.white_pass = snapshot.white_pass;
        self.game_over = snapshot.game_over;
        tracing::debug!(remaining = self.history.len(), "undo");
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    pub fn reset(&mut self) {
        *self = Game::new();
        tracing::debug!("game reset");
    }

    /// Area score of the current position.
    pub fn score(&self) -> Score {
        territory::area_score(&self.board)
    }

    /// `(black, white)` area score of the current position.
    pub fn calculate_score(&self) -> (u32, u32) {
        self.score().into()
    }

    // -- Internal helpers --

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            black_pass: self.black_pass,
            white_pass: self.white_pass,
            game_over: self.game_over,
        }
    }

    fn set_passed(&mut self, stone: Stone, passed: bool) {
        match stone {
            Stone::Black => self.black_pass = passed,
            Stone::White => self.white_pass = passed,
        }
    }
}
