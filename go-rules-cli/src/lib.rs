use std::fmt;

use go_rules::{Game, GoError, Move};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub json: bool,
    pub moves: Vec<Move>,
}

#[derive(Debug)]
pub enum CliError {
    BadArgument(String),
    Rejected {
        index: usize,
        mv: Move,
        reason: GoError,
    },
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::BadArgument(msg) => write!(f, "Bad argument: {msg}"),
            CliError::Rejected { index, mv, reason } => {
                write!(f, "Move {} ({mv}) rejected: {reason}", index + 1)
            }
            CliError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// Parse `[--json] MOVE...` where each move is `x,y` or `pass`.
pub fn parse_args<I>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    for arg in args {
        if arg == "--json" {
            options.json = true;
            continue;
        }
        let mv = arg.parse().map_err(CliError::BadArgument)?;
        options.moves.push(mv);
    }
    Ok(options)
}

/// Play every move in order on a fresh game, stopping at the first rejection.
pub fn replay(moves: &[Move]) -> Result<Game, CliError> {
    let mut game = Game::new();
    for (index, &mv) in moves.iter().enumerate() {
        game.play(mv).map_err(|reason| CliError::Rejected { index, mv, reason })?;
    }
    tracing::info!(moves = moves.len(), stage = %game.stage(), "replay finished");
    Ok(game)
}

/// Text diagram plus status line, or the JSON snapshot.
pub fn report(game: &Game, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(&game.state())?);
    }

    let status = if game.is_game_over() {
        game.score().to_string()
    } else {
        let (black, white) = game.calculate_score();
        format!(
            "{} to play | Black: {black} - White: {white}",
            game.current_player()
        )
    };
    Ok(format!("{}\n{status}", game.board()))
}
