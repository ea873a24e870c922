use std::fmt;

/// Why an operation was rejected. A rejected operation leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    NotOnBoard,
    Overwrite,
    KoViolation,
    Suicide,
    GameOver,
    NothingToUndo,
    MalformedBoard,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::Overwrite => write!(f, "overwrite"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::GameOver => write!(f, "game over"),
            GoError::NothingToUndo => write!(f, "nothing to undo"),
            GoError::MalformedBoard => write!(f, "malformed board"),
        }
    }
}

impl std::error::Error for GoError {}
