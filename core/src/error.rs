use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Board is not a permutation of tiles 1-15 plus one empty slot")]
    InvalidBoard,
    #[error("Recorded empty slot position does not match the board")]
    EmptyIndexMismatch,
    #[error("Puzzle already completed, no new slides are accepted")]
    AlreadyCompleted,
}

pub type Result<T> = core::result::Result<T, GameError>;
