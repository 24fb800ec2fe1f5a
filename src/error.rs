use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square `{0}`: expected a1..h8 or row,col in 0..7")]
    Square(String),
    #[error("invalid move `{0}`: expected from/to squares like e2e4")]
    Move(String),
    #[error("diagram row {row}: {reason}")]
    Diagram { row: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("ply {ply}: move {mv} is not legal here")]
    Illegal { ply: usize, mv: String },
    #[error("ply {ply}: game was already over")]
    AfterGameOver { ply: usize },
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Json { line: usize, source: serde_json::Error },
}
