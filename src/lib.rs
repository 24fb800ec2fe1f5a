// Two-player chess rules engine and session state machine
pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod selfplay;
pub mod session;
pub mod text;

pub use board::{Board, Kind, Piece, Side, Square};
pub use error::{ParseError, RecordError, ReplayError};
pub use rules::{Move, Status};
pub use session::{ClickOutcome, Phase, Rejection, Session};
