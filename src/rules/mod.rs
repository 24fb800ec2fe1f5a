//! Move legality: path checks, per-piece rules, check and mate detection.

pub mod check;
pub mod legality;
pub mod moves;
pub mod path;

pub use check::{has_legal_move, in_check, is_checkmate, leaves_king_in_check, legal_moves, Status};
pub use legality::valid_move;
pub use moves::Move;
pub use path::clear_path;
