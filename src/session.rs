//! Click-driven game session: owns the one authoritative board and walks the
//! select / move / game-over state machine on behalf of a front end.

use crate::board::{Board, Piece, Side, Square};
use crate::rules::{has_legal_move, in_check, leaves_king_in_check, valid_move, Move, Status};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected(Square),
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The piece cannot move that way (or it is not the mover's piece).
    IllegalMove,
    /// The move is fine for the piece but exposes the mover's king.
    LeavesKingInCheck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Status of the side that is now to move.
    pub status: Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected(Square),
    Rejected(Rejection),
    Moved(MoveReport),
}

#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    to_move: Side,
    phase: Phase,
    captured: [Vec<Piece>; 2],
    check: bool,
    invalid_move: bool,
    ply: usize,
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}

impl Session {
    pub fn new() -> Self { Self::from_board(Board::initial(), Side::White) }

    /// Starts from an arbitrary position. Check and mate are evaluated
    /// immediately for `to_move`.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let mut s = Self {
            board,
            to_move,
            phase: Phase::AwaitingSelection,
            captured: [Vec::new(), Vec::new()],
            check: false,
            invalid_move: false,
            ply: 0,
        };
        s.refresh_status();
        s
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn to_move(&self) -> Side { self.to_move }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn in_check(&self) -> bool { self.check }
    pub fn invalid_move(&self) -> bool { self.invalid_move }
    pub fn is_game_over(&self) -> bool { self.phase == Phase::GameOver }
    pub fn ply(&self) -> usize { self.ply }

    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::PieceSelected(sq) => Some(sq),
            _ => None,
        }
    }

    /// Pieces taken by `side`, oldest first.
    pub fn captured(&self, side: Side) -> &[Piece] { &self.captured[side.index()] }

    /// The side that delivered mate.
    pub fn winner(&self) -> Option<Side> {
        self.is_game_over().then(|| self.to_move.other())
    }

    pub fn status(&self) -> Status {
        match (self.is_game_over(), self.check) {
            (true, _) => Status::Checkmate,
            (false, true) => Status::Check,
            (false, false) => Status::Ongoing,
        }
    }

    /// Feeds one square click into the state machine.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.phase {
            Phase::GameOver => ClickOutcome::Ignored,
            Phase::AwaitingSelection => self.select(sq),
            Phase::PieceSelected(src) => {
                self.phase = Phase::AwaitingSelection;
                self.attempt(Move::new(src, sq))
            }
        }
    }

    /// Selects `mv.from` and clicks `mv.to`, dropping any pending selection.
    /// A source that cannot be selected counts as an illegal attempt.
    pub fn try_move(&mut self, mv: Move) -> ClickOutcome {
        if self.is_game_over() { return ClickOutcome::Ignored; }
        self.phase = Phase::AwaitingSelection;
        match self.select(mv.from) {
            ClickOutcome::Selected(_) => self.click(mv.to),
            _ => self.reject(mv, Rejection::IllegalMove),
        }
    }

    fn select(&mut self, sq: Square) -> ClickOutcome {
        match self.board.get(sq) {
            Some(p) if p.side == self.to_move => {
                debug!("{} selects {} on {}", self.to_move, p, sq);
                self.phase = Phase::PieceSelected(sq);
                self.invalid_move = false;
                ClickOutcome::Selected(sq)
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn attempt(&mut self, mv: Move) -> ClickOutcome {
        let side = self.to_move;
        if !valid_move(&self.board, mv, side) {
            return self.reject(mv, Rejection::IllegalMove);
        }
        if leaves_king_in_check(&self.board, mv, side) {
            return self.reject(mv, Rejection::LeavesKingInCheck);
        }
        // valid_move guarantees an own piece on the source
        let piece = match self.board.get(mv.from) {
            Some(p) => p,
            None => return self.reject(mv, Rejection::IllegalMove),
        };
        let captured = self.board.apply(mv.from, mv.to);
        if let Some(c) = captured {
            self.captured[side.index()].push(c);
        }
        self.to_move = side.other();
        self.invalid_move = false;
        self.ply += 1;
        self.refresh_status();
        let status = self.status();
        match status {
            Status::Checkmate => info!("{side} plays {mv}: checkmate, {side} wins"),
            Status::Check => info!("{side} plays {mv}: {} is in check", self.to_move),
            Status::Ongoing => debug!("{side} plays {mv}"),
        }
        ClickOutcome::Moved(MoveReport { mv, piece, captured, status })
    }

    fn reject(&mut self, mv: Move, why: Rejection) -> ClickOutcome {
        debug!("{} attempt {} rejected: {:?}", self.to_move, mv, why);
        self.invalid_move = true;
        ClickOutcome::Rejected(why)
    }

    fn refresh_status(&mut self) {
        self.check = in_check(&self.board, self.to_move);
        if self.check && !has_legal_move(&self.board, self.to_move) {
            self.phase = Phase::GameOver;
        }
    }
}
