//! Plain-text rendering of a session: board, selection, status line and
//! captured-piece trays.

use crate::board::{Piece, Side, Square};
use crate::session::Session;
use std::fmt::Write;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Unicode chess glyphs instead of letters.
    pub unicode: bool,
    /// Draw with black at the bottom.
    pub flip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self { Self { unicode: true, flip: false } }
}

fn cell(p: Option<Piece>, opts: RenderOptions) -> char {
    match p {
        Some(p) if opts.unicode => p.glyph(),
        Some(p) => p.letter(),
        None => '.',
    }
}

fn tray(pieces: &[Piece], opts: RenderOptions) -> String {
    pieces.iter().map(|&p| format!(" {}", cell(Some(p), opts))).collect()
}

pub fn status_line(session: &Session) -> String {
    let mut line = match session.winner() {
        Some(Side::White) => "White wins!".to_string(),
        Some(Side::Black) => "Black wins!".to_string(),
        None => match session.to_move() {
            Side::White => "White's turn.".to_string(),
            Side::Black => "Black's turn.".to_string(),
        },
    };
    if session.in_check() && !session.is_game_over() { line.push_str(" Check!"); }
    if session.invalid_move() { line.push_str(" Invalid Move!"); }
    line
}

pub fn render(session: &Session, opts: RenderOptions) -> String {
    let mut out = String::new();
    let order: Vec<u8> = if opts.flip { (0..8).rev().collect() } else { (0..8).collect() };
    let selected = session.selected();
    for &row in &order {
        let mut line = format!("{} ", Square::new(row, 0).rank_char());
        for &col in &order {
            let sq = Square::new(row, col);
            let c = cell(session.board().get(sq), opts);
            if selected == Some(sq) {
                let _ = write!(line, "[{c}]");
            } else {
                let _ = write!(line, " {c} ");
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    let files: String = order.iter().map(|&col| format!(" {} ", Square::new(0, col).file_char())).collect();
    let _ = writeln!(out, "  {}", files.trim_end());
    let _ = writeln!(out, "{}", status_line(session));
    let _ = writeln!(out, "white took:{}", tray(session.captured(Side::White), opts));
    let _ = writeln!(out, "black took:{}", tray(session.captured(Side::Black), opts));
    out
}
