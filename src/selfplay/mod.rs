use crate::error::{RecordError, ReplayError};
use crate::rules::{legal_moves, Move};
use crate::session::{ClickOutcome, Session};
use crate::board::Side;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self { Self { games: 10, max_plies: 200, seed: 42 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// Ply cap reached, or the side to move had no legal move without being in check.
    Unfinished,
}

impl GameResult {
    fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::White) => GameResult::WhiteWins,
            Some(Side::Black) => GameResult::BlackWins,
            None => GameResult::Unfinished,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: GameResult,
    pub plies: usize,
}

/// Plays `params.games` uniformly random games. Same seed, same games.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let mut session = Session::new();
        let mut moves = Vec::new();
        while !session.is_game_over() && session.ply() < params.max_plies {
            let Some(m) = select_random_move(&session, &mut rng) else { break };
            match session.try_move(m) {
                ClickOutcome::Moved(_) => moves.push(m.to_string()),
                other => {
                    debug!("game {gi}: generated move {m} was not accepted: {other:?}");
                    break;
                }
            }
        }
        let record = GameRecord { plies: moves.len(), moves, result: GameResult::from_winner(session.winner()) };
        debug!("game {gi}: {} plies, {:?}", record.plies, record.result);
        games.push(record);
    }
    info!("generated {} games (seed {})", games.len(), params.seed);
    games
}

fn select_random_move(session: &Session, rng: &mut SmallRng) -> Option<Move> {
    let moves = legal_moves(session.board(), session.to_move());
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Replays a record from the start position and returns the final session.
pub fn replay(record: &GameRecord) -> Result<Session, ReplayError> {
    let mut session = Session::new();
    for (ply, raw) in record.moves.iter().enumerate() {
        let mv: Move = raw.parse()?;
        match session.try_move(mv) {
            ClickOutcome::Moved(_) => {}
            ClickOutcome::Ignored if session.is_game_over() => return Err(ReplayError::AfterGameOver { ply }),
            _ => return Err(ReplayError::Illegal { ply, mv: raw.clone() }),
        }
    }
    Ok(session)
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<(), RecordError> {
    let mut w = BufWriter::new(File::create(path)?);
    for (i, g) in games.iter().enumerate() {
        let line = serde_json::to_string(g).map_err(|source| RecordError::Json { line: i + 1, source })?;
        writeln!(w, "{line}")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>, RecordError> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let rec = serde_json::from_str(&line).map_err(|source| RecordError::Json { line: i + 1, source })?;
        out.push(rec);
    }
    Ok(out)
}
