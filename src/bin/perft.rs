use anyhow::{Context, Result};
use clap::Parser;
use hotseat::perft::{divide, perft};
use hotseat::{Board, Side};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the hotseat rules engine")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board diagram file (8 rows of 8 cells) or "startpos"
    #[arg(value_name = "POSITION", default_value = "startpos")]
    position: String,
    /// Side to move in the given position
    #[arg(long, default_value = "white", value_parser = parse_side)]
    side: Side,
    /// Print node counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => Err(format!("invalid side `{s}`: use 'w' or 'b'")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.position == "startpos" {
        Board::initial()
    } else {
        let text = std::fs::read_to_string(&args.position)
            .with_context(|| format!("reading {}", args.position))?;
        Board::from_diagram(&text).with_context(|| format!("parsing {}", args.position))?
    };

    let t0 = Instant::now();
    let nodes = if args.divide {
        let parts = divide(&board, args.side, args.depth);
        for (m, n) in &parts { println!("{m}: {n}"); }
        parts.iter().map(|&(_, n)| n).sum()
    } else {
        perft(&board, args.side, args.depth)
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
