use anyhow::{bail, Context, Result};
use clap::Parser;
use hotseat::text::{render, RenderOptions};
use hotseat::{ClickOutcome, Move, Session, Square};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two players, one terminal: click squares by typing them", long_about = None)]
struct Args {
    /// Letters instead of Unicode chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Draw the board from black's side
    #[arg(long)]
    flip: bool,

    /// Comma separated moves to play before handing over, e.g. e2e4,e7e5
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,
}

fn describe(outcome: ClickOutcome) -> Option<String> {
    match outcome {
        ClickOutcome::Ignored => None,
        ClickOutcome::Selected(sq) => Some(format!("selected {sq}")),
        ClickOutcome::Rejected(why) => Some(format!("rejected: {why:?}")),
        ClickOutcome::Moved(r) => Some(match r.captured {
            Some(c) => format!("{} {} takes {}", r.piece, r.mv, c),
            None => format!("{} {}", r.piece, r.mv),
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let opts = RenderOptions { unicode: !args.ascii, flip: args.flip };

    let mut session = Session::new();
    for raw in &args.moves {
        let mv: Move = raw.parse().with_context(|| format!("--moves entry `{raw}`"))?;
        match session.try_move(mv) {
            ClickOutcome::Moved(_) => {}
            other => bail!("--moves entry `{raw}` was not played: {other:?}"),
        }
    }

    println!("Type a square (e2 or 6,4) to click it, a move like e2e4, or 'quit'.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("\n{}", render(&session, opts));
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() { continue; }
        if input == "quit" || input == "q" { break; }

        let outcome = if input.len() == 4 && !input.contains(',') {
            match input.parse::<Move>() {
                Ok(mv) => session.try_move(mv),
                Err(e) => { println!("{e}"); continue; }
            }
        } else {
            match input.parse::<Square>() {
                Ok(sq) => session.click(sq),
                Err(e) => { println!("{e}"); continue; }
            }
        };
        if let Some(msg) = describe(outcome) { println!("{msg}"); }
        print!("\n{}", render(&session, opts));
        stdout.flush()?;
    }
    Ok(())
}
