use clap::Parser;
use hotseat::selfplay::{generate_games, write_jsonl, GameResult, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hotseat-selfplay", about = "Play seeded random games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/games.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, max_plies: a.max_plies, seed: a.seed };
    eprintln!("Generating {} games (max_plies={}, seed={})", a.games, a.max_plies, a.seed);
    let games = generate_games(&params);
    if let Some(dir) = a.out.parent() {
        if !dir.as_os_str().is_empty() { std::fs::create_dir_all(dir)?; }
    }
    write_jsonl(&games, &a.out)?;
    let mates = games.iter().filter(|g| g.result != GameResult::Unfinished).count();
    eprintln!("Wrote {} games to {} ({} ended in mate)", games.len(), a.out.display(), mates);
    Ok(())
}
