use hotseat::selfplay::{generate_games, read_jsonl, write_jsonl, SelfPlayParams};
use hotseat::RecordError;
use std::fs::create_dir_all;

#[test]
fn write_and_read_jsonl() {
    let params = SelfPlayParams { games: 3, max_plies: 8, seed: 123 };
    let games = generate_games(&params);
    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("games.jsonl");
    write_jsonl(&games, &path).unwrap();
    let back = read_jsonl(&path).unwrap();
    assert_eq!(back, games);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("\"result\":\"unfinished\""));
}

#[test]
fn bad_line_is_reported_with_its_number() {
    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("broken.jsonl");
    std::fs::write(&path, "{\"moves\":[],\"result\":\"white_wins\",\"plies\":0}\n\nnot json\n").unwrap();
    match read_jsonl(&path) {
        Err(RecordError::Json { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a json error, got {other:?}"),
    }
}
