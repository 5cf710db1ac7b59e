//! Command-line tests for the `hanabi-score` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const LOG: &str = "Start new game with deck R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3 G3 B3\n\
                   Play card 0\n\
                   Play card 0\n\
                   Play card 0\n";

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("hanabi-score").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Scoring stdin is the default command.
#[test]
fn test_scores_stdin_by_default() {
    bin()
        .write_stdin(LOG)
        .assert()
        .success()
        .stdout("Turn: 3, cards: 3, with risk: 3\n");
}

/// The explicit subcommand reads a file.
#[test]
fn test_score_file() {
    let path = std::env::temp_dir().join(format!("hanabi-score-{}.log", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(LOG.as_bytes()).unwrap();
    drop(file);

    bin()
        .args(["score", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Turn: 3, cards: 3, with risk: 3\n");

    std::fs::remove_file(&path).unwrap();
}

/// A missing input file is an error, reported on stderr.
#[test]
fn test_missing_file_fails() {
    bin()
        .args(["score", "--input", "/nonexistent/turns.log"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("opening turn log"));
}

/// JSON output names the reason the game ended.
#[test]
fn test_json_format() {
    bin()
        .args(["score", "--format", "json"])
        .write_stdin(LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""turns":3"#))
        .stdout(predicate::str::contains(r#""reason":"deck_exhausted""#))
        .stdout(predicate::str::contains("bust").not());
}

/// A busted game reports a flat reason and the offending move.
#[test]
fn test_json_format_bust() {
    bin()
        .args(["score", "--format", "json"])
        .write_stdin("Start new game with deck R2 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3\nPlay card 0\n")
        .assert()
        .success()
        .stdout(concat!(
            r#"{"turns":1,"cards":0,"risky":0,"reason":"bust","#,
            r#""bust":{"unplayable_card":{"color":"Red","rank":2}}}"#,
            "\n"
        ));
}

/// Diagnostics stay off stdout even at the most verbose level.
#[test]
fn test_logs_go_to_stderr() {
    bin()
        .args(["--log-level", "debug"])
        .write_stdin(format!("nonsense\n{LOG}"))
        .assert()
        .success()
        .stdout("Turn: 3, cards: 3, with risk: 3\n")
        .stderr(predicate::str::contains("ignoring line"));
}

/// Dealing with a seed is repeatable and yields a full deck.
#[test]
fn test_deal_is_seeded() {
    let first = bin().args(["deal", "--seed", "7"]).output().unwrap();
    let second = bin().args(["deal", "--seed", "7"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let line = String::from_utf8(first.stdout).unwrap();
    let cards: Vec<&str> = line
        .trim_end()
        .strip_prefix("Start new game with deck ")
        .unwrap()
        .split(' ')
        .collect();
    assert_eq!(cards.len(), 50);
}

/// A dealt line can be scored straight away.
#[test]
fn test_deal_output_is_accepted() {
    let deal = bin().args(["deal", "--seed", "3"]).output().unwrap();
    let mut log = String::from_utf8(deal.stdout).unwrap();
    for _ in 0..100 {
        log.push_str("Drop card 0\n");
    }

    bin()
        .write_stdin(log)
        .assert()
        .success()
        .stdout("Turn: 40, cards: 0, with risk: 0\n");
}
