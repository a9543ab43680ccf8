use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bf").unwrap() }

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn test_prints_capital_a() {
    let tf = program_file("++++++++[>++++++++<-]>+.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("A")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_comments_are_ignored() {
    let tf = program_file("print A:\n++++++++ [ >++++++++ <- ] >+ .\n");
    cargo_bin().arg(tf.path()).assert().success().stdout("A");
}

#[test]
fn test_hello_world() {
    let tf = program_file("++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.");
    cargo_bin().arg(tf.path()).assert().success().stdout("Hello World!\n");
}

#[test]
fn test_reads_from_stdin_and_echoes() {
    let tf = program_file(",[.,]");
    cargo_bin()
        .arg("--eof").arg("zero")
        .arg(tf.path())
        .write_stdin("Zebra")
        .timeout(Duration::from_secs(2))
        .assert()
        .success()
        .stdout("Zebra");
}

#[test]
fn test_default_eof_stores_255() {
    let tf = program_file(",.");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::eq(&[255u8][..]));
}

#[test]
fn test_unchanged_eof_keeps_cell() {
    let tf = program_file("+++,.");
    cargo_bin()
        .args(["--eof", "unchanged"])
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[3u8][..]));
}

#[test]
fn test_same_input_same_output() {
    let tf = program_file(",[+.,]");
    let run = || {
        let assert = cargo_bin()
            .args(["--eof", "zero"])
            .arg(tf.path())
            .write_stdin("abc")
            .assert()
            .success();
        assert.get_output().stdout.clone()
    };
    let first = run();
    assert_eq!(first, b"bcd");
    assert_eq!(first, run());
}

#[test]
fn test_max_steps_aborts_infinite_loop() {
    let tf = program_file("+[]");
    cargo_bin()
        .args(["--max-steps", "50"])
        .arg(tf.path())
        .timeout(Duration::from_secs(2))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("step limit exceeded (50)"));
}

#[test]
fn test_debug_traces_to_stderr_only() {
    let tf = program_file(">+.");
    cargo_bin()
        .env_remove("RUST_LOG")
        .arg("--debug")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[1u8][..]))
        .stderr(predicate::str::contains("ip=0").and(predicate::str::contains("instr=>")));
}

#[test]
fn test_help_exits_0() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("2048")));
}
