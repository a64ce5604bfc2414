use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";

fn bin() -> String {
    env!("CARGO_BIN_EXE_hexdiff").to_string()
}

fn files(dir: &TempDir, left: &[u8], right: &[u8]) -> (PathBuf, PathBuf) {
    let file_1 = dir.path().join("left.bin");
    let file_2 = dir.path().join("right.bin");
    std::fs::write(&file_1, left).unwrap();
    std::fs::write(&file_2, right).unwrap();
    (file_1, file_2)
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn cli_reports_differing_block() {
    let dir = tempdir().unwrap();
    let (file_1, file_2) = files(&dir, b"ABCDEFGH", b"ABCDXFGH");

    let output = Command::new(bin())
        .args(["-c", "8"])
        .arg(&file_1)
        .arg(&file_2)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    println!("[*] stdout = {:?}", lines);
    assert!(lines[0].contains("offset"));
    assert!(lines[1].starts_with(RED));
    assert!(lines[1].contains(&format!("{}45", RED)));
    assert!(lines[1].contains(&format!("{}58", RED)));
}

#[test]
fn cli_collapses_equal_blocks() {
    let dir = tempdir().unwrap();
    let data = vec![0xaau8; 64];
    let (file_1, file_2) = files(&dir, &data, &data);

    let output = Command::new(bin())
        .args(["--columns", "16"])
        .arg(&file_1)
        .arg(&file_2)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3, "{:?}", lines);
    assert!(lines[1].starts_with(RESET));
    assert_eq!(lines[2], "...");
}

#[test]
fn cli_skip_offsets_and_max_len() {
    let dir = tempdir().unwrap();
    let (file_1, file_2) = files(&dir, b"xxxxABCDEFGH", b"yyABCDEFGH");

    let output = Command::new(bin())
        .args(["-c", "4", "-n", "4"])
        .arg(&file_1)
        .arg(&file_2)
        .args(["0x4", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "{:?}", lines);
    assert!(lines[1].contains("0x0000000004  41 42 43 44 ABCD"));
    assert!(lines[1].contains("0x0000000002  41 42 43 44 ABCD"));
}

#[test]
fn cli_width_fits_block() {
    let dir = tempdir().unwrap();
    let (file_1, file_2) = files(&dir, b"0123456789", b"0123456789");

    let output = Command::new(bin())
        .args(["-w", "80", "-a"])
        .arg(&file_1)
        .arg(&file_2)
        .output()
        .unwrap();
    assert!(output.status.success());

    // 80 columns fit 8 bytes per line.
    let lines = stdout_lines(&output);
    assert!(lines[1].contains("30 31 32 33 34 35 36 37 01234567"), "{:?}", lines);
}

#[test]
fn cli_missing_file_fails() {
    let dir = tempdir().unwrap();
    let file_1 = dir.path().join("present.bin");
    std::fs::write(&file_1, b"data").unwrap();
    let file_2 = dir.path().join("absent.bin");

    let output = Command::new(bin())
        .arg(&file_1)
        .arg(&file_2)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("absent.bin"), "{}", stderr);
}

#[test]
fn cli_rejects_bad_arguments() {
    let dir = tempdir().unwrap();
    let (file_1, file_2) = files(&dir, b"a", b"a");

    let st = Command::new(bin())
        .args(["-c", "0"])
        .arg(&file_1)
        .arg(&file_2)
        .status()
        .unwrap();
    assert!(!st.success());

    let st = Command::new(bin())
        .arg(&file_1)
        .arg(&file_2)
        .args(["0", "0", "extra"])
        .status()
        .unwrap();
    assert!(!st.success());

    let st = Command::new(bin()).arg(&file_1).status().unwrap();
    assert!(!st.success());
}
