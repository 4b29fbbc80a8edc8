use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const KEYWORDS: &str = "E: [탄소, 배출]\nS: [안전]\nG: [이사회]\n";

const NEWS: &str = "\
회사,날짜,제목,내용,출처
그린전자,2024-01-01,뉴스,혁신 제품 발표,
그린전자,2024-01-02,뉴스,선도 기업 선언,
그린전자,2024-01-03,뉴스,탄소 안전 이사회 배출,DART
블루화학,2024-01-01,뉴스,안전 점검,
";

const ENV_VARS: [&str; 7] = [
    "ESG_SCORING_MATCH_MODE",
    "ESG_GREENWASH_MIN_HISTORY",
    "ESG_PIPELINE_THREADS",
    "ESG_PIPELINE_PARALLEL",
    "ESG_OUTPUT_FORMAT",
    "ESG_OUTPUT_EXTENDED",
    "ESG_LOG",
];

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("news.csv"), NEWS).unwrap();
    std::fs::write(dir.path().join("kw.yaml"), KEYWORDS).unwrap();
    dir
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("esg").unwrap();
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn writes_csv_and_reports_path() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "out.csv"])
        .assert()
        .success()
        .stdout(contains("saved: out.csv"));

    let written = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "company,esg_avg,esg_last,n_docs,greenwash_flag");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("그린전자,"));
    assert!(lines[1].ends_with(",3,1"));
    assert!(lines[2].starts_with("블루화학,"));
}

#[test]
fn json_extended_output() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "out.json", "--format", "json", "--extended"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    assert!(written.trim_start().starts_with('['));
    assert!(written.contains("\"sentiment_pos\""));
    assert!(written.contains("\"greenwash_flag\": 1"));
}

#[test]
fn sequential_flag_gives_same_table() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "par.csv"])
        .assert()
        .success();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "seq.csv", "--sequential"])
        .assert()
        .success();
    let par = std::fs::read_to_string(dir.path().join("par.csv")).unwrap();
    let seq = std::fs::read_to_string(dir.path().join("seq.csv")).unwrap();
    assert_eq!(par, seq);
}

#[test]
fn missing_column_exits_2_with_observed_columns() {
    let dir = workspace();
    std::fs::write(dir.path().join("bad.csv"), "회사,제목\nAcme,hello\n").unwrap();
    cmd(dir.path())
        .args(["--in", "bad.csv", "--kw", "kw.yaml", "--out", "out.csv"])
        .assert()
        .code(2)
        .stderr(contains("[SCHEMA_ERROR]").and(contains("content")).and(contains("company, title")));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn missing_catalog_exits_2() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "nope.yaml", "--out", "out.csv"])
        .assert()
        .code(2)
        .stderr(contains("[CATALOG_ERROR]"));
}

#[test]
fn missing_input_exits_1() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "nope.csv", "--kw", "kw.yaml", "--out", "out.csv"])
        .assert()
        .code(1)
        .stderr(contains("[LOAD_ERROR]"));
}

#[test]
fn invalid_config_exits_2() {
    let dir = workspace();
    std::fs::write(dir.path().join("esg.toml"), "[greenwash]\nmin_history = 1\n").unwrap();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "out.csv"])
        .assert()
        .code(2)
        .stderr(contains("[CONFIG_ERROR]"));
}

#[test]
fn explicit_missing_config_exits_2() {
    let dir = workspace();
    cmd(dir.path())
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(contains("[CONFIG_ERROR]"));
}

#[test]
fn env_override_selects_json() {
    let dir = workspace();
    cmd(dir.path())
        .env("ESG_OUTPUT_FORMAT", "json")
        .args(["--in", "news.csv", "--kw", "kw.yaml", "--out", "out.txt"])
        .assert()
        .success();
    let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(written.trim_start().starts_with('['));
}

#[test]
fn bundled_samples_run() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let out = TempDir::new().unwrap();
    let out_path = out.path().join("results.csv");
    cmd(&root)
        .args(["--in", "data/news_samples.csv", "--kw", "data/esg_keywords.yaml", "--out"])
        .arg(&out_path)
        .args(["--config", "esg.example.toml"])
        .assert()
        .success()
        .stdout(contains("saved:"));

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.lines().count(), 4);
    let flagged: Vec<&str> = written.lines().skip(1).filter(|l| l.ends_with(",1")).collect();
    assert_eq!(flagged.len(), 1);
    assert!(flagged[0].starts_with("그린전자,"));
}
