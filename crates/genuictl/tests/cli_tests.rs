//! CLI integration tests for genui
//!
//! Covers the non-interactive surface:
//! - genui prompts [--json]
//! - genui resolve PROMPT   (exit 3 on no match)
//! - genui fractal --depth N
//! - config and flag validation exit codes

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).unwrap();
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("genui.log")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_genui"))
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env("GENUI_LOG_FILE", self.log_path())
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env_remove("GENUI_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn log_contents(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn test_prompts_lists_every_example() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["prompts"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("[EXAMPLE PROMPTS]"));
    for id in ["clock", "fractal_explorer", "math_quiz", "memory_game"] {
        assert!(text.contains(id), "missing {} in:\n{}", id, text);
    }
}

#[test]
fn test_prompts_json_is_machine_readable() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["prompts", "--json"]);

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["index"], 1);
    assert_eq!(entries[0]["component"], "clock");
    assert_eq!(entries[3]["component"], "memory_game");
}

#[test]
fn test_resolve_matches_keyword() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["resolve", "서울은 지금 몇 시간대야?"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "clock");
}

#[test]
fn test_resolve_without_match_exits_3() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["resolve", "오늘 날씨 어때?"]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output).trim(), "none");
}

#[test]
fn test_fractal_depth_three_has_27_triangles() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["fractal", "--depth", "3"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[SIERPINSKI]"));
    assert!(text.contains("27"), "{}", text);
    assert!(text.contains("1.585"));
}

#[test]
fn test_fractal_uses_configured_default_depth() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[fractal]\ndefault_depth = 2\n");
    let output = sandbox.run(&["fractal"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Depth:               2"), "{}", text);
}

#[test]
fn test_invalid_theme_is_config_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--theme", "sepia", "prompts"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("[ERROR]"));
    assert!(stderr(&output).contains("sepia"));
    assert!(log_contents(&sandbox.log_path()).contains("sepia"));
}

#[test]
fn test_malformed_config_is_config_error() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[ui\ntheme = ");
    let output = sandbox.run(&["prompts"]);

    assert_eq!(output.status.code(), Some(78));
}

#[test]
fn test_missing_explicit_config_is_io_error() {
    let sandbox = Sandbox::new();
    let output = Command::new(env!("CARGO_BIN_EXE_genui"))
        .args(["--config", "/nonexistent/genui/config.toml", "prompts"])
        .env("GENUI_LOG_FILE", sandbox.log_path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(74));
}
