#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn drr() -> Command {
    cargo_bin_cmd!("drrcalc")
}

/// Run a session script: each entry is one input line; `quit` is appended.
pub fn run_script(lines: &[&str]) -> assert_cmd::assert::Assert {
    let mut input = lines.join("\n");
    input.push_str("\nquit\n");
    drr().arg("--test").write_stdin(input).assert()
}

/// Create a unique output path inside the system temp dir and remove any
/// existing file.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drrcalc_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}
