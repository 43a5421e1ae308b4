use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

/// Path to a sample graph under `demos/`
pub fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

/// Command preloaded with `--graph demos/<name>`
pub fn with_graph(name: &str) -> Command {
    let mut cmd = graphwalk();
    cmd.arg("--graph").arg(demo(name));
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
