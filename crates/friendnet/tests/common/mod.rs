//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Path to the friendnet binary built by cargo for this test run
pub fn friendnet_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_friendnet"))
}

/// Run the friendnet binary with `args`, feeding `script` on stdin
pub fn run_friendnet(args: &[&str], script: &str) -> Output {
    run_friendnet_in_dir(Path::new(env!("CARGO_MANIFEST_DIR")), args, script)
}

/// Run the friendnet binary in the specified directory
pub fn run_friendnet_in_dir(dir: &Path, args: &[&str], script: &str) -> Output {
    let mut child = Command::new(friendnet_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start friendnet binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    child
        .wait_with_output()
        .expect("Failed to wait for friendnet binary")
}

/// Stdout of a finished run as a string
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
