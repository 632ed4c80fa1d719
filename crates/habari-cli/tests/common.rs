//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;

pub const FANSUB_RELEASE: &str = "[SubsPlease] Cowboy Bebop - 05 (1080p) [A1B2C3D4].mkv";

#[allow(deprecated)]
pub fn habari() -> Command {
    Command::cargo_bin("habari").expect("habari binary should be built")
}

pub fn stdout_of(args: &[&str]) -> String {
    let output = habari().args(args).output().expect("Failed to run habari");
    assert!(
        output.status.success(),
        "habari {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}
