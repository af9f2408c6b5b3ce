//! Bakes VCS/build metadata into the binary for `lineup --version`.
//!
//! Resilient by design: outside a git checkout (or without the tooling) the
//! fields degrade to stable "unknown" markers instead of failing the build.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=LINEUP_BUILD_GIT_HASH");
    println!("cargo:rerun-if-env-changed=LINEUP_BUILD_TIMESTAMP");

    let git_hash = std::env::var("LINEUP_BUILD_GIT_HASH")
        .ok()
        .or_else(|| capture("git", &["rev-parse", "--short=12", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());
    let timestamp = std::env::var("LINEUP_BUILD_TIMESTAMP")
        .ok()
        .or_else(|| capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=LINEUP_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=LINEUP_BUILD_TIMESTAMP={timestamp}");
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
