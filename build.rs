//! Build script: stamps `PROFILESYNC_VERSION` for the binary.
use std::process::Command;

fn main() {
    // Prefer PROFILESYNC_VERSION if set (e.g., by the release workflow),
    // then git describe, then the crate version.
    let version = std::env::var("PROFILESYNC_VERSION")
        .ok()
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--tags", "--always", "--dirty"])
                .output()
                .ok()
                .filter(|output| output.status.success())
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| std::env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=PROFILESYNC_VERSION={version}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=PROFILESYNC_VERSION");
}
