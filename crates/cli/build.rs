use std::process::Command;

/// Exposes `APP_VERSION` to the binary: the nearest release tag with any
/// leading `v` removed, or the manifest version outside a tagged checkout.
fn main() {
    let version = release_tag()
        .map(|tag| tag.trim_start_matches('v').to_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());
    println!("cargo:rustc-env=APP_VERSION={version}");

    for watched in [".git/HEAD", ".git/refs/tags"] {
        println!("cargo:rerun-if-changed={watched}");
    }
}

fn release_tag() -> Option<String> {
    Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|tag| tag.trim().to_owned())
        .filter(|tag| !tag.is_empty())
}
