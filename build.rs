/// Build script for sortviz
/// Embeds the git revision and build time shown by `sortviz version`

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Absent outside a git checkout; `version` then omits it.
    if let Ok(output) = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            if let Ok(hash) = String::from_utf8(output.stdout) {
                println!("cargo:rustc-env=SORTVIZ_GIT_HASH={}", hash.trim());
            }
        }
    }

    println!("cargo:rustc-env=SORTVIZ_BUILD_TIMESTAMP={}", unix_timestamp());
}

/// Seconds since the Unix epoch, without an external crate
fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
