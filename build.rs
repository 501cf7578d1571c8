use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Cargo walks the directory itself, so any front-end edit bumps the id.
    println!("cargo:rerun-if-changed=static");
    println!("cargo:rerun-if-env-changed=ACTIVITY_DIRECTORY_BUILD_ID");

    // CI pins the id; local builds get a timestamp.
    let build_id = env::var("ACTIVITY_DIRECTORY_BUILD_ID").unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_else(|_| "dev".to_string())
    });
    println!("cargo:rustc-env=ACTIVITY_DIRECTORY_BUILD_ID={}", build_id);
}
