use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load BOARD_* variables from .env when present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // The real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using the built-in board endpoint and digests.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "BOARD_ENDPOINT_URL",
        "BOARD_CACHE_KEY",
        "BOARD_PASSWORD_DIGEST",
        "BOARD_AUTHORIZED_DIGESTS",
        "BOARD_TOAST_DURATION_MS",
        "BOARD_TOAST_FADE_MS",
        "BOARD_ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
