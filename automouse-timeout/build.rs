use std::path::Path;
use std::{env, fs};

use const_gen::*;

/// Used when `AUTOMOUSE_TIMEOUT_MS` is not set at build time
const FALLBACK_AUTOMOUSE_TIMEOUT_MS: u32 = 600;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=AUTOMOUSE_TIMEOUT_MS");

    let default_timeout_ms: u32 = match env::var("AUTOMOUSE_TIMEOUT_MS") {
        Ok(value) => value
            .trim()
            .parse()
            .expect("AUTOMOUSE_TIMEOUT_MS must be a non-negative integer in milliseconds"),
        Err(_) => FALLBACK_AUTOMOUSE_TIMEOUT_MS,
    };

    let constants = [const_declaration!(pub(crate) DEFAULT_AUTOMOUSE_TIMEOUT_MS = default_timeout_ms)]
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}
