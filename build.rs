//! Build script for the Lyric Quiz server.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory, next to the `.env` the server reads at startup, so a fresh
//! install has a template to fill in.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to `<data_local_dir>/lyricquiz/.env.example`.
///
/// - Linux: `~/.local/share/lyricquiz/.env.example`
/// - macOS: `~/Library/Application Support/lyricquiz/.env.example`
/// - Windows: `%LOCALAPPDATA%/lyricquiz/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the copy fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("lyricquiz");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        fs::copy(&env_example_path, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
