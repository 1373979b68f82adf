//! cembed - Embed a binary file as a C byte-array header
//!
//! This tool reads one binary file and writes a `#pragma once` header
//! declaring its bytes as a `static const unsigned char` array, for
//! inclusion in firmware and other compiled programs.
//!
//! The input path, output path, and array name are fixed at build time:
//! edit the constants below and rebuild. There are deliberately no
//! command-line flags.

use anyhow::{Context, Result};
use cembed_core::{transcode_file, Error};
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Binary file to embed
const INPUT_PATH: &str = "assets/frank_128x64_clean.jpg";

/// Header file to generate
const OUTPUT_PATH: &str = "include/generated/frank_128x64_clean_jpg.h";

/// Identifier declared for the array
const ARRAY_NAME: &str = "image_jpg";

fn main() -> Result<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH), ARRAY_NAME)
}

/// Run one transcode and report the outcome on the console
///
/// A missing input file is the one handled condition: it prints a message
/// naming the path and returns normally. Every other fault propagates and
/// terminates the process with a non-zero status.
fn run(input: &Path, output: &Path, array_name: &str) -> Result<()> {
    debug!(
        "Embedding {} into {} as '{}'",
        input.display(),
        output.display(),
        array_name
    );

    match transcode_file(input, output, array_name) {
        Ok(report) => {
            println!(
                "Embedded '{}' as '{}' in '{}' ({} bytes)",
                input.display(),
                array_name,
                report.output.display(),
                report.bytes
            );
            Ok(())
        }
        Err(err @ Error::FileNotFound { .. }) => {
            eprintln!("{err}");
            Ok(())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to embed '{}'", input.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_header() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("icon.bin");
        fs::write(&input, [0x0F, 0xF0]).unwrap();
        let output = dir.path().join("gen/icon.h");

        run(&input, &output, "icon").unwrap();

        let header = fs::read_to_string(&output).unwrap();
        assert!(header.contains("static const unsigned char icon[] = {"));
        assert!(header.contains("0x0F, 0xF0, "));
    }

    #[test]
    fn test_run_missing_input_exits_normally() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.jpg");
        let output = dir.path().join("gen/nope.h");

        // The handled case: no error, no output file
        assert!(run(&input, &output, "nope").is_ok());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_twice_overwrites() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("asset.bin");
        fs::write(&input, [0x42]).unwrap();
        let output = dir.path().join("asset.h");

        run(&input, &output, "asset").unwrap();
        let first = fs::read_to_string(&output).unwrap();
        run(&input, &output, "asset").unwrap();
        assert_eq!(first, fs::read_to_string(&output).unwrap());
    }
}
