//! The file-to-file transcode pipeline.
//!
//! A single linear pass: ensure the output directory exists, read the
//! input fully, format it with [`HeaderEmitter`], write the output file.
//! Both file handles are scoped inside the `fs` calls and close on every
//! exit path, including errors.
//!
//! On a write fault no cleanup is attempted; a partially written output
//! file may remain. Re-running against the same output path is not an
//! error and overwrites the prior file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::emit::{EmitterConfig, HeaderEmitter};
use crate::error::{Error, Result};

/// Summary of a completed transcode
#[derive(Debug, Clone)]
pub struct TranscodeReport {
    /// Number of input bytes embedded
    pub bytes: usize,
    /// Path of the written header
    pub output: PathBuf,
}

/// Embed the input file into a C header at the output path
///
/// Parent directories of `output` are created if absent. A missing input
/// file yields [`Error::FileNotFound`]; all other I/O failures map to the
/// remaining [`Error`] variants.
pub fn transcode_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    array_name: &str,
) -> Result<TranscodeReport> {
    transcode_file_with_config(input, output, array_name, EmitterConfig::default())
}

/// Embed the input file with a custom layout configuration
pub fn transcode_file_with_config(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    array_name: &str,
    config: EmitterConfig,
) -> Result<TranscodeReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            trace!("Ensuring output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| Error::directory_create(parent, e))?;
        }
    }

    trace!("Reading {}", input.display());
    let data = fs::read(input).map_err(|e| Error::file_read(input, e))?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let header = HeaderEmitter::new(array_name)
        .with_config(config)
        .emit(&data);

    fs::write(output, header).map_err(|e| Error::file_write(output, e))?;
    debug!("Wrote {}", output.display());

    Ok(TranscodeReport {
        bytes: data.len(),
        output: output.to_path_buf(),
    })
}
