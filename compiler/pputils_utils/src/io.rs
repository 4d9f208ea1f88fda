//! Opening the destination of a generated file
//!
//! The destination is either a regular file, which is created or truncated,
//! or standard output when the path is `-`.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Returns `true` if the path names standard output
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Opens the output file and returns a writer
///
/// If the path is "-", it writes to standard output.
/// If the path is a regular file, it opens (or creates) the file for writing,
/// truncating it if it already exists. Nothing previously stored in the file
/// survives.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if is_stdout(path) {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        )
    })
}
