//! Diagnostic logging for the command line tool

use tracing::level_filters::LevelFilter;

/// Install a compact stderr subscriber printing events up to `level`
///
/// Stdout is left untouched since it may carry the generated header.
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
