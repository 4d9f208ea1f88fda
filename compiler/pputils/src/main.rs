#![doc=include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::deref_by_slicing,
    clippy::else_if_without_else,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::redundant_type_annotations,
    clippy::todo,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod build_info;
mod cli;
mod ice;
mod logging;

use std::env;

use anyhow::{bail, Context as _};
use clap::Parser;
use cli::Cli;
use pputils_gen::{generate_header, Provenance};
use pputils_utils::io;

/// The full command line, as recorded in generated headers
fn command_line() -> String {
    env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();

    // usage errors exit here, before anything is opened
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    logging::init(cli.log_level());

    let (Some(bound), Some(output)) = (cli.count, cli.output) else {
        bail!("both COUNT and OUTPUT are required");
    };

    let header = generate_header(
        bound,
        Provenance::new(build_info::tool_name(), command_line()),
    );

    let mut out = io::open_output(&output)
        .with_context(|| format!("failed to open `{}` for writing", output.display()))?;
    header
        .write_to(&mut out)
        .with_context(|| format!("failed to write `{}`", output.display()))?;

    tracing::info!(
        bound = bound.get(),
        output = %output.display(),
        "wrote header"
    );

    Ok(())
}
