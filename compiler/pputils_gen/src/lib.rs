#![doc=include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::format_push_string,
    clippy::min_ident_chars,
    clippy::redundant_type_annotations,
    clippy::todo,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

pub mod arity;
pub mod count;
pub mod dispatch;
pub mod header;
pub mod template;

#[cfg(test)]
mod test_utils;

pub use arity::{ArityBound, ArityError};
pub use header::{Header, Provenance};

/// Run every generation stage for `bound` and assemble the resulting header.
///
/// The counting ladder is built first, then the dispatch table, then both are
/// handed to the [`Header`] together with the provenance. Nothing is written
/// anywhere; see [`Header::write_to`].
#[must_use]
pub fn generate_header(bound: ArityBound, provenance: Provenance) -> Header {
    let sequence = count::count_sequence(bound);
    tracing::debug!(
        bound = bound.get(),
        literals = sequence.literals().len(),
        "built counting sequence"
    );

    let table = dispatch::build_dispatch_table(bound);
    tracing::debug!(entries = table.len(), "built map dispatch table");

    let header = Header::new(provenance, &sequence, table);
    tracing::debug!(
        definitions = header.definitions().count(),
        "assembled header"
    );
    header
}
