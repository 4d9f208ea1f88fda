//! Assembly of the generated header
//!
//! The header is laid out as:
//!
//! 1. the `#pragma once` guard and the provenance comment,
//! 2. the expansion helpers (`PP_UTILS_EXPAND_VARGS`, `_PP_UTILS_EXPAND_COUNT`
//!    and the `_PP_UTILS_JOIN` chain),
//! 3. `PP_UTILS_NARGS` and its helper,
//! 4. `PP_UTILS_UNWRAP` and its helper,
//! 5. the map dispatch table, arity 0 first,
//! 6. the `PP_UTILS_MAP` entry point.
//!
//! Everything below the provenance comment depends only on the arity bound.

use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use pputils_utils::code_fmt::single_line;

use crate::{
    count::{CountSequence, NARGS},
    dispatch::{DispatchTable, MAP_HELPER_PREFIX},
    template::MacroDefinition,
};

/// Name of the public expansion helper
pub const EXPAND_VARGS: &str = "PP_UTILS_EXPAND_VARGS";
/// Expansion helper reserved for `PP_UTILS_NARGS`.
///
/// `PP_UTILS_MAP` reaches `PP_UTILS_NARGS` through [`EXPAND_VARGS`], and a
/// macro is never expanded again inside its own expansion, so the counting
/// macro needs a helper of its own.
pub const EXPAND_COUNT: &str = "_PP_UTILS_EXPAND_COUNT";
/// Name of the public unwrapping macro
pub const UNWRAP: &str = "PP_UTILS_UNWRAP";
/// Name of the public map entry point
pub const MAP: &str = "PP_UTILS_MAP";
/// Outermost link of the pasting chain
const JOIN: &str = "_PP_UTILS_JOIN";
/// Number of links in the pasting chain
const JOIN_DEPTH: usize = 4;

/// Where a generated header came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// The generating tool
    tool: String,
    /// The full command line the tool was run with
    command_line: String,
}
impl Provenance {
    /// Record `tool` run as `command_line`
    ///
    /// Line breaks in either value are folded into spaces so the provenance
    /// stays inside its comment.
    pub fn new(tool: impl AsRef<str>, command_line: impl AsRef<str>) -> Self {
        Self {
            tool: single_line(tool.as_ref()),
            command_line: single_line(command_line.as_ref()),
        }
    }

    /// The generating tool
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// The full command line
    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}
impl Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// === WARNING - DO NOT EDIT - AUTO GENERATED FILE ===")?;
        writeln!(f, "// This file was generated by {}", self.tool)?;
        writeln!(f, "// Full command line: {}", self.command_line)
    }
}

/// A group of definitions separated from its neighbours by a blank line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    /// Comment lines printed above the definitions
    comment: &'static [&'static str],
    /// The definitions, in order
    definitions: Vec<MacroDefinition>,
}
impl Section {
    /// A section without a comment
    fn new(definitions: Vec<MacroDefinition>) -> Self {
        Self {
            comment: &[],
            definitions,
        }
    }
}
impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.comment {
            writeln!(f, "// {line}")?;
        }
        for definition in &self.definitions {
            writeln!(f, "{definition}")?;
        }
        Ok(())
    }
}

/// `PP_UTILS_EXPAND_VARGS`, `_PP_UTILS_EXPAND_COUNT` and the pasting chain
fn expansion_helpers() -> Section {
    let expand = |name: &str| {
        MacroDefinition::new(name)
            .params(["FUNC", "ARGS"])
            .fragments(["FUNC", "ARGS"])
    };

    let mut definitions = vec![expand(EXPAND_VARGS), expand(EXPAND_COUNT)];

    // _PP_UTILS_JOIN4 pastes, every outer link only forces one more expansion
    // of its arguments
    let link = |depth: usize| {
        if depth == 1 {
            JOIN.to_string()
        } else {
            format!("{JOIN}{depth}")
        }
    };
    definitions.push(
        MacroDefinition::new(link(JOIN_DEPTH))
            .params(["A", "B"])
            .fragments(["A", "##", "B"]),
    );
    for depth in (1..JOIN_DEPTH).rev() {
        definitions.push(
            MacroDefinition::new(link(depth))
                .params(["A", "B"])
                .fragment(format!("{}(A, B)", link(depth + 1))),
        );
    }

    Section {
        comment: &[
            "Some preprocessors forward __VA_ARGS__ to another macro as a single argument.",
            "Expanding `FUNC ARGS` through a helper splits the arguments again.",
        ],
        definitions,
    }
}

/// `PP_UTILS_UNWRAP` and its helper
fn unwrap_macros() -> Section {
    let helper = "_PP_UTILS_UNWRAP_HELPER";
    Section::new(vec![
        MacroDefinition::new(helper)
            .param("...")
            .fragment("__VA_ARGS__"),
        MacroDefinition::new(UNWRAP)
            .param("ARGS")
            .fragment(format!("{EXPAND_VARGS}({helper}, ARGS)")),
    ])
}

/// `PP_UTILS_MAP`, dispatching on the argument count
fn map_entry_point() -> Section {
    let count = format!("{EXPAND_VARGS}({NARGS}, (__VA_ARGS__))");
    let selected = format!("{JOIN}({MAP_HELPER_PREFIX}, {count})");

    Section::new(vec![MacroDefinition::new(MAP)
        .params(["NAME", "FUNC", "..."])
        .fragment(format!(
            "{EXPAND_VARGS}({selected}, (NAME, FUNC, ##__VA_ARGS__))"
        ))])
}

/// A fully assembled header, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Where this header came from
    provenance: Provenance,
    /// The macro sections, in output order
    sections: Vec<Section>,
}
impl Header {
    /// Assemble the header from the outputs of the generation stages
    #[must_use]
    pub fn new(provenance: Provenance, sequence: &CountSequence, table: DispatchTable) -> Self {
        Self {
            provenance,
            sections: vec![
                expansion_helpers(),
                Section::new(sequence.definitions()),
                unwrap_macros(),
                Section::new(table.definitions().collect()),
                map_entry_point(),
            ],
        }
    }

    /// Where this header came from
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Every definition in the header, in output order
    pub fn definitions(&self) -> impl Iterator<Item = &MacroDefinition> {
        self.sections
            .iter()
            .flat_map(|section| section.definitions.iter())
    }

    /// The definition named `name`, if the header has one
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&MacroDefinition> {
        self.definitions()
            .find(|definition| definition.name() == name)
    }

    /// Everything after the provenance comment.
    ///
    /// Identical for every run with the same arity bound.
    #[must_use]
    pub fn macros(&self) -> String {
        self.sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the whole header to `out`
    ///
    /// # Errors
    /// Returns any error reported by `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_string().as_bytes())?;
        out.flush()
    }
}
impl Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#pragma once")?;
        writeln!(f, "{}", self.provenance)?;
        write!(f, "{}", self.macros())
    }
}
