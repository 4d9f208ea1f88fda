//! The per-arity table behind `PP_UTILS_MAP`
//!
//! Entry `i` is named `_PP_UTILS_MAP_HELPER_<i>`, so `PP_UTILS_MAP` can pick
//! it by pasting the result of `PP_UTILS_NARGS` onto the shared prefix.

use std::fmt::{self, Display};

use crate::{
    arity::ArityBound,
    template::{Layout, MacroDefinition, Placeholder},
};

/// Shared prefix of every dispatch table entry
pub const MAP_HELPER_PREFIX: &str = "_PP_UTILS_MAP_HELPER_";
/// Parameter carrying the caller's name token
const NAME_PARAM: &str = "NAME";
/// Parameter carrying the caller's function token
const FUNC_PARAM: &str = "FUNC";

/// A single `FUNC(NAME, _i)` fragment, tied to the placeholder it consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    /// The positional argument forwarded to `FUNC`
    placeholder: Placeholder,
}
impl Invocation {
    /// The invocation consuming `placeholder`
    #[must_use]
    pub const fn new(placeholder: Placeholder) -> Self {
        Self { placeholder }
    }

    /// The positional argument forwarded to `FUNC`
    #[must_use]
    pub const fn placeholder(self) -> Placeholder {
        self.placeholder
    }
}
impl Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FUNC_PARAM}({NAME_PARAM}, {})", self.placeholder)
    }
}

/// The dispatch table entry for one arity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Number of positional arguments this entry accepts
    arity: usize,
    /// One invocation per positional argument, left to right
    invocations: Vec<Invocation>,
}
impl DispatchEntry {
    /// Build the entry accepting `arity` positional arguments
    #[must_use]
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            invocations: Placeholder::sequence(arity).map(Invocation::new).collect(),
        }
    }

    /// Number of positional arguments this entry accepts
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The invocations making up the expansion, left to right
    #[must_use]
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// `_PP_UTILS_MAP_HELPER_<arity>`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{MAP_HELPER_PREFIX}{}", self.arity)
    }

    /// The `#define` for this entry
    ///
    /// The empty entry keeps its body on one line; every other entry moves its
    /// body after a line continuation.
    #[must_use]
    pub fn definition(&self) -> MacroDefinition {
        let definition = MacroDefinition::new(self.name())
            .param(NAME_PARAM)
            .param(FUNC_PARAM)
            .params(self.invocations.iter().map(|call| call.placeholder()))
            .fragments(&self.invocations);

        if self.invocations.is_empty() {
            definition
        } else {
            definition.layout(Layout::Continued)
        }
    }
}

/// Every [`DispatchEntry`] from arity 0 up to the bound, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    /// Indexed by arity
    entries: Vec<DispatchEntry>,
}
impl DispatchTable {
    /// The entries, arity 0 first
    #[must_use]
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// The entry for `arity`, if the table covers it
    #[must_use]
    pub fn get(&self, arity: usize) -> Option<&DispatchEntry> {
        self.entries.get(arity)
    }

    /// Number of entries, which is the bound plus one
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Never true for a table built from an
    /// [`ArityBound`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `#define`s of every entry, arity 0 first
    pub fn definitions(&self) -> impl Iterator<Item = MacroDefinition> + '_ {
        self.entries.iter().map(DispatchEntry::definition)
    }
}

/// Build one entry per arity in `0..=bound`
#[must_use]
pub fn build_dispatch_table(bound: ArityBound) -> DispatchTable {
    DispatchTable {
        entries: bound.arities().map(DispatchEntry::new).collect(),
    }
}
