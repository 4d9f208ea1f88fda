//! The descending literal ladder behind `PP_UTILS_NARGS`
//!
//! `PP_UTILS_NARGS(a, b)` forwards `, a, b, N, N-1, ..., 0` to a helper whose
//! parameter list is one slot longer than the bound. The supplied arguments
//! push the ladder to the right, so the selector parameter lands on the
//! literal equal to the number of arguments.
//!
//! The zero-argument case depends on the `,##__VA_ARGS__` extension: with
//! nothing supplied the comma in front of `__VA_ARGS__` is deleted, leaving a
//! single empty leading argument exactly as when arguments are present. The
//! helper absorbs that empty argument in its fixed `_0` slot.

use pputils_utils::code_fmt::join_displayed;

use crate::{
    arity::ArityBound,
    header::EXPAND_COUNT,
    template::{MacroDefinition, Placeholder},
};

/// Name of the public counting macro
pub const NARGS: &str = "PP_UTILS_NARGS";
/// Name of the private helper selecting the count out of the ladder
pub const NARGS_HELPER: &str = "_PP_UTILS_NARGS_HELPER";
/// Helper parameter that absorbs the empty argument left by the leading comma
const ELIDED_SLOT: Placeholder = Placeholder::new(0);
/// Helper parameter receiving the count
const SELECTOR: &str = "N";

/// Placeholders and literals needed to count up to an [`ArityBound`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSequence {
    /// `_1` through `_N`
    placeholders: Vec<Placeholder>,
    /// `N` down to `0`
    literals: Vec<usize>,
}
impl CountSequence {
    /// The `N` distinct placeholders of the counting helper
    #[must_use]
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// The literals `N, N-1, ..., 0`
    #[must_use]
    pub fn literals(&self) -> &[usize] {
        &self.literals
    }

    /// `_PP_UTILS_NARGS_HELPER(_0, _1, ..., _N, N, ...) N`
    #[must_use]
    pub fn helper_definition(&self) -> MacroDefinition {
        MacroDefinition::new(NARGS_HELPER)
            .param(ELIDED_SLOT)
            .params(&self.placeholders)
            .param(SELECTOR)
            .param("...")
            .fragment(SELECTOR)
    }

    /// `PP_UTILS_NARGS(...)`, forwarding the arguments and the ladder to the
    /// helper
    #[must_use]
    pub fn public_definition(&self) -> MacroDefinition {
        let ladder = join_displayed(&self.literals, ", ");

        MacroDefinition::new(NARGS)
            .param("...")
            .fragment(format!(
                "{EXPAND_COUNT}({NARGS_HELPER}, (,##__VA_ARGS__, {ladder}))"
            ))
    }

    /// Both counting macros, helper first
    #[must_use]
    pub fn definitions(&self) -> Vec<MacroDefinition> {
        vec![self.helper_definition(), self.public_definition()]
    }
}

/// Build the counting placeholders and the descending ladder for `bound`
#[must_use]
pub fn count_sequence(bound: ArityBound) -> CountSequence {
    CountSequence {
        placeholders: Placeholder::sequence(bound.get()).collect(),
        literals: bound.arities().rev().collect(),
    }
}
