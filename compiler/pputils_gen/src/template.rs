//! Structured `#define` templates
//!
//! Every macro in the generated header is described as a [`MacroDefinition`]
//! (a name, its formal parameters and the fragments of its replacement list)
//! and turned into text by a single [`Display`] implementation. The
//! generation stages only ever build these values; none of them format
//! preprocessor text by hand.

use std::fmt::{self, Display};

use pputils_utils::code_fmt::{indent_lines, join_displayed};

/// Indentation of a replacement list moved onto its own line
const CONTINUATION_INDENT: &str = "        ";

/// A positional placeholder `_i`, used as a formal macro parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder(usize);
impl Placeholder {
    /// The placeholder for position `index`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The position this placeholder names
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Placeholders `_1` through `_count`, in order
    pub fn sequence(count: usize) -> impl Iterator<Item = Self> {
        (1..=count).map(Self::new)
    }
}
impl Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", self.0)
    }
}

/// Where the replacement list of a definition is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// On the same line as the signature
    #[default]
    Inline,
    /// On the following line, after a `\` continuation
    Continued,
}

/// One function-like `#define`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    /// The macro name
    name: String,
    /// Formal parameters, in declaration order
    params: Vec<String>,
    /// Replacement list fragments, joined by single spaces
    body: Vec<String>,
    /// How the replacement list is laid out
    layout: Layout,
}
impl MacroDefinition {
    /// Start a definition with no parameters and an empty replacement list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
            layout: Layout::Inline,
        }
    }

    /// Append one formal parameter
    #[must_use]
    pub fn param(mut self, param: impl Display) -> Self {
        self.params.push(param.to_string());
        self
    }

    /// Append several formal parameters, in order
    #[must_use]
    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.params
            .extend(params.into_iter().map(|param| param.to_string()));
        self
    }

    /// Append one replacement list fragment
    #[must_use]
    pub fn fragment(mut self, fragment: impl Display) -> Self {
        self.body.push(fragment.to_string());
        self
    }

    /// Append several replacement list fragments, in order
    #[must_use]
    pub fn fragments<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.body
            .extend(fragments.into_iter().map(|fragment| fragment.to_string()));
        self
    }

    /// Choose the layout of the replacement list
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// The macro name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formal parameters
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.params
    }

    /// The replacement list as it appears in the header
    #[must_use]
    pub fn replacement(&self) -> String {
        self.body.join(" ")
    }
}
impl Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = join_displayed(&self.params, ", ");
        write!(f, "#define {}({params})", self.name)?;

        if self.body.is_empty() {
            return Ok(());
        }

        match self.layout {
            Layout::Inline => write!(f, " {}", self.replacement()),
            Layout::Continued => write!(
                f,
                " \\\n{}",
                indent_lines(&self.replacement(), CONTINUATION_INDENT)
            ),
        }
    }
}
