//! Utilities for formatting generated code

use std::fmt::Display;

/// Helper function to indent all lines of a string by a given prefix
#[must_use]
pub fn indent_lines(code: &str, prefix: &str) -> String {
    code.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render every item and join them with `separator`
///
/// # Examples
/// ```
/// use pputils_utils::code_fmt::join_displayed;
///
/// assert_eq!(join_displayed([3, 2, 1], ", "), "3, 2, 1");
/// assert_eq!(join_displayed(Vec::<u8>::new(), ", "), "");
/// ```
#[must_use]
pub fn join_displayed<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Fold a possibly multi-line string onto a single line, joining the lines
/// with single spaces.
///
/// Used for text that must stay inside a `//` comment.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
