//! Extra utilities to check what generated headers expand to
//!
//! Only compiled for tests. Every expansion is checked twice: once by a small
//! in-process expander covering the preprocessor features the header uses,
//! and once by the system C compiler in preprocess-only mode (`cc -E -P`).
//! The in-process pass always runs. The `cc` pass prints a note and is
//! skipped when `cc` cannot be spawned.

use std::{collections::HashMap, fmt::Write as _, fs, process::Command};

use crate::{generate_header, template::MacroDefinition, ArityBound, Header, Provenance};

/// Prefix marking the output lines that belong to a [`Case`]
const MARKER_PREFIX: &str = "case_";

/// Generate a header for `bound` with a fixed provenance
pub fn header_for(bound: usize) -> Header {
    generate_header(
        ArityBound::new(bound).expect("test bounds are positive"),
        Provenance::new("pputils", format!("pputils {bound} pp_utils.h")),
    )
}

/// `a1, a2, ..., a<count>`
pub fn arguments(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("a{i}")).collect()
}

/// A line of source using the header, and the tokens it should expand to
#[derive(Debug)]
pub struct Case {
    /// Identifies the case in the preprocessor output
    label: String,
    /// Text placed after `#include "pp_utils.h"`
    source: String,
    /// The expansion with all whitespace removed
    expected: String,
}
impl Case {
    /// Expect `source`, labelled `label`, to expand to `expected`
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            expected: expected.into(),
        }
    }
}

/// Check every case in process, then again with `cc` if it is installed
pub fn assert_expansions(header: &Header, cases: &[Case]) {
    for case in cases {
        assert_eq!(
            expand_in_process(header, &case.source),
            case.expected,
            "in-process expansion of `{}`",
            case.source
        );
    }

    let Some(expanded) = expand_with_cc(header, cases) else {
        return;
    };
    for case in cases {
        assert_eq!(
            expanded[&case.label], case.expected,
            "`cc -E` expansion of `{}`",
            case.source
        );
    }
}

/// Preprocess every case after including `header`.
///
/// Returns each expansion keyed by label, with all whitespace removed so the
/// result does not depend on how the preprocessor spaces tokens.
fn expand_with_cc(header: &Header, cases: &[Case]) -> Option<HashMap<String, String>> {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let header_path = dir.path().join("pp_utils.h");
    fs::write(header_path, header.to_string()).expect("should write header");

    let mut source = String::from("#include \"pp_utils.h\"\n");
    for case in cases {
        let (label, text) = (&case.label, &case.source);
        writeln!(source, "{MARKER_PREFIX}{label}: {text}").expect("should format");
    }
    let source_path = dir.path().join("cases.c");
    fs::write(source_path, source).expect("should write case source");

    let output = match Command::new("cc")
        .args(["-E", "-P", "-x", "c", "cases.c"])
        .current_dir(dir.path())
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            eprintln!("note: skipping preprocessor check, `cc` is unavailable: {err}");
            return None;
        }
    };
    assert!(
        output.status.success(),
        "preprocessing failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let expanded = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(MARKER_PREFIX))
        .filter_map(|line| line.split_once(':'))
        .map(|(label, expansion)| {
            (
                label.trim().to_string(),
                expansion.split_whitespace().collect::<String>(),
            )
        })
        .collect::<HashMap<_, _>>();

    for case in cases {
        assert!(
            expanded.contains_key(&case.label),
            "case `{}` is missing from the preprocessor output",
            case.label
        );
    }
    Some(expanded)
}

/// Expand `text` against the definitions in `header`, without whitespace.
///
/// Handles the part of the preprocessor the header relies on: function-like
/// macros, argument pre-expansion, `##` pasting, deletion of the comma in
/// `,##__VA_ARGS__` when no variadic arguments are given, and rescanning with
/// the macro being replaced disabled.
pub fn expand_in_process(header: &Header, text: &str) -> String {
    expand(header, &tokenize(text), &mut Vec::new()).concat()
}

/// Split into identifiers and numbers, `##`, `...` and single punctuators
fn tokenize(text: &str) -> Vec<String> {
    let is_word = |ch: &char| ch.is_ascii_alphanumeric() || *ch == '_';
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        let mut token = ch.to_string();
        if is_word(&ch) {
            while let Some(next) = chars.next_if(is_word) {
                token.push(next);
            }
        } else if ch == '#' {
            token.extend(chars.next_if_eq(&'#'));
        } else if ch == '.' {
            while let Some(next) = chars.next_if_eq(&'.') {
                token.push(next);
            }
        }
        tokens.push(token);
    }
    tokens
}

/// Replace every enabled macro invocation in `tokens`
///
/// `active` holds the macros whose replacement is being rescanned.
fn expand(header: &Header, tokens: &[String], active: &mut Vec<String>) -> Vec<String> {
    let mut output = Vec::new();
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        let called = tokens.get(index + 1).is_some_and(|next| next == "(");
        let definition = header
            .definition(token)
            .filter(|_| called && !active.contains(token));
        let Some(definition) = definition else {
            output.push(token.clone());
            index += 1;
            continue;
        };

        let (arguments, end) = collect_arguments(tokens, index + 1);
        let replaced = substitute(header, definition, &arguments, active);
        active.push(token.clone());
        output.extend(expand(header, &replaced, active));
        active.pop();
        index = end;
    }
    output
}

/// Read the parenthesized arguments starting at `open`
///
/// Returns the arguments split on top-level commas and the index just past
/// the closing parenthesis.
fn collect_arguments(tokens: &[String], open: usize) -> (Vec<Vec<String>>, usize) {
    let mut arguments = vec![Vec::new()];
    let mut depth = 0_usize;

    for (index, token) in tokens.iter().enumerate().skip(open + 1) {
        match token.as_str() {
            ")" if depth == 0 => return (arguments, index + 1),
            "," if depth == 0 => {
                arguments.push(Vec::new());
                continue;
            }
            "(" => depth += 1,
            ")" => depth -= 1,
            _ => {}
        }
        if let Some(argument) = arguments.last_mut() {
            argument.push(token.clone());
        }
    }
    panic!("unbalanced parentheses in `{}`", tokens.concat());
}

/// Bind `arguments` to the parameters of `definition` and build its
/// replacement list, before rescanning
fn substitute(
    header: &Header,
    definition: &MacroDefinition,
    arguments: &[Vec<String>],
    active: &mut Vec<String>,
) -> Vec<String> {
    let params = definition.parameters();
    let named = params.iter().take_while(|param| *param != "...").count();

    let mut bindings = params[..named]
        .iter()
        .map(String::as_str)
        .zip(arguments.iter().cloned())
        .collect::<HashMap<_, _>>();
    if named < params.len() {
        let variadic = arguments.get(named..).unwrap_or(&[]);
        bindings.insert("__VA_ARGS__", variadic.join(&",".to_string()));
    }

    let body = tokenize(&definition.replacement());
    let mut output: Vec<String> = Vec::new();
    let mut pasting = false;

    for (index, token) in body.iter().enumerate() {
        if token == "##" {
            pasting = true;
            continue;
        }
        let pasted_next = body.get(index + 1).is_some_and(|next| next == "##");
        let mut replacement = match bindings.get(token.as_str()) {
            Some(argument) if pasting || pasted_next => argument.clone(),
            Some(argument) => expand(header, argument, active),
            None => vec![token.clone()],
        };

        if pasting {
            pasting = false;
            let after_comma = output.last().is_some_and(|last| last == ",");
            if token == "__VA_ARGS__" && after_comma {
                // `,##__VA_ARGS__` only drops the comma, it never pastes
                if replacement.is_empty() {
                    output.pop();
                }
            } else if !replacement.is_empty() {
                if let Some(left) = output.last_mut() {
                    left.push_str(&replacement.remove(0));
                }
            }
        }
        output.extend(replacement);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_punctuation() {
        let tokens = tokenize("F(X, _1) A ## B(...)");
        assert_eq!(tokens.join(" "), "F ( X , _1 ) A ## B ( ... )");
    }

    #[test]
    fn arguments_split_on_top_level_commas_only() {
        let tokens = tokenize("M((a, b), c) d");
        let (arguments, end) = collect_arguments(&tokens, 1);
        assert_eq!(arguments, [tokenize("(a, b)"), tokenize("c")]);
        assert_eq!(tokens[end], "d");
    }
}
