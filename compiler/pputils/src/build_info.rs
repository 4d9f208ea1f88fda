//! Build information module

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// The tool name recorded in generated headers, e.g. `pputils 0.1.0`
pub fn tool_name() -> String {
    format!("{} {}", build::PROJECT_NAME, build::PKG_VERSION)
}

/// The commit this binary was built from, marked if the tree was dirty
fn revision() -> String {
    let commit = if build::SHORT_COMMIT.is_empty() {
        "unknown commit"
    } else {
        build::SHORT_COMMIT
    };

    if build::GIT_CLEAN {
        commit.to_string()
    } else {
        format!("{commit}, tainted!")
    }
}

/// Files that differed from the commit when this binary was built
fn tainted_files() -> Vec<&'static str> {
    build::GIT_STATUS_FILE
        .lines()
        .map(|line| {
            line.strip_suffix(" (dirty)")
                .or_else(|| line.strip_suffix(" (staged)"))
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Returns the multi-line build description printed by `--version`
pub fn version() -> String {
    let mut lines = vec![
        format!(
            "{} ({}) built for {} on {} ({} mode)",
            tool_name(),
            revision(),
            build::BUILD_TARGET,
            build::BUILD_TIME_3339,
            build::BUILD_RUST_CHANNEL
        ),
        format!(
            "{} ({} on {})",
            build::RUST_VERSION,
            build::RUST_CHANNEL,
            build::BUILD_OS
        ),
        build::CARGO_VERSION.to_string(),
    ];

    let tainted = tainted_files();
    if !tainted.is_empty() {
        lines.push("tainted files:".to_string());
        lines.extend(tainted.into_iter().map(|file| format!("  {file}")));
    }

    lines.join("\n")
}
