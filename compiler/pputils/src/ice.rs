//! Internal error reporting for the header generator
//!
//! Generation itself cannot fail once the arguments are parsed, so a panic is
//! always a bug in pputils. The hook installed here says so, together with
//! the build information and the command line, before handing over to the
//! default hook.

use std::panic::{self, PanicHookInfo};

/// Prints the internal error report around the default panic output
fn ice_hook(
    default_panic_hook: &(dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo<'_>,
) {
    eprintln!("error: internal error encountered while generating the header");
    eprintln!("note: this is a bug in pputils, not in your command line.");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!("note: command line arguments: {}", super::command_line());
    eprintln!();
    default_panic_hook(panic_info);
}

/// Configures the global panic hook
///
/// The previous hook is leaked to obtain the `'static` reference the hook API
/// requires. It is installed once per process.
pub fn setup_panic_hook() {
    let default_panic_hook: &'static _ = Box::leak(panic::take_hook());

    panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));
}
