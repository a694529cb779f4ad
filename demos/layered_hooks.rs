//! Layers suppression over a custom diagnostic hook.
//!
//! The custom reporter installed first keeps receiving every panic except
//! the suppressed kind, exactly as it did before suppression was layered on.

use std::panic;

use hushpanic::{PanicKind, suppress_unhandled};

#[derive(Debug)]
struct CacheMiss;

fn main() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        eprintln!("custom reporter engaged:");
        previous(info);
    }));

    suppress_unhandled([PanicKind::of::<CacheMiss>()]);

    // Silent: never reaches the custom reporter.
    let _ = panic::catch_unwind(|| panic::panic_any(CacheMiss));

    // Reported: forwarded to the custom reporter, which defers to the
    // default printer it captured.
    let _ = panic::catch_unwind(|| panic!("cache backend unreachable"));
}
