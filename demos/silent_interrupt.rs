//! Suppresses the diagnostic of an operator interrupt while keeping the
//! abnormal exit.
//!
//! Run with `cargo run --example silent_interrupt`: the process terminates
//! with exit code 101 and prints nothing.

use hushpanic::{PanicKind, suppress_unhandled};

#[derive(Debug)]
struct OperatorInterrupt;

fn main() {
    suppress_unhandled([PanicKind::of::<OperatorInterrupt>()]);

    std::panic::panic_any(OperatorInterrupt);
}
