#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Selective suppression of unhandled-panic diagnostics.
//!
//! When a panic goes unhandled, the process-wide panic hook prints a
//! diagnostic to stderr and the runtime then terminates the panicking thread
//! (taking the process down with a non-zero exit code when that thread is
//! `main`). This crate intercepts exactly the diagnostic half of that
//! sequence: panics of caller-chosen kinds stay silent, every other panic is
//! reported precisely as it would have been before.
//!
//! # Quick Start
//!
//! ```rust
//! use hushpanic::{PanicKind, suppress_unhandled};
//!
//! struct BrokerDisconnected;
//!
//! // Installed once, early in startup. A later unhandled
//! // `panic_any(BrokerDisconnected)` still terminates the process,
//! // but prints nothing.
//! suppress_unhandled([PanicKind::of::<BrokerDisconnected>()]);
//! ```
//!
//! # What this crate does *not* do
//!
//! - It does not catch panics or keep the process alive. A suppressed panic
//!   terminates the process exactly like an unsuppressed one; only the
//!   diagnostic text is withheld.
//! - It does not change the exit status. An unhandled panic on the main
//!   thread still exits with code 101.
//! - It cannot be undone. Installation permanently layers a filter over
//!   whatever hook was installed before it, for the remaining lifetime of
//!   the process.
//!
//! # Hook chaining
//!
//! [`suppress_unhandled`] captures the previously-installed panic hook and
//! delegates every non-matching panic to it, untouched. That previous hook
//! may be the standard library's default printer or a custom hook installed
//! earlier; either way its output for non-matching panics is byte-for-byte
//! what it would have produced without this crate in the chain.
//!
//! Calling [`suppress_unhandled`] more than once is legal and composes (each
//! call wraps the hook left by the one before), but suppression sets nest
//! rather than merge, so the usual pattern is a single call at startup.
//!
//! # Threading
//!
//! The panic hook slot is process-global. Install during single-threaded
//! startup, before spawning threads that might panic; an install that races
//! an in-flight panic on another thread can deliver that one panic to either
//! the old or the new hook.

mod kind;
mod suppress;

pub use crate::{kind::PanicKind, suppress::suppress_unhandled};
