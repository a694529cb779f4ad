//! Classifiers for panic payloads.

use std::{
    any::{Any, TypeId, type_name},
    fmt,
    panic::Location,
};

/// A classifier deciding whether a specific panic payload belongs to a kind.
///
/// A kind is either a *type tag* ([`PanicKind::of`]), matching every payload
/// whose concrete type is `T`, or an arbitrary *predicate*
/// ([`PanicKind::matching`]) over the type-erased payload. Membership testing
/// is a pure function of the payload: it has no side effects and never fails,
/// so duplicate kinds in a suppression set are harmless.
///
/// # Examples
///
/// Match a dedicated payload type raised with [`std::panic::panic_any`]:
///
/// ```rust
/// use hushpanic::PanicKind;
///
/// struct WatchdogTimeout;
///
/// let kind = PanicKind::of::<WatchdogTimeout>();
/// ```
///
/// Match message panics by content:
///
/// ```rust
/// use hushpanic::PanicKind;
///
/// let kind = PanicKind::matching(|payload| {
///     payload
///         .downcast_ref::<&str>()
///         .is_some_and(|message| message.starts_with("deadline elapsed"))
/// });
/// ```
pub struct PanicKind {
    pub(crate) matcher: Matcher,
    registered_at: &'static Location<'static>,
}

pub(crate) enum Matcher {
    Type {
        id: TypeId,
        name: &'static str,
    },
    Predicate(Box<dyn Fn(&(dyn Any + Send)) -> bool + Send + Sync>),
}

impl PanicKind {
    /// Creates a kind matching payloads whose concrete type is `T`.
    ///
    /// This matches the payload handed to [`std::panic::panic_any`]. Note
    /// that `panic!` with a literal produces a `&'static str` payload and
    /// `panic!` with format arguments produces a `String`, so a type-tag
    /// kind for one of those types would match *every* such message panic;
    /// use [`PanicKind::matching`] to discriminate messages by content.
    #[track_caller]
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            matcher: Matcher::Type {
                id: TypeId::of::<T>(),
                name: type_name::<T>(),
            },
            registered_at: Location::caller(),
        }
    }

    /// Creates a kind from an arbitrary membership test on the payload.
    ///
    /// The predicate must be cheap and infallible: it runs inside the panic
    /// hook, after the panic has already escaped all handling.
    #[track_caller]
    #[must_use]
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&(dyn Any + Send)) -> bool + Send + Sync + 'static,
    {
        Self {
            matcher: Matcher::Predicate(Box::new(predicate)),
            registered_at: Location::caller(),
        }
    }

    pub(crate) fn matches(&self, payload: &(dyn Any + Send)) -> bool {
        match &self.matcher {
            Matcher::Type { id, .. } => payload.type_id() == *id,
            Matcher::Predicate(predicate) => predicate(payload),
        }
    }
}

impl fmt::Debug for PanicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matcher {
            Matcher::Type { name, .. } => write!(
                f,
                "PanicKind for payload type {} registered at {}:{}",
                name,
                self.registered_at.file(),
                self.registered_at.line()
            ),
            Matcher::Predicate(_) => write!(
                f,
                "PanicKind predicate registered at {}:{}",
                self.registered_at.file(),
                self.registered_at.line()
            ),
        }
    }
}
