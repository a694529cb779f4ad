//! Installation of the suppressing panic hook.

use std::{
    any::{Any, TypeId},
    panic::{self, PanicHookInfo},
};

use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;

use crate::kind::{Matcher, PanicKind};

/// The kinds captured by one `suppress_unhandled` call.
///
/// Immutable once built: type-tag kinds collapse into a `TypeId` set for a
/// single-lookup membership test, predicate kinds are tried in the order they
/// were supplied. Owned exclusively by the hook closure that captured it.
struct SuppressionSet {
    type_ids: HashSet<TypeId, FxBuildHasher>,
    predicates: Box<[PanicKind]>,
}

impl SuppressionSet {
    fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = PanicKind>,
    {
        let mut type_ids = HashSet::with_hasher(FxBuildHasher);
        let mut predicates = Vec::new();
        for kind in kinds {
            match &kind.matcher {
                Matcher::Type { id, .. } => {
                    type_ids.insert(*id);
                }
                Matcher::Predicate(_) => predicates.push(kind),
            }
        }
        Self {
            type_ids,
            predicates: predicates.into_boxed_slice(),
        }
    }

    fn contains(&self, payload: &(dyn Any + Send)) -> bool {
        self.type_ids.contains(&payload.type_id())
            || self.predicates.iter().any(|kind| kind.matches(payload))
    }
}

/// Silences the diagnostics of unhandled panics matching `kinds`.
///
/// Replaces the process-wide panic hook with one that forwards every
/// non-matching panic, untouched, to the hook that was installed before this
/// call — the standard library's default printer, or any custom hook layered
/// on earlier. A matching panic produces no diagnostic at all; in both cases
/// the runtime's termination behavior and exit status are exactly what they
/// were before the call.
///
/// ```rust
/// use hushpanic::{PanicKind, suppress_unhandled};
///
/// struct OperatorAbort;
///
/// suppress_unhandled([PanicKind::of::<OperatorAbort>()]);
/// ```
///
/// ```no_run
/// use hushpanic::{PanicKind, suppress_unhandled};
///
/// struct OperatorAbort;
///
/// suppress_unhandled([PanicKind::of::<OperatorAbort>()]);
///
/// // Terminates the process with exit code 101, printing nothing.
/// std::panic::panic_any(OperatorAbort);
/// ```
///
/// This cannot fail and cannot be undone. An empty `kinds` is legal and
/// suppresses nothing. Calling it again layers a second filter over the
/// first — the sets nest rather than merge — so a single call during
/// single-threaded startup is the intended usage; see the
/// [crate-level docs](crate#hook-chaining) for the chaining contract.
pub fn suppress_unhandled<I>(kinds: I)
where
    I: IntoIterator<Item = PanicKind>,
{
    let set = SuppressionSet::from_kinds(kinds);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        if set.contains(info.payload()) {
            return;
        }
        previous(info)
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Interrupt;
    struct Other;

    fn set_of(kinds: impl IntoIterator<Item = PanicKind>) -> SuppressionSet {
        SuppressionSet::from_kinds(kinds)
    }

    fn payload(value: impl Any + Send) -> Box<dyn Any + Send> {
        Box::new(value)
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = set_of([]);
        assert!(!set.contains(&*payload(Interrupt)));
        assert!(!set.contains(&*payload("boom")));
    }

    #[test]
    fn type_kinds_collapse_into_one_membership_test() {
        let set = set_of([
            PanicKind::of::<Interrupt>(),
            PanicKind::of::<Interrupt>(),
            PanicKind::of::<String>(),
        ]);
        assert_eq!(set.type_ids.len(), 2);
        assert!(set.contains(&*payload(Interrupt)));
        assert!(set.contains(&*payload(String::from("boom"))));
        assert!(!set.contains(&*payload(Other)));
    }

    #[test]
    fn predicates_are_tried_after_the_type_lookup() {
        let set = set_of([
            PanicKind::of::<Interrupt>(),
            PanicKind::matching(|p| p.downcast_ref::<u32>() == Some(&7)),
        ]);
        assert!(set.contains(&*payload(Interrupt)));
        assert!(set.contains(&*payload(7u32)));
        assert!(!set.contains(&*payload(8u32)));
    }
}
