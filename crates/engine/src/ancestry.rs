//! Ancestor resolution over the single-parent chain.
//!
//! An event's ancestry is `start -> parent -> parent -> ...`. The walk ends
//! at the self-parented root, at an id missing from the ledger, or at the
//! first repeated id. The last case only happens on a malformed ledger and
//! is logged.

use std::collections::HashSet;

use aurora_core::EventId;
use aurora_storage::Ledger;

/// Whether `candidate` appears on the parent chain of `start`.
///
/// Reflexive: `is_ancestor(ledger, x, x)` is true for every `x`, whether or
/// not `x` is stored.
pub fn is_ancestor(ledger: &Ledger, candidate: EventId, start: EventId) -> bool {
    let mut seen: HashSet<EventId> = HashSet::new();
    let mut current = start;

    loop {
        if current == candidate {
            return true;
        }
        seen.insert(current);

        let parent = match ledger.get(current) {
            Some(event) => event.parent,
            None => return false,
        };
        if parent == current {
            return false;
        }
        if seen.contains(&parent) {
            tracing::warn!(
                target: "aurora::ancestry",
                start = %start,
                at = %current,
                parent = %parent,
                "Ancestry cycle detected"
            );
            return false;
        }
        current = parent;
    }
}

/// The parent chain of `start`, `start` first.
///
/// Stops after the root, before an id missing from the ledger (which is
/// still included as the last element when it is `start` itself), or before
/// a repeated id.
pub fn ancestors(ledger: &Ledger, start: EventId) -> Vec<EventId> {
    let mut chain = vec![start];
    let mut seen: HashSet<EventId> = HashSet::new();
    seen.insert(start);
    let mut current = start;

    while let Some(event) = ledger.get(current) {
        let parent = event.parent;
        if parent == current || !ledger.contains(parent) {
            break;
        }
        if !seen.insert(parent) {
            tracing::warn!(
                target: "aurora::ancestry",
                start = %start,
                parent = %parent,
                "Ancestry cycle detected"
            );
            break;
        }
        chain.push(parent);
        current = parent;
    }
    chain
}
