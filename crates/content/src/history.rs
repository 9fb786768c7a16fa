//! Deduplication when merging a fetched message batch into held history.

use std::collections::HashSet;

use chatview_protocol::MessageEnvelope;

/// Drop every message from `result` whose id already appears in `history`.
///
/// Surviving messages keep their relative order; `history` is never touched.
/// A no-op when either side is empty.
pub fn filter_history_duplicates(result: &mut Vec<MessageEnvelope>, history: &[MessageEnvelope]) {
    if result.is_empty() || history.is_empty() {
        return;
    }
    let seen: HashSet<i64> = history.iter().map(|m| m.id).collect();
    result.retain(|m| !seen.contains(&m.id));
}
