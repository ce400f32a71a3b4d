//! Time-conflict detection.

use crate::event::Event;

/// Events in `pool` whose span intersects `candidate`'s on the same date.
///
/// Pool order is preserved. Any pool event sharing `candidate`'s id is skipped,
/// so an event being edited never conflicts with its stored copy.
pub fn find_overlaps<'a>(candidate: &Event, pool: &'a [Event]) -> Vec<&'a Event> {
    pool.iter()
        .filter(|existing| existing.id != candidate.id)
        .filter(|existing| candidate.overlaps(existing))
        .collect()
}
