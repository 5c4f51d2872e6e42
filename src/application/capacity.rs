//! Capacity model: interval sweep over a day's bookings
//!
//! Decides whether adding a candidate interval to the day's existing
//! bookings would exceed workspace capacity at any instant. Pure functions
//! of their inputs; no side effects.

use chrono::NaiveDateTime;

use crate::domain::Booking;

/// Peak number of capacity-occupying bookings at any instant inside the
/// half-open window `[window_start, window_end)`.
///
/// Event sweep rather than a per-minute scan: each overlapping interval is
/// clamped to the window and contributes a `+1` event at its (clamped)
/// start and a `-1` event at its (clamped) end. At equal timestamps the
/// `-1` is processed first, so an interval ending at 10:00 never counts
/// against one starting at 10:00.
pub fn peak_concurrency(
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    existing: &[Booking],
) -> usize {
    let mut events: Vec<(NaiveDateTime, i32)> = Vec::new();
    for booking in existing.iter().filter(|b| b.occupies_capacity()) {
        if booking.overlaps(window_start, window_end) {
            events.push((booking.start.max(window_start), 1));
            events.push((booking.end.min(window_end), -1));
        }
    }
    events.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut current = 0i32;
    let mut peak = 0i32;
    for (_, delta) in events {
        current += delta;
        peak = peak.max(current);
    }
    peak as usize
}

/// Whether the candidate interval `[candidate_start, candidate_end)` fits:
/// the peak concurrency inside the candidate window, plus the candidate
/// itself, must not exceed `capacity`.
pub fn fits(
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
    existing: &[Booking],
    capacity: usize,
) -> bool {
    if capacity == 0 {
        return false;
    }
    peak_concurrency(candidate_start, candidate_end, existing) + 1 <= capacity
}

// ── Tests ──────────────────────────────────────────────────────
