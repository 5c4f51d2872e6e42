//! Slot availability calculator
//!
//! Enumerates candidate start times across business hours for a requested
//! duration and labels each one using the capacity model. Pure read path:
//! results are recomputed from scratch on every call and never cached.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::capacity;
use crate::config::SchedulingConfig;
use crate::domain::{BookingLedger, DomainResult, WorkspaceRegistry};

/// A candidate appointment start time. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub available: bool,
}

/// Computes the slot list for a date and duration
pub struct SlotAvailabilityCalculator {
    ledger: Arc<dyn BookingLedger>,
    workspaces: Arc<dyn WorkspaceRegistry>,
    config: SchedulingConfig,
}

impl SlotAvailabilityCalculator {
    pub fn new(
        ledger: Arc<dyn BookingLedger>,
        workspaces: Arc<dyn WorkspaceRegistry>,
        config: SchedulingConfig,
    ) -> Self {
        Self {
            ledger,
            workspaces,
            config,
        }
    }

    /// Candidate slots for `date`, labeled available/unavailable.
    ///
    /// Past dates and dates beyond the look-ahead horizon yield an empty
    /// list (a normal UI state, not an error). An invalid duration is
    /// rejected before any ledger access.
    pub async fn availability(
        &self,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> DomainResult<Vec<Slot>> {
        self.availability_as_of(Utc::now().date_naive(), date, duration_minutes)
            .await
    }

    /// Like [`availability`](Self::availability) with an explicit "today"
    /// for the past/horizon window check.
    pub async fn availability_as_of(
        &self,
        today: NaiveDate,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> DomainResult<Vec<Slot>> {
        let duration = self.config.validated_duration(duration_minutes)?;

        if date < today || date > today + Duration::days(self.config.lookahead_days) {
            return Ok(Vec::new());
        }

        let capacity = self.workspaces.active_capacity().await?;
        let existing = self.ledger.intervals_for_date(date).await?;

        let open = date.and_time(self.config.open_time);
        let close = date.and_time(self.config.close_time);
        let step = self.config.slot_step();

        let mut slots = Vec::new();
        let mut start = open;
        // Last candidate must satisfy start + duration <= close exactly;
        // nothing spills past closing.
        while start + duration <= close {
            let available = capacity::fits(start, start + duration, &existing, capacity);
            slots.push(Slot { start, available });
            start += step;
        }

        debug!(
            %date,
            duration_minutes,
            capacity,
            total = slots.len(),
            free = slots.iter().filter(|s| s.available).count(),
            "availability computed"
        );
        Ok(slots)
    }
}

// ── Tests ──────────────────────────────────────────────────────
