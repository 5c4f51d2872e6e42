//! Admission controller
//!
//! Converts a "book this slot" request into an at-most-once,
//! capacity-respecting write. The check-then-insert sequence for a given
//! calendar day runs under a per-date mutex, so two concurrent requests
//! cannot both win the last unit of capacity. Different dates never
//! contend.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::capacity;
use crate::config::SchedulingConfig;
use crate::domain::{Booking, BookingLedger, DomainError, DomainResult, WorkspaceRegistry};

/// Serializes check-then-insert per calendar day
pub struct AdmissionController {
    ledger: Arc<dyn BookingLedger>,
    workspaces: Arc<dyn WorkspaceRegistry>,
    config: SchedulingConfig,
    day_locks: DashMap<NaiveDate, Arc<Mutex<()>>>,
}

impl AdmissionController {
    pub fn new(
        ledger: Arc<dyn BookingLedger>,
        workspaces: Arc<dyn WorkspaceRegistry>,
        config: SchedulingConfig,
    ) -> Self {
        Self {
            ledger,
            workspaces,
            config,
            day_locks: DashMap::new(),
        }
    }

    fn day_lock(&self, date: NaiveDate) -> Arc<Mutex<()>> {
        self.day_locks
            .entry(date)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Admit a booking for `[start, start + duration)` on `date`.
    ///
    /// The day's intervals are re-read fresh under the per-date lock — a
    /// client-cached availability snapshot is never trusted. A losing
    /// request gets [`DomainError::SlotUnavailable`] immediately; retry
    /// policy belongs to the caller.
    pub async fn admit(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        duration_minutes: i64,
        reference_id: Uuid,
    ) -> DomainResult<Booking> {
        let duration = self.config.validated_duration(duration_minutes)?;

        let start_at = date.and_time(start);
        let end_at = start_at + duration;

        // Bookable window and business-hours checks before taking the lock
        let today = Utc::now().date_naive();
        if date < today || date > today + Duration::days(self.config.lookahead_days) {
            return Err(DomainError::SlotUnavailable);
        }
        if start < self.config.open_time || end_at > date.and_time(self.config.close_time) {
            return Err(DomainError::SlotUnavailable);
        }

        let lock = self.day_lock(date);
        let _guard = lock.lock().await;

        // Atomic unit: fresh read, capacity check, insert
        let capacity = self.workspaces.active_capacity().await?;
        let existing = self.ledger.intervals_for_date(date).await?;
        if !capacity::fits(start_at, end_at, &existing, capacity) {
            warn!(%date, %start, duration_minutes, "admission lost to capacity");
            return Err(DomainError::SlotUnavailable);
        }

        let id = self.ledger.next_id().await;
        let booking = Booking::new(id, date, start_at, duration, reference_id);
        self.ledger.insert(booking.clone()).await?;

        info!(booking_id = id, %date, %start, duration_minutes, "booking admitted");
        Ok(booking)
    }

    /// Cancel a pending booking. Unlocked write: cancellation only frees
    /// capacity, it can never overcommit it. Idempotent on an
    /// already-cancelled booking.
    pub async fn cancel(&self, booking_id: i32) -> DomainResult<Booking> {
        let mut booking = self
            .ledger
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;
        booking.cancel()?;
        self.ledger.update(booking.clone()).await?;
        info!(booking_id, "booking cancelled");
        Ok(booking)
    }

    /// Mark a pending booking's service as completed
    pub async fn finalize(&self, booking_id: i32) -> DomainResult<Booking> {
        let mut booking = self
            .ledger
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::BookingNotFound(booking_id))?;
        booking.finalize()?;
        self.ledger.update(booking.clone()).await?;
        info!(booking_id, "booking finalized");
        Ok(booking)
    }
}

// ── Tests ──────────────────────────────────────────────────────
