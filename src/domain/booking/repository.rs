//! Booking ledger interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Booking;
use crate::domain::DomainResult;

/// Durable store of committed appointment intervals, partitioned by
/// calendar day. Pure read/write interface; no overlap logic lives here.
#[async_trait]
pub trait BookingLedger: Send + Sync {
    /// Save a new booking
    async fn insert(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> DomainResult<()>;

    /// Capacity-occupying intervals (`Pending` or `Finalized`) for a day,
    /// ordered by start time. Cancelled bookings are never returned.
    async fn intervals_for_date(&self, date: NaiveDate) -> DomainResult<Vec<Booking>>;

    /// Generate next booking ID
    async fn next_id(&self) -> i32;
}
