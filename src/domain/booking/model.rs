//! Booking domain entity

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Admitted, waiting for the service to be carried out
    Pending,
    /// Service completed by a worker
    Finalized,
    /// Cancelled by user or system
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Finalized => "Finalized",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Finalized" => Self::Finalized,
            _ => Self::Cancelled,
        }
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized | Self::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A committed appointment occupying one workspace for `[start, end)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking ID
    pub id: i32,
    /// Calendar day the booking belongs to
    pub date: NaiveDate,
    /// Start of the occupied interval
    pub start: NaiveDateTime,
    /// End of the occupied interval (exclusive)
    pub end: NaiveDateTime,
    /// Current status
    pub status: BookingStatus,
    /// Client-supplied reference (order, quotation, etc.)
    pub reference_id: Uuid,
    /// When the booking was admitted
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        id: i32,
        date: NaiveDate,
        start: NaiveDateTime,
        duration: Duration,
        reference_id: Uuid,
    ) -> Self {
        Self {
            id,
            date,
            start,
            end: start + duration,
            status: BookingStatus::Pending,
            reference_id,
            created_at: Utc::now(),
        }
    }

    /// Whether this booking counts against workspace capacity.
    /// Cancelled bookings never occupy capacity again.
    pub fn occupies_capacity(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Half-open interval test: `t` is inside `[start, end)`
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Half-open overlap with `[other_start, other_end)`.
    /// Back-to-back intervals (`end == start`) do not overlap.
    pub fn overlaps(&self, other_start: NaiveDateTime, other_end: NaiveDateTime) -> bool {
        self.start < other_end && self.end > other_start
    }

    /// Cancel this booking. Idempotent: cancelling an already-cancelled
    /// booking is a no-op. A finalized booking cannot be cancelled.
    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.status {
            BookingStatus::Pending | BookingStatus::Cancelled => {
                self.status = BookingStatus::Cancelled;
                Ok(())
            }
            BookingStatus::Finalized => Err(DomainError::InvalidState {
                booking_id: self.id,
                status: self.status,
            }),
        }
    }

    /// Mark the service as completed. Only valid from `Pending`.
    pub fn finalize(&mut self) -> DomainResult<()> {
        match self.status {
            BookingStatus::Pending => {
                self.status = BookingStatus::Finalized;
                Ok(())
            }
            _ => Err(DomainError::InvalidState {
                booking_id: self.id,
                status: self.status,
            }),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
