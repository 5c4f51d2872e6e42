//! Domain errors

use thiserror::Error;

use super::booking::BookingStatus;

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Requested duration is non-positive or exceeds the business-hours span
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The requested slot no longer fits within capacity
    #[error("Slot is no longer available")]
    SlotUnavailable,

    /// Booking not found
    #[error("Booking not found: {0}")]
    BookingNotFound(i32),

    /// Service offering not found or inactive
    #[error("Service not found: {0}")]
    ServiceNotFound(i32),

    /// Workspace not found
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(i32),

    /// Booking is in a terminal state and cannot change state
    #[error("Booking {booking_id} is {status} and cannot change state")]
    InvalidState {
        booking_id: i32,
        status: BookingStatus,
    },

    /// Storage/repository error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is malformed or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
