//! In-memory storage implementation
//!
//! Backs the repository traits with `DashMap`s for development and tests.
//! Note the per-day admission serialization lives in the application layer,
//! not here; these stores only guarantee per-operation consistency.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use dashmap::DashMap;

use crate::domain::{
    Booking, BookingLedger, DomainError, DomainResult, ServiceCatalog, ServiceOffering, Workspace,
    WorkspaceRegistry,
};

/// In-memory booking ledger
pub struct InMemoryBookingLedger {
    bookings: DashMap<i32, Booking>,
    id_counter: AtomicI32,
}

impl InMemoryBookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryBookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingLedger for InMemoryBookingLedger {
    async fn insert(&self, booking: Booking) -> DomainResult<()> {
        if self.bookings.contains_key(&booking.id) {
            return Err(DomainError::Storage(format!(
                "booking {} already exists",
                booking.id
            )));
        }
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        if !self.bookings.contains_key(&booking.id) {
            return Err(DomainError::BookingNotFound(booking.id));
        }
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn intervals_for_date(&self, date: NaiveDate) -> DomainResult<Vec<Booking>> {
        let mut intervals: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.date == date && b.occupies_capacity())
            .map(|b| b.clone())
            .collect();
        intervals.sort_by_key(|b| b.start);
        Ok(intervals)
    }

    async fn next_id(&self) -> i32 {
        self.id_counter.fetch_add(1, Ordering::SeqCst)
    }
}

/// In-memory workspace registry
pub struct InMemoryWorkspaceRegistry {
    workspaces: DashMap<i32, Workspace>,
}

impl InMemoryWorkspaceRegistry {
    pub fn new() -> Self {
        Self {
            workspaces: DashMap::new(),
        }
    }
}

impl Default for InMemoryWorkspaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkspaceRegistry for InMemoryWorkspaceRegistry {
    async fn active_capacity(&self) -> DomainResult<usize> {
        Ok(self.workspaces.iter().filter(|w| w.is_active).count())
    }

    async fn save(&self, workspace: Workspace) -> DomainResult<()> {
        self.workspaces.insert(workspace.id, workspace);
        Ok(())
    }

    async fn set_active(&self, id: i32, active: bool) -> DomainResult<()> {
        if let Some(mut workspace) = self.workspaces.get_mut(&id) {
            workspace.is_active = active;
            Ok(())
        } else {
            Err(DomainError::WorkspaceNotFound(id))
        }
    }

    async fn list(&self) -> DomainResult<Vec<Workspace>> {
        let mut all: Vec<Workspace> = self.workspaces.iter().map(|w| w.clone()).collect();
        all.sort_by_key(|w| w.id);
        Ok(all)
    }
}

/// In-memory service catalog
pub struct InMemoryServiceCatalog {
    services: DashMap<i32, ServiceOffering>,
}

impl InMemoryServiceCatalog {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }
}

impl Default for InMemoryServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceCatalog for InMemoryServiceCatalog {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceOffering>> {
        Ok(self.services.get(&id).map(|s| s.clone()))
    }

    async fn total_duration(&self, service_ids: &[i32]) -> DomainResult<Duration> {
        let mut total = Duration::zero();
        for &id in service_ids {
            let service = self
                .services
                .get(&id)
                .ok_or(DomainError::ServiceNotFound(id))?;
            if !service.is_active {
                return Err(DomainError::ServiceNotFound(id));
            }
            total = total + service.duration();
        }
        Ok(total)
    }

    async fn save(&self, service: ServiceOffering) -> DomainResult<()> {
        self.services.insert(service.id, service);
        Ok(())
    }

    async fn list_active(&self) -> DomainResult<Vec<ServiceOffering>> {
        let mut active: Vec<ServiceOffering> = self
            .services
            .iter()
            .filter(|s| s.is_active)
            .map(|s| s.clone())
            .collect();
        active.sort_by_key(|s| s.id);
        Ok(active)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
    }

    fn booking_at(id: i32, h: u32, m: u32) -> Booking {
        let start = day().and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        Booking::new(id, day(), start, Duration::minutes(60), Uuid::new_v4())
    }

    #[tokio::test]
    async fn ledger_rejects_duplicate_ids() {
        let ledger = InMemoryBookingLedger::new();
        ledger.insert(booking_at(1, 9, 0)).await.unwrap();
        assert!(matches!(
            ledger.insert(booking_at(1, 10, 0)).await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn ledger_returns_day_intervals_sorted_without_cancelled() {
        let ledger = InMemoryBookingLedger::new();
        ledger.insert(booking_at(1, 11, 0)).await.unwrap();
        ledger.insert(booking_at(2, 9, 0)).await.unwrap();
        let mut cancelled = booking_at(3, 10, 0);
        cancelled.cancel().unwrap();
        ledger.insert(cancelled).await.unwrap();
        // A booking on another day is invisible here
        let other_day = day() + Duration::days(1);
        let start = other_day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        ledger
            .insert(Booking::new(4, other_day, start, Duration::minutes(30), Uuid::new_v4()))
            .await
            .unwrap();

        let intervals = ledger.intervals_for_date(day()).await.unwrap();
        assert_eq!(intervals.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn ledger_update_requires_existing_booking() {
        let ledger = InMemoryBookingLedger::new();
        assert!(matches!(
            ledger.update(booking_at(7, 9, 0)).await,
            Err(DomainError::BookingNotFound(7))
        ));
    }

    #[tokio::test]
    async fn next_id_is_monotonic() {
        let ledger = InMemoryBookingLedger::new();
        let a = ledger.next_id().await;
        let b = ledger.next_id().await;
        assert!(b > a);
    }

    #[tokio::test]
    async fn registry_counts_only_active_workspaces() {
        let registry = InMemoryWorkspaceRegistry::new();
        registry.save(Workspace::new(1, "Bay 1")).await.unwrap();
        registry.save(Workspace::new(2, "Bay 2")).await.unwrap();
        assert_eq!(registry.active_capacity().await.unwrap(), 2);

        registry.set_active(2, false).await.unwrap();
        assert_eq!(registry.active_capacity().await.unwrap(), 1);

        assert!(matches!(
            registry.set_active(9, false).await,
            Err(DomainError::WorkspaceNotFound(9))
        ));
    }

    #[tokio::test]
    async fn catalog_sums_durations_and_rejects_inactive() {
        let catalog = InMemoryServiceCatalog::new();
        catalog
            .save(ServiceOffering::new(1, "Oil change", 30))
            .await
            .unwrap();
        catalog
            .save(ServiceOffering::new(2, "Alignment", 60))
            .await
            .unwrap();

        let total = catalog.total_duration(&[1, 2]).await.unwrap();
        assert_eq!(total, Duration::minutes(90));

        let mut retired = ServiceOffering::new(3, "Carburetor tune", 120);
        retired.is_active = false;
        catalog.save(retired).await.unwrap();
        assert!(matches!(
            catalog.total_duration(&[1, 3]).await,
            Err(DomainError::ServiceNotFound(3))
        ));
        assert!(matches!(
            catalog.total_duration(&[42]).await,
            Err(DomainError::ServiceNotFound(42))
        ));
        assert_eq!(catalog.list_active().await.unwrap().len(), 2);
    }
}
