//! Scheduling service facade
//!
//! The core-facing boundary consumed by transport adapters: availability
//! queries, guarded booking creation, cancellation and finalization.
//! Availability is a pure read and runs freely in parallel; creation goes
//! through the admission controller's per-date serialization point.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::application::admission::AdmissionController;
use crate::application::availability::{Slot, SlotAvailabilityCalculator};
use crate::config::SchedulingConfig;
use crate::domain::{Booking, BookingLedger, DomainResult, ServiceCatalog, WorkspaceRegistry};

/// Service facade over the scheduling core
pub struct SchedulingService {
    availability: SlotAvailabilityCalculator,
    admission: AdmissionController,
    ledger: Arc<dyn BookingLedger>,
    catalog: Arc<dyn ServiceCatalog>,
}

impl SchedulingService {
    pub fn new(
        ledger: Arc<dyn BookingLedger>,
        workspaces: Arc<dyn WorkspaceRegistry>,
        catalog: Arc<dyn ServiceCatalog>,
        config: SchedulingConfig,
    ) -> Self {
        Self {
            availability: SlotAvailabilityCalculator::new(
                ledger.clone(),
                workspaces.clone(),
                config.clone(),
            ),
            admission: AdmissionController::new(ledger.clone(), workspaces, config),
            ledger,
            catalog,
        }
    }

    /// Candidate slots for a date and explicit duration
    pub async fn get_availability(
        &self,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> DomainResult<Vec<Slot>> {
        self.availability.availability(date, duration_minutes).await
    }

    /// Candidate slots for a date and a selection of catalog services;
    /// the duration is the services' combined duration
    pub async fn get_availability_for_services(
        &self,
        date: NaiveDate,
        service_ids: &[i32],
    ) -> DomainResult<Vec<Slot>> {
        let duration = self.catalog.total_duration(service_ids).await?;
        self.availability
            .availability(date, duration.num_minutes())
            .await
    }

    /// Create a booking through guarded admission
    pub async fn create_booking(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        duration_minutes: i64,
        reference_id: Uuid,
    ) -> DomainResult<Booking> {
        self.admission
            .admit(date, start, duration_minutes, reference_id)
            .await
    }

    /// Cancel a booking (idempotent)
    pub async fn cancel_booking(&self, booking_id: i32) -> DomainResult<Booking> {
        self.admission.cancel(booking_id).await
    }

    /// Finalize a booking after the service is carried out
    pub async fn finalize_booking(&self, booking_id: i32) -> DomainResult<Booking> {
        self.admission.finalize(booking_id).await
    }

    /// Look up a booking by ID
    pub async fn get_booking(&self, booking_id: i32) -> DomainResult<Option<Booking>> {
        self.ledger.find_by_id(booking_id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, DomainError, ServiceOffering, Workspace};
    use crate::infrastructure::{
        InMemoryBookingLedger, InMemoryServiceCatalog, InMemoryWorkspaceRegistry,
    };
    use chrono::{Duration, Utc};

    fn tomorrow() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(1)
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    async fn service(capacity: usize) -> SchedulingService {
        let ledger = Arc::new(InMemoryBookingLedger::new());
        let registry = Arc::new(InMemoryWorkspaceRegistry::new());
        for i in 0..capacity {
            registry
                .save(Workspace::new(i as i32 + 1, format!("Bay {}", i + 1)))
                .await
                .unwrap();
        }
        let catalog = Arc::new(InMemoryServiceCatalog::new());
        catalog
            .save(ServiceOffering::new(1, "Oil change", 30))
            .await
            .unwrap();
        catalog
            .save(ServiceOffering::new(2, "Alignment", 60))
            .await
            .unwrap();
        SchedulingService::new(ledger, registry, catalog, SchedulingConfig::default())
    }

    #[tokio::test]
    async fn availability_reflects_created_booking() {
        let svc = service(1).await;
        svc.create_booking(tomorrow(), hm(9, 0), 60, Uuid::new_v4())
            .await
            .unwrap();

        let slots = svc.get_availability(tomorrow(), 60).await.unwrap();
        let at = |h: u32, m: u32| tomorrow().and_time(hm(h, m));
        assert!(!slots.iter().find(|s| s.start == at(9, 0)).unwrap().available);
        assert!(!slots.iter().find(|s| s.start == at(8, 30)).unwrap().available);
        assert!(slots.iter().find(|s| s.start == at(10, 0)).unwrap().available);
    }

    #[tokio::test]
    async fn service_selection_drives_duration() {
        let svc = service(1).await;
        // 30 + 60 = 90 minutes: last candidate is 17:30
        let slots = svc
            .get_availability_for_services(tomorrow(), &[1, 2])
            .await
            .unwrap();
        assert_eq!(
            slots.last().unwrap().start,
            tomorrow().and_time(hm(17, 30))
        );
    }

    #[tokio::test]
    async fn unknown_service_is_an_error() {
        let svc = service(1).await;
        assert!(matches!(
            svc.get_availability_for_services(tomorrow(), &[99]).await,
            Err(DomainError::ServiceNotFound(99))
        ));
    }

    #[tokio::test]
    async fn booking_lifecycle_via_facade() {
        let svc = service(1).await;
        let booking = svc
            .create_booking(tomorrow(), hm(9, 0), 60, Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(
            svc.get_booking(booking.id).await.unwrap().unwrap().status,
            BookingStatus::Pending
        );
        let finalized = svc.finalize_booking(booking.id).await.unwrap();
        assert_eq!(finalized.status, BookingStatus::Finalized);
        assert!(svc.get_booking(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cancelled_booking_reopens_availability() {
        let svc = service(1).await;
        let booking = svc
            .create_booking(tomorrow(), hm(9, 0), 60, Uuid::new_v4())
            .await
            .unwrap();
        let at_nine = tomorrow().and_time(hm(9, 0));

        let before = svc.get_availability(tomorrow(), 60).await.unwrap();
        assert!(!before.iter().find(|s| s.start == at_nine).unwrap().available);

        svc.cancel_booking(booking.id).await.unwrap();
        let after = svc.get_availability(tomorrow(), 60).await.unwrap();
        assert!(after.iter().find(|s| s.start == at_nine).unwrap().available);
    }
}
