//! Service catalog interface

use async_trait::async_trait;
use chrono::Duration;

use super::model::ServiceOffering;
use crate::domain::DomainResult;

/// Catalog of bookable services. Supplies the duration input for
/// availability queries when the client selects services rather than an
/// explicit duration.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Find a service by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceOffering>>;

    /// Combined duration of the named services, in booking order.
    /// Unknown or inactive IDs are an error.
    async fn total_duration(&self, service_ids: &[i32]) -> DomainResult<Duration>;

    /// Register a service offering
    async fn save(&self, service: ServiceOffering) -> DomainResult<()>;

    /// All active service offerings
    async fn list_active(&self) -> DomainResult<Vec<ServiceOffering>>;
}
