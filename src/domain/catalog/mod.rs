pub mod model;
pub mod repository;

pub use model::ServiceOffering;
pub use repository::ServiceCatalog;
