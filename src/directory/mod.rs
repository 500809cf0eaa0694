//! Queryable directories over the ingested datasets.

pub mod municipalities;
pub mod postal;
pub mod streets;

pub use municipalities::MunicipalityDirectory;
pub use postal::PostalDirectory;
pub use streets::StreetDirectory;
