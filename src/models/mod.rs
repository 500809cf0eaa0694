//! Typed records for the Swiss reference datasets.

pub mod country;
pub mod date;
pub mod municipality;
pub mod postal;
pub mod street;

pub use country::Country;
pub use municipality::{AdminLevel, Municipality, RecordType, SnapshotRow};
pub use postal::PostalLocality;
pub use street::Street;
