//! openmun-geodata - typed access to official Swiss reference datasets
//!
//! This library packages the Swiss government reference datasets (BFS
//! country codes, postal localities, the federal street directory and the
//! municipality history) into queryable, read-only directories, with
//! binaries that regenerate the data from the upstream sources.

pub mod countries;
pub mod directory;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod source;

pub use directory::{MunicipalityDirectory, PostalDirectory, StreetDirectory};
pub use error::{GeoError, Result};
pub use models::{AdminLevel, Country, Municipality, PostalLocality, RecordType, Street};
pub use source::SourceOptions;
