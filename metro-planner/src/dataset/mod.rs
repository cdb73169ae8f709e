//! Network datasets.
//!
//! A dataset is a JSON document listing station registrations and the
//! hops between them. The Delhi Metro dataset ships inside the crate; any
//! other network in the same shape can be loaded from disk.

mod error;
mod loader;
mod records;

pub use error::DatasetError;
pub use loader::{Dataset, LoadSummary, delhi_metro, load_path, load_str};
pub use records::{EdgeRecord, NetworkRecord, StationRecord};
