//! Listing data: the record type, start-up loading, the immutable base
//! table and the filter predicates applied to it.

pub mod filter;
pub mod loader;
pub mod model;
pub mod table;

pub use filter::FilterParams;
pub use loader::{load_dataset, DataSource};
pub use model::{DayType, Listing};
pub use table::ListingTable;
