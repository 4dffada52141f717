//! Model catalog: upstream records, normalization, aggregation, and caching.

mod cache;
mod error;
mod fetch;
mod info;
mod normalize;
mod upstream;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{CatalogCache, Clock, DEFAULT_TTL, SystemClock};
pub use error::CatalogError;
pub use fetch::{aggregate, filter_models};
pub use info::{ModelCatalog, ModelRecord};
pub use upstream::{BaseModelRecord, CrossRegionProfileRecord, ModelSource};
