//! Upstream record shapes and the listing capability the catalog depends on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::CatalogError;

/// One entry of the foundation-model listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseModelRecord {
    pub model_id: Option<String>,
}

/// One entry of the system-defined (cross-region) inference profile listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossRegionProfileRecord {
    pub inference_profile_id: Option<String>,
    pub inference_profile_arn: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Either upstream shape, consumed by [`super::normalize::normalize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpstreamRecord {
    BaseModel(BaseModelRecord),
    CrossRegionProfile(CrossRegionProfileRecord),
}

impl From<BaseModelRecord> for UpstreamRecord {
    fn from(record: BaseModelRecord) -> Self {
        UpstreamRecord::BaseModel(record)
    }
}

impl From<CrossRegionProfileRecord> for UpstreamRecord {
    fn from(record: CrossRegionProfileRecord) -> Self {
        UpstreamRecord::CrossRegionProfile(record)
    }
}

/// Remote listings backing the catalog.
///
/// Implementations own transport concerns (credentials, region, retries).
/// `list_cross_region_profiles` returns the concatenation of every page in page
/// order; a failure on any page fails the whole call.
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn list_base_models(&self) -> Result<Vec<BaseModelRecord>, CatalogError>;

    async fn list_cross_region_profiles(
        &self,
    ) -> Result<Vec<CrossRegionProfileRecord>, CatalogError>;
}
