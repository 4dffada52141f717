//! In-memory [`ModelSource`] for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::CatalogError;
use super::upstream::{BaseModelRecord, CrossRegionProfileRecord, ModelSource};

#[derive(Default)]
pub struct FakeSource {
    pub base: Vec<BaseModelRecord>,
    pub profiles: Vec<CrossRegionProfileRecord>,
    fail_base: AtomicBool,
    fail_profiles: AtomicBool,
    base_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(base: Vec<BaseModelRecord>, profiles: Vec<CrossRegionProfileRecord>) -> Self {
        Self {
            base,
            profiles,
            ..Default::default()
        }
    }

    pub fn base(id: &str) -> BaseModelRecord {
        BaseModelRecord {
            model_id: Some(id.to_string()),
        }
    }

    pub fn profile(id: &str, arn: &str) -> CrossRegionProfileRecord {
        CrossRegionProfileRecord {
            inference_profile_id: Some(id.to_string()),
            inference_profile_arn: Some(arn.to_string()),
            created_at: None,
        }
    }

    pub fn fail_base(&self, fail: bool) {
        self.fail_base.store(fail, Ordering::SeqCst);
    }

    pub fn fail_profiles(&self, fail: bool) {
        self.fail_profiles.store(fail, Ordering::SeqCst);
    }

    /// Number of foundation-model listings requested so far.
    pub fn base_calls(&self) -> usize {
        self.base_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelSource for FakeSource {
    async fn list_base_models(&self) -> Result<Vec<BaseModelRecord>, CatalogError> {
        self.base_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_base.load(Ordering::SeqCst) {
            return Err(CatalogError::upstream("ListFoundationModels", "connection refused"));
        }
        Ok(self.base.clone())
    }

    async fn list_cross_region_profiles(
        &self,
    ) -> Result<Vec<CrossRegionProfileRecord>, CatalogError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_profiles.load(Ordering::SeqCst) {
            return Err(CatalogError::upstream("ListInferenceProfiles", "throttled"));
        }
        Ok(self.profiles.clone())
    }
}
