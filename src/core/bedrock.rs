//! Bedrock-backed [`ModelSource`]: foundation models and system-defined inference profiles.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrock::Client;
use aws_sdk_bedrock::error::DisplayErrorContext;
use aws_sdk_bedrock::types::InferenceProfileType;
use async_trait::async_trait;

use crate::core::config::Config;
use crate::core::models::{BaseModelRecord, CatalogError, CrossRegionProfileRecord, ModelSource};

const PROFILE_PAGE_SIZE: i32 = 1000;

pub struct BedrockSource {
    client: Client,
}

impl BedrockSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for the configured region. Credentials come from the default AWS chain.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
            .load()
            .await;
        log::debug!(
            "Bedrock client for region {} ({} attempts per call)",
            config.region,
            config.max_attempts
        );
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ModelSource for BedrockSource {
    async fn list_base_models(&self) -> Result<Vec<BaseModelRecord>, CatalogError> {
        let output = self
            .client
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| CatalogError::upstream("ListFoundationModels", DisplayErrorContext(&e)))?;

        Ok(output
            .model_summaries()
            .iter()
            .map(|summary| BaseModelRecord {
                model_id: Some(summary.model_id().to_string()),
            })
            .collect())
    }

    async fn list_cross_region_profiles(
        &self,
    ) -> Result<Vec<CrossRegionProfileRecord>, CatalogError> {
        let mut pages = self
            .client
            .list_inference_profiles()
            .type_equals(InferenceProfileType::SystemDefined)
            .max_results(PROFILE_PAGE_SIZE)
            .into_paginator()
            .send();

        let mut profiles = Vec::new();
        let mut page_count = 0usize;
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                CatalogError::upstream("ListInferenceProfiles", DisplayErrorContext(&e))
            })?;
            page_count += 1;
            profiles.extend(page.inference_profile_summaries().iter().map(|summary| {
                CrossRegionProfileRecord {
                    inference_profile_id: Some(summary.inference_profile_id().to_string()),
                    inference_profile_arn: Some(summary.inference_profile_arn().to_string()),
                    created_at: summary
                        .created_at()
                        .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
                }
            }));
        }
        log::debug!(
            "Walked {} inference profile page(s), {} profiles",
            page_count,
            profiles.len()
        );
        Ok(profiles)
    }
}
