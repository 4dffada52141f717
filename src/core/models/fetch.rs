//! Aggregate both Bedrock listings into one deduplicated catalog.

use std::collections::HashSet;

use super::error::CatalogError;
use super::info::{ModelCatalog, ModelRecord};
use super::normalize::normalize;
use super::upstream::{ModelSource, UpstreamRecord};

/// Filter models by query (case-insensitive match on id or owner).
pub fn filter_models<'a>(models: &'a [ModelRecord], query: &str) -> Vec<&'a ModelRecord> {
    if query.is_empty() {
        return models.iter().collect();
    }
    let q = query.to_lowercase();
    models
        .iter()
        .filter(|m| m.id.to_lowercase().contains(&q) || m.owned_by.to_lowercase().contains(&q))
        .collect()
}

/// Drop records whose id was already seen, keeping the first occurrence in order.
pub fn dedup_by_id(records: Vec<ModelRecord>) -> Vec<ModelRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}

/// Build a fresh catalog from `source`. Never cached here.
///
/// Both listings are requested concurrently; base models always come first in
/// the output and win on id collisions. Any upstream failure aborts the run.
pub async fn aggregate<S>(source: &S, now: i64) -> Result<ModelCatalog, CatalogError>
where
    S: ModelSource + ?Sized,
{
    let (base_models, profiles) = tokio::try_join!(
        source.list_base_models(),
        source.list_cross_region_profiles()
    )?;
    log::debug!(
        "Fetched {} foundation models and {} cross-region profiles",
        base_models.len(),
        profiles.len()
    );

    let records: Vec<ModelRecord> = base_models
        .into_iter()
        .map(UpstreamRecord::from)
        .chain(profiles.into_iter().map(UpstreamRecord::from))
        .flat_map(|record| normalize(&record, now))
        .collect();

    let produced = records.len();
    let data = dedup_by_id(records);
    if data.len() < produced {
        log::debug!("Dropped {} duplicate model ids", produced - data.len());
    }
    Ok(ModelCatalog::from_records(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::testing::FakeSource;
    use crate::core::models::upstream::{BaseModelRecord, CrossRegionProfileRecord};

    const NOW: i64 = 1_760_000_000;

    fn ids(catalog: &ModelCatalog) -> Vec<&str> {
        catalog.data.iter().map(|m| m.id.as_str()).collect()
    }

    #[tokio::test]
    async fn base_models_then_profile_id_then_arn() {
        let source = FakeSource::new(
            vec![FakeSource::base("claude-v2")],
            vec![FakeSource::profile("us.claude-v2", "arn:aws:bedrock:us:us.claude-v2")],
        );
        let catalog = aggregate(&source, NOW).await.unwrap();
        assert_eq!(catalog.object, "list");
        assert_eq!(
            ids(&catalog),
            vec!["claude-v2", "us.claude-v2", "arn:aws:bedrock:us:us.claude-v2"]
        );
    }

    #[tokio::test]
    async fn base_model_wins_on_collision() {
        let mut source = FakeSource::new(
            vec![FakeSource::base("shared")],
            vec![CrossRegionProfileRecord {
                inference_profile_id: Some("shared".into()),
                inference_profile_arn: Some("arn:shared".into()),
                created_at: chrono::DateTime::from_timestamp(1_000, 0),
            }],
        );
        source.base.push(FakeSource::base("shared"));
        let catalog = aggregate(&source, NOW).await.unwrap();
        assert_eq!(ids(&catalog), vec!["shared", "arn:shared"]);
        assert_eq!(catalog.data[0].created, NOW);
        assert_eq!(catalog.data[1].created, 1_000);
    }

    #[tokio::test]
    async fn skips_records_without_identifiers() {
        let source = FakeSource::new(
            vec![BaseModelRecord { model_id: None }, FakeSource::base("titan")],
            vec![CrossRegionProfileRecord::default()],
        );
        let catalog = aggregate(&source, NOW).await.unwrap();
        assert_eq!(ids(&catalog), vec!["titan"]);
    }

    #[tokio::test]
    async fn failing_listing_aborts() {
        let source = FakeSource::new(vec![FakeSource::base("titan")], Vec::new());
        source.fail_profiles(true);
        let err = aggregate(&source, NOW).await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream { .. }));

        source.fail_profiles(false);
        source.fail_base(true);
        assert!(aggregate(&source, NOW).await.is_err());
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let records = vec![
            ModelRecord::bedrock("a", 1),
            ModelRecord::bedrock("b", 2),
            ModelRecord::bedrock("a", 3),
            ModelRecord::bedrock("c", 4),
            ModelRecord::bedrock("b", 5),
        ];
        let out = dedup_by_id(records);
        let pairs: Vec<_> = out.iter().map(|m| (m.id.as_str(), m.created)).collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn filter_empty_query_returns_all() {
        let models = vec![ModelRecord::bedrock("a", 0), ModelRecord::bedrock("b", 0)];
        assert_eq!(filter_models(&models, "").len(), 2);
    }

    #[test]
    fn filter_case_insensitive_on_id() {
        let models = vec![
            ModelRecord::bedrock("anthropic.claude-v2", 0),
            ModelRecord::bedrock("amazon.titan-text", 0),
        ];
        let out = filter_models(&models, "CLAUDE");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "anthropic.claude-v2");
    }

    #[test]
    fn filter_no_match_returns_empty() {
        let models = vec![ModelRecord::bedrock("amazon.titan-text", 0)];
        assert!(filter_models(&models, "xyz").is_empty());
    }
}
