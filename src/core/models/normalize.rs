//! Map upstream records onto [`ModelRecord`].

use super::info::ModelRecord;
use super::upstream::UpstreamRecord;

/// Normalize one upstream record into zero, one or two catalog records.
///
/// Base models carry no creation time, so they get `now`. A cross-region profile
/// yields its short id and its ARN as two independent records so either form can
/// be requested. Missing or empty identifiers produce nothing.
pub fn normalize(record: &UpstreamRecord, now: i64) -> Vec<ModelRecord> {
    match record {
        UpstreamRecord::BaseModel(base) => non_empty(&base.model_id)
            .map(|id| ModelRecord::bedrock(id, now))
            .into_iter()
            .collect(),
        UpstreamRecord::CrossRegionProfile(profile) => {
            let created = profile
                .created_at
                .map(|t| t.timestamp())
                .unwrap_or(now);
            [&profile.inference_profile_id, &profile.inference_profile_arn]
                .into_iter()
                .filter_map(non_empty)
                .map(|id| ModelRecord::bedrock(id, created))
                .collect()
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
