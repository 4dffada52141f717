//! CLI-only commands: config info and a one-shot models listing.
//!
//! These run without starting the HTTP server and produce plain text output.

use crate::core::bedrock::BedrockSource;
use crate::core::config::Config;
use crate::core::models::{self, Clock, ModelCatalog, ModelRecord, SystemClock};

/// Run the `config` command: display resolved region, bind address, and cache TTL.
pub fn run_config(config: &Config) {
    println!("Region:        {}", config.region);
    println!("Bind address:  {}", config.bind_addr);
    println!("Cache TTL:     {}s", config.cache_ttl.as_secs());
    println!("Max attempts:  {}", config.max_attempts);
}

fn format_timestamp(secs: i64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_opt(secs, 0)
        .single()
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Render the catalog as an aligned table, filtered by `query`.
pub fn render_table(catalog: &ModelCatalog, query: Option<&str>) -> String {
    let filtered: Vec<&ModelRecord> = models::filter_models(&catalog.data, query.unwrap_or(""));
    if filtered.is_empty() {
        return "No models found.\n".to_string();
    }

    let id_w = filtered
        .iter()
        .map(|m| m.id.len())
        .max()
        .unwrap_or(20)
        .max(20);

    let mut out = format!("{:<id_w$}  {:<16}  {}\n", "ID", "Created", "Owner");
    out.push_str(&format!("{}  {}  -----\n", "-".repeat(id_w), "-".repeat(16)));
    for m in &filtered {
        out.push_str(&format!(
            "{:<id_w$}  {:<16}  {}\n",
            m.id,
            format_timestamp(m.created),
            m.owned_by
        ));
    }
    out.push_str(&format!("\n{} model(s) listed\n", filtered.len()));
    out
}

/// Keep only records matching `query`, preserving catalog order.
pub fn filter_catalog(catalog: &ModelCatalog, query: Option<&str>) -> ModelCatalog {
    let data = models::filter_models(&catalog.data, query.unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    ModelCatalog::from_records(data)
}

/// Run the `models` command: aggregate both listings once and print them.
pub async fn run_models(
    config: &Config,
    query: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = BedrockSource::from_config(config).await;
    let catalog = models::aggregate(&source, SystemClock.now()).await?;

    if json {
        let filtered = filter_catalog(&catalog, query);
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else {
        print!("{}", render_table(&catalog, query));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ModelCatalog {
        ModelCatalog::from_records(vec![
            ModelRecord::bedrock("anthropic.claude-v2", 1_722_513_600),
            ModelRecord::bedrock("us.anthropic.claude-v2", 1_722_513_600),
            ModelRecord::bedrock("amazon.titan-text-express-v1", 0),
        ])
    }

    #[test]
    fn table_lists_all_models() {
        let out = render_table(&catalog(), None);
        assert!(out.starts_with("ID"));
        assert!(out.contains("amazon.titan-text-express-v1"));
        assert!(out.contains("2024-08-01 12:00"));
        assert!(out.ends_with("3 model(s) listed\n"));
    }

    #[test]
    fn table_applies_query() {
        let out = render_table(&catalog(), Some("claude"));
        assert!(!out.contains("titan"));
        assert!(out.contains("2 model(s) listed"));
    }

    #[test]
    fn json_catalog_applies_query() {
        let filtered = filter_catalog(&catalog(), Some("CLAUDE"));
        let ids: Vec<_> = filtered.data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["anthropic.claude-v2", "us.anthropic.claude-v2"]);
        assert_eq!(filtered.object, "list");

        assert_eq!(filter_catalog(&catalog(), None), catalog());
    }

    #[test]
    fn table_without_matches() {
        assert_eq!(render_table(&catalog(), Some("llama")), "No models found.\n");
    }
}
