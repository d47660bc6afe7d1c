use anyhow::Result;
use reqwest::{Client, Method};
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Anything that can produce article titles for a URL.
///
/// The index builder is generic over this trait so fetch-join behavior can be
/// tested with scripted in-memory sources.
pub trait TitleSource {
    fn fetch_titles(&self, url: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// HTTP client for the article service.
///
/// Requests carry no timeout and are never retried; a failed source is handled
/// by the caller's failure policy.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    client: Client,
}

impl ArticleClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("sagun")
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for ArticleClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleSource for ArticleClient {
    async fn fetch_titles(&self, url: &str) -> Result<Vec<String>> {
        let response = self.client.request(Method::GET, url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("article service error: {}", response.status());
        }

        let body: Value = response.json().await?;
        let titles = parse_titles(&body);
        debug!("fetched {} titles from {}", titles.len(), url);
        Ok(titles)
    }
}

/// Pull titles out of a `{ data: [{ title, ... }, ...] }` body.
///
/// Tolerant of a missing or null `data` field and of entries without a title;
/// those simply contribute nothing.
fn parse_titles(body: &Value) -> Vec<String> {
    let Some(entries) = body.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("title").and_then(Value::as_str))
        .filter(|title| !title.trim().is_empty())
        .map(|title| title.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_titles_reads_the_data_array() {
        let body = json!({
            "data": [
                { "title": "사기 조직 검거", "id": 1 },
                { "title": "방화 사건 발생", "id": 2 }
            ]
        });
        assert_eq!(
            parse_titles(&body),
            vec!["사기 조직 검거".to_string(), "방화 사건 발생".to_string()]
        );
    }

    #[test]
    fn parse_titles_tolerates_missing_data() {
        assert!(parse_titles(&json!({})).is_empty());
        assert!(parse_titles(&json!({ "data": null })).is_empty());
        assert!(parse_titles(&json!({ "data": "oops" })).is_empty());
    }

    #[test]
    fn parse_titles_skips_entries_without_a_title() {
        let body = json!({
            "data": [
                { "id": 1 },
                { "title": "   " },
                { "title": "살인 미수 보도" }
            ]
        });
        assert_eq!(parse_titles(&body), vec!["살인 미수 보도".to_string()]);
    }
}
