/// Default base URL of the article service.
pub const DEFAULT_BASE_URL: &str = "https://crimearticle.net/article-service/news";

/// Seed keywords used to widen the title pool at index build time.
pub const DEFAULT_SEED_KEYWORDS: &[&str] = &["성폭행", "사기", "방화", "살인"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSourceConfig {
    base_url: String,
    seed_keywords: Vec<String>,
}

impl ArticleSourceConfig {
    pub fn new(base_url: Option<String>, seed_keywords: Option<Vec<String>>) -> Self {
        let base_url = sanitize_base_url(base_url);
        let seed_keywords = seed_keywords
            .filter(|seeds| !seeds.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_SEED_KEYWORDS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Self {
            base_url,
            seed_keywords,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn seed_keywords(&self) -> &[String] {
        &self.seed_keywords
    }

    /// The URL list queried at index build: the unfiltered feed plus one
    /// keyword-filtered feed per seed.
    pub fn source_urls(&self) -> Vec<String> {
        let mut urls = Vec::with_capacity(self.seed_keywords.len() + 1);
        urls.push(self.base_url.clone());
        for seed in &self.seed_keywords {
            urls.push(format!(
                "{}?keyword={}",
                self.base_url,
                urlencoding::encode(seed)
            ));
        }
        urls
    }
}

impl Default for ArticleSourceConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn sanitize_base_url(base_url: Option<String>) -> String {
    base_url
        .and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.trim_end_matches('/').to_string())
            }
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
