use crate::keyword::extract_keywords_from_titles;
use futures::future::join_all;
use sagun_articles::TitleSource;
use std::collections::HashSet;
use tracing::{debug, warn};

/// The deduplicated, ordered pool of keywords available for suggestion.
///
/// Immutable after construction. Matching is prefix-only and case-sensitive;
/// relaxing either is a stakeholder decision, not an implementation detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateIndex {
    keywords: Vec<String>,
}

impl CandidateIndex {
    /// Build an index from extracted keywords, dropping blanks and keeping
    /// the first occurrence of each duplicate.
    pub fn new(keywords: Vec<String>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            if keyword.trim().is_empty() {
                continue;
            }
            if seen.insert(keyword.clone()) {
                unique.push(keyword);
            }
        }
        Self { keywords: unique }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Up to `limit` keywords starting with `prefix`, in index order.
    pub fn prefix_matches(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|keyword| keyword.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// What to do when one of the title sources fails during an index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// A failed source is logged and contributes no titles.
    #[default]
    BestEffort,
    /// Any failure empties the whole build.
    AllOrNothing,
}

/// Builds a [`CandidateIndex`] from raw article titles.
///
/// Build failures never surface to the caller: the result degrades to an
/// empty index and the user simply sees no suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIndexBuilder {
    policy: FailurePolicy,
}

impl KeywordIndexBuilder {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Deduplicate titles by exact equality (first-seen order), then extract
    /// keywords.
    pub fn build<S: AsRef<str>>(&self, titles: &[S]) -> CandidateIndex {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut unique: Vec<&str> = Vec::with_capacity(titles.len());
        for title in titles {
            let title = title.as_ref();
            if seen.insert(title) {
                unique.push(title);
            }
        }

        let index = CandidateIndex::new(extract_keywords_from_titles(&unique));
        debug!(
            "built candidate index: {} titles -> {} keywords",
            unique.len(),
            index.len()
        );
        index
    }

    /// Fetch every URL concurrently, join, and build the index from the
    /// merged titles in URL order.
    ///
    /// No timeout, no retry. Per-source failures are resolved by the
    /// configured [`FailurePolicy`].
    pub async fn build_from_sources<S: TitleSource>(
        &self,
        source: &S,
        urls: &[String],
    ) -> CandidateIndex {
        let results = join_all(urls.iter().map(|url| source.fetch_titles(url))).await;

        let mut titles: Vec<String> = Vec::new();
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(batch) => titles.extend(batch),
                Err(err) => {
                    warn!("title source {url} failed: {err:#}");
                    if self.policy == FailurePolicy::AllOrNothing {
                        warn!("index build abandoned, suggestions disabled");
                        return CandidateIndex::default();
                    }
                }
            }
        }

        self.build(&titles)
    }
}
