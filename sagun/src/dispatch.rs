/// Path of the results view the dispatch navigates to.
const SEARCH_RESULT_PATH: &str = "/search-result";

/// A committed search: the keyword the user confirmed plus whatever was in
/// the date filter at that moment. The date is passed through verbatim and
/// never validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub date: String,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            date: date.into(),
        }
    }

    /// Query string for the results route: the keyword URL-encoded, the date
    /// appended literally and only when non-empty.
    pub fn query_string(&self) -> String {
        let mut query = format!("?keyword={}", urlencoding::encode(&self.keyword));
        if !self.date.is_empty() {
            query.push_str("&date=");
            query.push_str(&self.date);
        }
        query
    }

    pub fn route_path(&self) -> String {
        format!("{}{}", SEARCH_RESULT_PATH, self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_url_encoded() {
        let request = SearchRequest::new("사기", "");
        assert_eq!(request.query_string(), "?keyword=%EC%82%AC%EA%B8%B0");
    }

    #[test]
    fn date_is_appended_literally_when_present() {
        let request = SearchRequest::new("살인", "2026-08-30");
        assert_eq!(
            request.query_string(),
            "?keyword=%EC%82%B4%EC%9D%B8&date=2026-08-30"
        );
    }

    #[test]
    fn empty_date_is_omitted() {
        let request = SearchRequest::new("arson", "");
        assert_eq!(request.query_string(), "?keyword=arson");
    }

    #[test]
    fn route_path_targets_the_results_view() {
        let request = SearchRequest::new("fraud", "2026-01-01");
        assert_eq!(
            request.route_path(),
            "/search-result?keyword=fraud&date=2026-01-01"
        );
    }
}
