use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words that show up in almost every headline and carry no search value.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Korean connectives and filler common in headlines
        "그리고", "하지만", "있는", "없는", "대한", "관련", "위한", "통해", "따른", "오늘",
        "지난", "이번", "최근", "결국", "또한",
        // English filler for mixed-language titles
        "the", "a", "an", "of", "and", "to", "in", "for", "on",
    ]
    .into_iter()
    .collect()
});

/// Extract candidate search keywords from article titles.
///
/// Pure and deterministic: whitespace tokens with punctuation trimmed from
/// both edges, tokens shorter than two characters and stopwords dropped,
/// first-seen order preserved, duplicates removed.
pub fn extract_keywords_from_titles<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();

    for title in titles {
        for token in title.as_ref().split_whitespace() {
            let token = token.trim_matches(|c: char| !c.is_alphanumeric());
            if token.chars().count() < 2 {
                continue;
            }
            if STOPWORDS.contains(token) {
                continue;
            }
            if seen.insert(token.to_string()) {
                keywords.push(token.to_string());
            }
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_keep_first_seen_order() {
        let titles = ["사기 조직 검거", "방화 사건 발생"];
        assert_eq!(
            extract_keywords_from_titles(&titles),
            vec!["사기", "조직", "검거", "방화", "사건", "발생"]
        );
    }

    #[test]
    fn duplicate_tokens_appear_once() {
        let titles = ["사기 혐의", "사기 피해 혐의"];
        assert_eq!(
            extract_keywords_from_titles(&titles),
            vec!["사기", "혐의", "피해"]
        );
    }

    #[test]
    fn punctuation_is_trimmed_from_token_edges() {
        let titles = ["'살인' 혐의, 검거…"];
        let keywords = extract_keywords_from_titles(&titles);
        assert!(keywords.contains(&"살인".to_string()));
        assert!(keywords.contains(&"혐의".to_string()));
    }

    #[test]
    fn short_tokens_and_stopwords_are_dropped() {
        let titles = ["이 사건 관련 the 보도"];
        assert_eq!(extract_keywords_from_titles(&titles), vec!["사건", "보도"]);
    }

    #[test]
    fn blank_titles_contribute_nothing() {
        let titles = ["", "   "];
        assert!(extract_keywords_from_titles(&titles).is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let titles = ["방화 용의자 검거", "사기 수법 공개"];
        assert_eq!(
            extract_keywords_from_titles(&titles),
            extract_keywords_from_titles(&titles)
        );
    }
}
