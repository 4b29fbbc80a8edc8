//! Canonical lowercase token stream for mixed Korean/Latin text.
//!
//! Steps, in order: lowercase, URLs to a space, everything outside
//! `[a-z0-9가-힣\s]` to a space, whitespace collapsed, trimmed.
//! The output is a fixed point: cleaning it again changes nothing.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\.\S+").expect("URL pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9가-힣\s]+").expect("character class is valid"));

/// Stateless normalizer. Cheap to construct and share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, text: &str) -> String {
        clean(text)
    }

    pub fn clean_field(&self, text: Option<&str>) -> String {
        clean_field(text)
    }
}

/// Normalize a string.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let without_urls = URL.replace_all(&lowered, " ");
    let allowed: Cow<'_, str> = DISALLOWED.replace_all(&without_urls, " ");
    allowed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional cell. Absent input is treated as empty.
pub fn clean_field(text: Option<&str>) -> String {
    text.map(clean).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(clean("Samsung, ESG-Report!!"), "samsung esg report");
    }

    #[test]
    fn test_keeps_korean_syllables() {
        assert_eq!(clean("삼성전자, 탄소 배출량 감축!"), "삼성전자 탄소 배출량 감축");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            clean("see https://example.com/a?b=1 and www.news.kr/x today"),
            "see and today"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean("  a \t\n  b   "), "a b");
    }

    #[test]
    fn test_drops_non_korean_non_latin_scripts() {
        // Jamo and kanji fall outside the syllable block.
        assert_eq!(clean("ㅋㅋ 日本 abc"), "abc");
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert_eq!(clean_field(None), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for s in [
            "HTTP://X.COM hello",
            "http world",
            "Éco-friendly 친환경 경영!!",
            "www. dot",
            "  ",
        ] {
            let once = clean(s);
            assert_eq!(clean(&once), once, "input: {s:?}");
        }
    }
}
