//! Local extractive brief
//!
//! Rough first-N-sentences summary for article text that may still carry
//! HTML from an RSS feed. No model involved.

use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_SENTENCES: usize = 2;

const SENTENCE_ENDINGS: [char; 6] = ['.', '!', '?', '。', '？', '！'];

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<.*?>").expect("tag pattern is valid"))
}

/// Strip tags and collapse whitespace
pub fn clean_text(text: &str) -> String {
    let stripped = tag_pattern().replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_sentences` sentences of the cleaned text.
///
/// Falls back to the cleaned text when it has no sentence content at all.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let cleaned = clean_text(text);

    let sentences: Vec<&str> = cleaned
        .split(&SENTENCE_ENDINGS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        return cleaned;
    }

    sentences
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_whitespace() {
        assert_eq!(
            clean_text("<p>삼성전자   <b>실적</b>\n발표</p>"),
            "삼성전자 실적 발표"
        );
    }

    #[test]
    fn test_keeps_first_sentences() {
        let text = "<a href=\"x\">첫 문장입니다.</a> 두 번째 문장! 세 번째 문장? 네 번째。";
        assert_eq!(summarize(text, 2), "첫 문장입니다 두 번째 문장");
        assert_eq!(summarize(text, 10), "첫 문장입니다 두 번째 문장 세 번째 문장 네 번째");
    }

    #[test]
    fn test_punctuation_only_falls_back_to_cleaned() {
        assert_eq!(summarize("<i>...</i>", DEFAULT_SENTENCES), "...");
        assert_eq!(summarize("", DEFAULT_SENTENCES), "");
    }
}
