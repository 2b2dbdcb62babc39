//! System Instruction
//!
//! The fixed persona prepended to every request, optionally extended by
//! the caller.

/// Korean news-summary persona sent with every request
pub const BASE_SYSTEM_TEXT: &str = "당신은 한국어로 답변하는 뉴스 요약/설명 도우미입니다. 주어진 기사 정보만 기반으로 답하고, 모르는 내용은 모른다고 말하세요.";

/// Marker placed between the base persona and a caller addendum
pub const EXTRA_SEPARATOR: &str = "\n\n추가 지시: ";

/// Composed system instruction text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction(String);

impl SystemInstruction {
    /// Compose the base persona with an optional addendum.
    ///
    /// An empty addendum counts as absent.
    pub fn compose(extra: Option<&str>) -> Self {
        match extra {
            Some(extra) if !extra.is_empty() => {
                Self(format!("{BASE_SYSTEM_TEXT}{EXTRA_SEPARATOR}{extra}"))
            }
            _ => Self(BASE_SYSTEM_TEXT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SystemInstruction {
    fn default() -> Self {
        Self::compose(None)
    }
}
