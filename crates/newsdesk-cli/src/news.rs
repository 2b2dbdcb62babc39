//! Google News RSS search
//!
//! Fetches the newest articles for a keyword so they can be briefed locally.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Url};

pub const GOOGLE_NEWS_RSS_URL: &str = "https://news.google.com/rss/search";
pub const DEFAULT_MAX_RESULTS: usize = 10;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One feed entry, fields trimmed and empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published: String,
}

impl Article {
    /// Text to brief: the summary, or the title when the feed has none
    pub fn brief_source(&self) -> &str {
        if self.summary.is_empty() {
            &self.title
        } else {
            &self.summary
        }
    }
}

/// Search URL for `query`, e.g. `hl=kr-ko&gl=KR&ceid=KR:ko`
pub fn build_rss_url(base: &str, query: &str, lang: &str, region: &str) -> Result<Url> {
    let hl = format!("{}-{}", region.to_lowercase(), lang);
    let ceid = format!("{}:{}", region, lang);

    Url::parse_with_params(
        base,
        &[
            ("q", query),
            ("hl", hl.as_str()),
            ("gl", region),
            ("ceid", ceid.as_str()),
        ],
    )
    .with_context(|| format!("Invalid feed URL: {}", base))
}

/// RSS client for Google News search
pub struct NewsFeed {
    client: Client,
    base_url: String,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::with_base_url(GOOGLE_NEWS_RSS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Up to `max` Korean-edition articles for `query`
    pub async fn try_fetch(&self, query: &str, max: usize) -> Result<Vec<Article>> {
        let url = build_rss_url(&self.base_url, query, "ko", "KR")?;

        let bytes = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .context("Failed to reach news feed")?
            .error_for_status()?
            .bytes()
            .await
            .context("Failed to read news feed")?;

        let channel = rss::Channel::read_from(&bytes[..]).context("Failed to parse news feed")?;

        Ok(channel
            .items()
            .iter()
            .take(max)
            .map(|item| Article {
                title: trimmed(item.title()),
                link: trimmed(item.link()),
                summary: trimmed(item.description()),
                published: trimmed(item.pub_date()),
            })
            .collect())
    }

    /// Like `try_fetch`, but reports the failure and yields no articles
    pub async fn fetch(&self, query: &str, max: usize) -> Vec<Article> {
        match self.try_fetch(query, max).await {
            Ok(articles) => articles,
            Err(e) => {
                eprintln!("[에러] 뉴스 요청 중 문제가 발생했습니다: {:#}", e);
                Vec::new()
            }
        }
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed(field: Option<&str>) -> String {
    field.map(str::trim).unwrap_or_default().to_string()
}
