//! Remote word-search client / 远程搜索客户端
//!
//! One endpoint: `GET {base}words?sp=*{query}*` returning a JSON array of
//! `{word, score}`. Failures are typed here; the controller decides what
//! to do with them. / 单一接口，错误在此分类，由控制器决定处理方式。

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::category::WordMatch;
use crate::config::SearchConfig;

/// Failure modes of one search request / 单次搜索请求的失败类型
#[derive(Debug, Error)]
pub enum SearchApiError {
    /// Connection, DNS, or timeout failure / 传输层失败
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Server answered with a non-success status / 非 2xx 状态码
    #[error("search request failed with status: {0}")]
    Status(StatusCode),
    /// Body was not the expected JSON array / 响应体不是预期的 JSON 数组
    #[error("malformed search response: {0}")]
    Body(#[source] reqwest::Error),
}

/// HTTP client for the word-search endpoint / 搜索接口的 HTTP 客户端
#[derive(Debug, Clone)]
pub struct WordSearchClient {
    base_url: String,
    client: Client,
}

impl WordSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        // Normalize to exactly one trailing slash / 规范化为单个尾部斜杠
        let base_url = format!("{}/", config.base_url.trim_end_matches('/'));

        Ok(Self { base_url, client })
    }

    /// Fetch matches for one query / 拉取一次查询的结果
    ///
    /// A blank query returns the empty list without touching the network,
    /// matching the widget's no-op contract for empty input.
    pub async fn search(&self, query: &str) -> Result<Vec<WordMatch>, SearchApiError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}words?sp=*{}*",
            self.base_url,
            urlencoding::encode(query)
        );
        tracing::debug!("Fetching word matches: {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchApiError::Transport)?;

        if !resp.status().is_success() {
            return Err(SearchApiError::Status(resp.status()));
        }

        resp.json::<Vec<WordMatch>>()
            .await
            .map_err(SearchApiError::Body)
    }
}
