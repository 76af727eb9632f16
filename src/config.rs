//! Search session configuration / 搜索会话配置
//!
//! Plain in-memory configuration for one widget session; no file is read
//! or written. / 单次会话的内存配置，不读写文件。

use serde::{Deserialize, Serialize};

/// Search widget configuration / 搜索组件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the word-search endpoint / 搜索接口基础地址
    pub base_url: String,
    /// Quiet period after the last keystroke before a request fires, in
    /// milliseconds / 去抖等待时长（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Trimmed queries at or below this length never trigger a request /
    /// 低于此长度的查询不发请求
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// HTTP request timeout in seconds / HTTP 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.datamuse.com/".to_string()
}
fn default_debounce_ms() -> u64 {
    700
}
fn default_min_query_len() -> usize {
    2
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
