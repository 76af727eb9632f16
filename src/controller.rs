//! Query controller - debounce and request lifecycle / 查询控制器
//!
//! Turns raw keystrokes into at most one in-flight request per settled
//! typing pause and owns the session state the presentation layer reads.
//! / 将按键输入合并为每次停顿至多一个请求，并持有展示层读取的会话状态。
//!
//! Architecture principle: only expose primitive operations, do not render /
//! 架构原则：只暴露原子操作，不负责渲染
//! - set_query: keystroke / 按键更新查询
//! - clear_query: explicit clear action / 清空
//! - select_category / toggle_category: tab interaction / 标签页交互
//! - snapshot: everything the view needs / 视图所需的全部状态

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::category::{categorize, Category, CategoryBuckets, CategoryCounts, CategorizedMatch};
use crate::client::WordSearchClient;
use crate::config::SearchConfig;
use crate::tabs::TabState;

/// Mutable per-session state / 会话可变状态
#[derive(Debug, Default)]
struct SessionState {
    query: String,
    is_loading: bool,
    buckets: CategoryBuckets,
    tabs: TabState,
}

/// Read-only view handed to the presentation layer / 交给展示层的只读视图
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub query: String,
    pub is_loading: bool,
    pub selected: Category,
    pub visible_tabs: Vec<Category>,
    /// Matches rendered for the selected category / 选中分类下渲染的结果
    pub results: Vec<CategorizedMatch>,
    pub counts: CategoryCounts,
}

/// Debounced search session controller / 去抖搜索会话控制器
///
/// Must live inside a tokio runtime: the debounce timer is a spawned task
/// whose `JoinHandle` is aborted whenever a newer query supersedes it, so
/// at most one pending timer exists at any moment. Each dispatched fetch
/// carries a generation number; responses whose generation is no longer
/// current are dropped instead of clobbering newer state.
pub struct QueryController {
    config: SearchConfig,
    client: WordSearchClient,
    state: Arc<RwLock<SessionState>>,
    /// Generation of the newest accepted query / 最新查询的代数
    generation: Arc<AtomicU64>,
    /// The single pending debounce task, if any / 唯一的待定去抖任务
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl QueryController {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = WordSearchClient::new(&config)?;
        Ok(Self {
            config,
            client,
            state: Arc::new(RwLock::new(SessionState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        })
    }

    /// Handle one keystroke / 处理一次按键
    ///
    /// Short queries (trimmed length at or below `min_query_len`) clear all
    /// result state immediately and never reach the network. Anything
    /// longer marks the session loading and restarts the debounce window;
    /// the request fires only after `debounce_ms` of quiet.
    pub fn set_query(&self, query: &str) {
        self.cancel_pending();

        if query.trim().chars().count() <= self.config.min_query_len {
            // Invalidate any response still in flight / 使在途响应失效
            self.generation.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.write();
            state.query = query.to_string();
            state.is_loading = false;
            state.buckets.clear();
            state.tabs.reset_selection();
            return;
        }

        {
            let mut state = self.state.write();
            state.query = query.to_string();
            state.is_loading = true;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);
        let delay = Duration::from_millis(self.config.debounce_ms);
        let query = query.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let matches = match client.search(&query).await {
                Ok(matches) => matches,
                Err(e) => {
                    // Any failure degrades to the empty result set / 失败静默降级为空结果
                    tracing::warn!("Search failed for {:?}, treating as empty: {}", query, e);
                    Vec::new()
                }
            };

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(
                    "Dropping stale response for {:?} (generation {})",
                    query,
                    generation
                );
                return;
            }

            let buckets = categorize(&matches);
            let mut state = state.write();
            state.buckets = buckets;
            state.tabs.reset_selection();
            state.is_loading = false;
        });

        *self.pending.lock() = Some(handle);
    }

    /// Explicit clear action: query, buckets, loading and selection all
    /// reset in one step / 清空操作，一次性复位
    pub fn clear_query(&self) {
        self.cancel_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.write();
        state.query.clear();
        state.is_loading = false;
        state.buckets.clear();
        state.tabs.reset_selection();
    }

    /// Tab click / 点击标签页
    pub fn select_category(&self, category: Category) {
        self.state.write().tabs.select(category);
    }

    /// Show/hide a category tab / 显示或隐藏分类标签
    pub fn toggle_category(&self, category: Category) {
        self.state.write().tabs.toggle(category);
    }

    pub fn query(&self) -> String {
        self.state.read().query.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn selected_category(&self) -> Category {
        self.state.read().tabs.selected()
    }

    /// Current state for the presentation layer / 展示层的当前状态
    pub fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.read();
        let selected = state.tabs.selected();
        SearchSnapshot {
            query: state.query.clone(),
            is_loading: state.is_loading,
            selected,
            visible_tabs: state.tabs.visible().to_vec(),
            results: state.buckets.bucket(selected).to_vec(),
            counts: state.buckets.counts(),
        }
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for QueryController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
