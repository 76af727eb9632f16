//! Debounced word-search widget core / 去抖搜索组件核心
//!
//! Client-side state for a search-as-you-type widget: keystrokes are
//! debounced into remote word-search requests, the ranked response is
//! partitioned into display categories, and tab visibility/selection is
//! tracked for the presentation layer. Rendering itself lives outside
//! this crate. / 渲染不在本 crate 范围内。

pub mod category;
pub mod client;
pub mod config;
pub mod controller;
pub mod tabs;
