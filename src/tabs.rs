//! Tab visibility and selection state / 标签页显示与选中状态
//!
//! Visibility is user-controlled only; categorization never touches it.
//! `Total` is always visible and cannot be toggled off. / 显示状态仅由用户
//! 控制，分类计算不会修改；Total 始终可见。

use crate::category::Category;

/// Which category tabs are shown and which one is selected / 标签页状态
#[derive(Debug, Clone, PartialEq)]
pub struct TabState {
    visible: Vec<Category>,
    selected: Category,
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}

impl TabState {
    /// Initial state: Total/Files/People shown, Chats/List hidden,
    /// Total selected / 初始状态
    pub fn new() -> Self {
        Self {
            visible: vec![Category::Total, Category::Files, Category::People],
            selected: Category::Total,
        }
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn visible(&self) -> &[Category] {
        &self.visible
    }

    pub fn is_visible(&self, category: Category) -> bool {
        category == Category::Total || self.visible.contains(&category)
    }

    /// Flip one category's tab visibility / 切换某个分类标签的显示
    ///
    /// Hiding the currently selected category falls the selection back to
    /// `Total`. Toggling `Total` is a no-op.
    pub fn toggle(&mut self, category: Category) {
        if category == Category::Total {
            return;
        }
        if let Some(pos) = self.visible.iter().position(|c| *c == category) {
            self.visible.remove(pos);
            if self.selected == category {
                self.selected = Category::Total;
            }
        } else {
            self.visible.push(category);
        }
    }

    /// Select the tab to render / 选中要渲染的标签
    ///
    /// Hidden categories render no tab, so selecting one is unreachable
    /// through normal interaction; treated as a no-op here.
    pub fn select(&mut self, category: Category) {
        if self.is_visible(category) {
            self.selected = category;
        }
    }

    /// Drop the selection back to `Total` / 选中项回落到 Total
    pub fn reset_selection(&mut self) {
        self.selected = Category::Total;
    }
}
