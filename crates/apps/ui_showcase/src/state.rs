//! Serializable showcase state and the reducer driving it.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use system_ui::{
    page_count, page_item_bounds, resolve_navigation, NavigationTarget, PageRangeResult,
    PaginationConfig, PaginationRequest, UiSkin,
};
use thiserror::Error;

const DEFAULT_TOTAL_ITEMS: u32 = 240;
const DEFAULT_PAGE_SIZE: u32 = 12;
const MAX_SIBLING_COUNT: u32 = 4;
pub(crate) const PAGE_SIZE_PRESETS: [u32; 4] = [6, 12, 24, 48];

#[derive(Debug, Error)]
pub(crate) enum ShowcaseStateError {
    #[error("restored showcase state is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShowcaseAction {
    Navigate(NavigationTarget),
    SetPageSize(u32),
    SetSiblingCount(u32),
    ToggleFirstLast,
    SetSkin(UiSkin),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UiShowcaseState {
    pub(crate) current_page: u32,
    pub(crate) total_items: u32,
    pub(crate) page_size: u32,
    pub(crate) pagination: PaginationConfig,
    pub(crate) skin: UiSkin,
}

impl Default for UiShowcaseState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_items: DEFAULT_TOTAL_ITEMS,
            page_size: DEFAULT_PAGE_SIZE,
            pagination: PaginationConfig::default(),
            skin: UiSkin::default(),
        }
    }
}

impl UiShowcaseState {
    /// Restores a persisted snapshot, re-clamping values an older build may have written.
    pub(crate) fn restore(value: Value) -> Result<Self, ShowcaseStateError> {
        let mut state: Self = serde_json::from_value(value)?;
        state.normalize();
        Ok(state)
    }

    pub(crate) fn total_pages(&self) -> u32 {
        page_count(self.total_items, self.page_size)
    }

    pub(crate) fn page_range(&self) -> PageRangeResult {
        PaginationRequest::new(
            self.current_page,
            self.total_pages(),
            self.pagination.sibling_count,
        )
        .page_range()
    }

    pub(crate) fn visible_rows(&self) -> Range<u32> {
        page_item_bounds(self.current_page, self.page_size, self.total_items)
    }

    /// Applies an action, returning whether the state changed.
    pub(crate) fn apply(&mut self, action: ShowcaseAction) -> bool {
        let before = self.clone();
        match action {
            ShowcaseAction::Navigate(target) => {
                if let Some(page) = resolve_navigation(self.current_page, self.total_pages(), target)
                {
                    self.current_page = page;
                }
            }
            ShowcaseAction::SetPageSize(page_size) => {
                // Keep the first visible row on screen.
                let first_row = self.visible_rows().start;
                self.page_size = page_size.max(1);
                self.current_page = first_row / self.page_size + 1;
            }
            ShowcaseAction::SetSiblingCount(sibling_count) => {
                self.pagination.sibling_count = sibling_count.min(MAX_SIBLING_COUNT);
            }
            ShowcaseAction::ToggleFirstLast => {
                self.pagination.show_first_last = !self.pagination.show_first_last;
            }
            ShowcaseAction::SetSkin(skin) => {
                self.skin = skin;
            }
        }
        self.normalize();
        *self != before
    }

    /// Applies raw playground input. Unparseable fields keep their current value.
    pub(crate) fn apply_playground_input(
        &mut self,
        current_page: &str,
        total_items: &str,
        sibling_count: &str,
    ) -> bool {
        let before = self.clone();
        let parse = |raw: &str, fallback: u32| {
            raw.trim()
                .parse::<f64>()
                .unwrap_or(f64::from(fallback))
        };

        let total_items = parse(total_items, self.total_items);
        // Normalize the item count through the same lossy path as page inputs.
        let total_items = PaginationRequest::from_lossy(1.0, total_items, 0.0).total_pages;
        let request = PaginationRequest::from_lossy(
            parse(current_page, self.current_page),
            f64::from(page_count(total_items, self.page_size)),
            parse(sibling_count, self.pagination.sibling_count),
        );

        self.total_items = total_items;
        self.current_page = request.current_page;
        self.pagination.sibling_count = request.sibling_count.min(MAX_SIBLING_COUNT);
        self.normalize();
        *self != before
    }

    fn normalize(&mut self) {
        self.page_size = self.page_size.max(1);
        self.pagination.sibling_count = self.pagination.sibling_count.min(MAX_SIBLING_COUNT);
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }
}
