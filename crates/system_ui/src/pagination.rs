//! Page-range calculation shared by every pagination rendering.
//!
//! Everything in this module is pure: the same inputs always yield the same
//! [`PageRangeResult`], no state is kept between calls, and out-of-domain
//! inputs are clamped rather than rejected so a pagination control always has
//! something to render.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

const DEFAULT_SIBLING_COUNT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One control slot in a rendered pagination strip.
pub enum PageToken {
    /// Literal 1-indexed page number.
    Page(u32),
    /// Non-interactive gap standing in for two or more hidden pages.
    Ellipsis,
}

impl PageToken {
    /// Page number carried by the token, if any.
    pub fn page(self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Whether the token is an ellipsis gap.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Output of [`compute_page_range`].
pub struct PageRangeResult {
    /// Ordered tokens to render.
    pub tokens: Vec<PageToken>,
    /// Current page after clamping into the valid range.
    pub current_page: u32,
    /// Total page count the tokens were computed for.
    pub total_pages: u32,
    /// `true` when the current page is the first page.
    pub is_first_page: bool,
    /// `true` when the current page is the last page.
    pub is_last_page: bool,
}

impl PageRangeResult {
    /// Whether a "previous" control should be enabled.
    pub fn can_go_previous(&self) -> bool {
        self.total_pages > 0 && !self.is_first_page
    }

    /// Whether a "next" control should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.total_pages > 0 && !self.is_last_page
    }

    /// Number of ellipsis tokens in the strip.
    pub fn ellipsis_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_ellipsis()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Presentation-independent pagination settings shared by every skin.
pub struct PaginationConfig {
    /// Pages shown on each side of the current page.
    pub sibling_count: u32,
    /// Render dedicated first/last jump controls.
    pub show_first_last: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            show_first_last: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Normalized calculator input.
pub struct PaginationRequest {
    /// 1-indexed current page, always inside `1..=max(total_pages, 1)`.
    pub current_page: u32,
    /// Total page count; zero for an empty dataset.
    pub total_pages: u32,
    /// Pages shown on each side of the current page.
    pub sibling_count: u32,
}

impl PaginationRequest {
    /// Builds a request, clamping the current page into range.
    pub fn new(current_page: u32, total_pages: u32, sibling_count: u32) -> Self {
        Self {
            current_page: clamp_current_page(current_page, total_pages),
            total_pages,
            sibling_count,
        }
    }

    /// Builds a request from signed values, clamping negatives to their lower bound.
    pub fn from_signed(current_page: i64, total_pages: i64, sibling_count: i64) -> Self {
        Self::new(
            saturate_u32(current_page.max(1)),
            saturate_u32(total_pages.max(0)),
            saturate_u32(sibling_count.max(0)),
        )
    }

    /// Builds a request from untrusted numeric input such as parsed form fields.
    ///
    /// Fractional values are floored. A non-finite current page becomes `1`, a
    /// non-finite total becomes `0`, and a non-finite sibling count falls back to
    /// the default of one sibling per side.
    pub fn from_lossy(current_page: f64, total_pages: f64, sibling_count: f64) -> Self {
        Self::new(
            lossy_u32(current_page, 1).max(1),
            lossy_u32(total_pages, 0),
            lossy_u32(sibling_count, DEFAULT_SIBLING_COUNT),
        )
    }

    /// Computes the page strip for this request.
    pub fn page_range(&self) -> PageRangeResult {
        compute_page_range(self.current_page, self.total_pages, self.sibling_count)
    }
}

/// Computes the ordered page tokens and edge flags for a pagination strip.
///
/// Short lists (`total_pages <= 2 * sibling_count + 5`) are rendered in full.
/// Longer lists keep the first and last page, a window of
/// `2 * sibling_count + 1` pages around the current page, and an ellipsis on
/// each side of the window that would otherwise hide two or more pages. A
/// single hidden page is rendered as its number.
pub fn compute_page_range(
    current_page: u32,
    total_pages: u32,
    sibling_count: u32,
) -> PageRangeResult {
    let current_page = clamp_current_page(current_page, total_pages);
    let tokens = page_tokens(current_page, total_pages, sibling_count);

    PageRangeResult {
        tokens,
        current_page,
        total_pages,
        is_first_page: total_pages > 0 && current_page == 1,
        is_last_page: total_pages > 0 && current_page == total_pages,
    }
}

fn page_tokens(current_page: u32, total_pages: u32, sibling_count: u32) -> Vec<PageToken> {
    // Current page, its siblings, and the first and last page.
    let total_number_slots = sibling_count.saturating_mul(2).saturating_add(3);
    // Two more for the ellipses.
    let total_blocks = total_number_slots.saturating_add(2);

    if total_pages <= total_blocks {
        return pages(1..=total_pages).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);

    // Keep the window 2 * sibling_count + 1 pages wide against either edge.
    let window = sibling_count.saturating_mul(2);
    let run_start = if right_sibling == total_pages {
        total_pages.saturating_sub(window).max(1)
    } else {
        left_sibling
    };
    let run_end = if left_sibling == 1 {
        window.saturating_add(1).min(total_pages)
    } else {
        right_sibling
    };

    let show_left_ellipsis = run_start > 3;
    let show_right_ellipsis = run_end < total_pages - 2;

    let mut tokens = Vec::with_capacity(total_blocks as usize);
    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            tokens.extend(pages(1..=run_end));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total_pages));
        }
        (true, false) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend(pages(run_start..=total_pages));
        }
        (true, true) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend(pages(run_start..=run_end));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total_pages));
        }
        (false, false) => {
            // Unreachable once the collapse threshold is exceeded; render
            // everything in reach rather than drop the edges.
            tokens.extend(pages(1..run_start));
            tokens.extend(pages(run_start..=run_end));
            tokens.extend(pages(run_end.saturating_add(1)..=total_pages));
        }
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Control activated on a pagination strip.
pub enum NavigationTarget {
    /// Jump to page 1.
    First,
    /// Step back one page.
    Previous,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to a literal page.
    Page(u32),
}

/// Resolves a control activation to the page to navigate to.
///
/// Returns `None` when the activation is a no-op: an empty dataset, a target
/// outside `1..=total_pages`, or the page already shown.
pub fn resolve_navigation(
    current_page: u32,
    total_pages: u32,
    target: NavigationTarget,
) -> Option<u32> {
    if total_pages == 0 {
        return None;
    }
    let current_page = clamp_current_page(current_page, total_pages);
    let next = match target {
        NavigationTarget::First => 1,
        NavigationTarget::Previous => current_page.checked_sub(1)?,
        NavigationTarget::Next => current_page.checked_add(1)?,
        NavigationTarget::Last => total_pages,
        NavigationTarget::Page(page) => page,
    };
    (1..=total_pages)
        .contains(&next)
        .then_some(next)
        .filter(|page| *page != current_page)
}

/// Number of pages needed to show `total_items` at `page_size` items per page.
pub fn page_count(total_items: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Half-open item index range shown on `page`.
///
/// Pages outside `1..=page_count(total_items, page_size)` yield an empty range.
pub fn page_item_bounds(page: u32, page_size: u32, total_items: u32) -> Range<u32> {
    if page == 0 || page > page_count(total_items, page_size) {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

fn pages(range: impl Iterator<Item = u32>) -> impl Iterator<Item = PageToken> {
    range.map(PageToken::Page)
}

fn clamp_current_page(current_page: u32, total_pages: u32) -> u32 {
    current_page.clamp(1, total_pages.max(1))
}

fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn lossy_u32(value: f64, fallback: u32) -> u32 {
    if !value.is_finite() {
        return fallback;
    }
    // Float-to-int `as` saturates at both ends.
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use PageToken::{Ellipsis, Page};

    fn tokens(current: u32, total: u32, siblings: u32) -> Vec<PageToken> {
        compute_page_range(current, total, siblings).tokens
    }

    /// Replaces each ellipsis with the pages it hides, asserting it hides at least two.
    fn expand(tokens: &[PageToken], total: u32) -> Vec<u32> {
        let mut pages = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            match token {
                Page(page) => pages.push(*page),
                Ellipsis => {
                    let before = tokens[index - 1].page().expect("page before ellipsis");
                    let after = tokens
                        .get(index + 1)
                        .and_then(|token| token.page())
                        .expect("page after ellipsis");
                    assert!(
                        after - before - 1 >= 2,
                        "ellipsis between {before} and {after} hides fewer than two pages (total {total})"
                    );
                    pages.extend(before + 1..after);
                }
            }
        }
        pages
    }

    #[test]
    fn middle_page_shows_both_ellipses() {
        let result = compute_page_range(5, 10, 1);
        assert_eq!(
            result.tokens,
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert!(!result.is_first_page);
        assert!(!result.is_last_page);
    }

    #[test]
    fn first_page_collapses_right_side_only() {
        let result = compute_page_range(1, 10, 1);
        assert_eq!(result.tokens, vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert!(result.is_first_page);
        assert!(!result.is_last_page);
    }

    #[test]
    fn last_page_collapses_left_side_only() {
        let result = compute_page_range(10, 10, 1);
        assert_eq!(result.tokens, vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
        assert!(!result.is_first_page);
        assert!(result.is_last_page);
    }

    #[test]
    fn short_list_is_rendered_in_full() {
        let result = compute_page_range(3, 5, 1);
        assert_eq!(result.tokens, (1..=5).map(Page).collect::<Vec<_>>());
        assert!(!result.is_first_page);
        assert!(!result.is_last_page);
    }

    #[test]
    fn single_page_is_both_first_and_last() {
        let result = compute_page_range(1, 1, 1);
        assert_eq!(result.tokens, vec![Page(1)]);
        assert!(result.is_first_page);
        assert!(result.is_last_page);
        assert!(!result.can_go_previous());
        assert!(!result.can_go_next());
    }

    #[test]
    fn zero_siblings_still_branches_on_both_sides() {
        assert_eq!(tokens(5, 10, 0), vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]);
        assert_eq!(tokens(1, 10, 0), vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(tokens(3, 10, 0), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
    }

    #[test]
    fn single_hidden_page_is_rendered_literally() {
        assert_eq!(
            tokens(4, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            tokens(7, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn empty_dataset_yields_no_tokens_and_no_flags() {
        let result = compute_page_range(1, 0, 1);
        assert!(result.tokens.is_empty());
        assert!(!result.is_first_page);
        assert!(!result.is_last_page);
        assert!(!result.can_go_previous());
        assert!(!result.can_go_next());
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(compute_page_range(0, 10, 1), compute_page_range(1, 10, 1));
        assert_eq!(compute_page_range(99, 10, 1), compute_page_range(10, 10, 1));
        assert_eq!(compute_page_range(99, 10, 1).current_page, 10);
    }

    #[test]
    fn huge_sibling_count_renders_everything() {
        assert_eq!(tokens(3, 12, u32::MAX), (1..=12).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn strip_properties_hold_for_small_ranges() {
        for siblings in 0..=4 {
            for total in 1..=40 {
                for current in 1..=total {
                    let result = compute_page_range(current, total, siblings);

                    let covered = expand(&result.tokens, total);
                    assert_eq!(covered, (1..=total).collect::<Vec<_>>());

                    assert_eq!(result.tokens.first(), Some(&Page(1)));
                    assert_eq!(result.tokens.last(), Some(&Page(total)));
                    assert!(result.tokens.contains(&Page(current)));

                    assert_eq!(result.is_first_page, current == 1);
                    assert_eq!(result.is_last_page, current == total);

                    if total <= 2 * siblings + 5 {
                        assert_eq!(result.ellipsis_count(), 0);
                    } else {
                        assert!(result.ellipsis_count() >= 1);
                    }

                    assert_eq!(result, compute_page_range(current, total, siblings));
                }
            }
        }
    }

    #[test]
    fn siblings_of_current_page_are_always_visible() {
        for siblings in 0..=3u32 {
            for total in 1..=30 {
                for current in 1..=total {
                    let visible = tokens(current, total, siblings);
                    let low = current.saturating_sub(siblings).max(1);
                    let high = (current + siblings).min(total);
                    for page in low..=high {
                        assert!(
                            visible.contains(&Page(page)),
                            "page {page} missing for current {current} of {total}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn lossy_request_clamps_untrusted_input() {
        assert_eq!(
            PaginationRequest::from_lossy(f64::NAN, 10.0, 1.0),
            PaginationRequest::new(1, 10, 1)
        );
        assert_eq!(
            PaginationRequest::from_lossy(4.7, 9.9, f64::INFINITY),
            PaginationRequest::new(4, 9, 1)
        );
        assert_eq!(
            PaginationRequest::from_lossy(-3.0, -5.0, -1.0),
            PaginationRequest::new(1, 0, 0)
        );
        assert_eq!(
            PaginationRequest::from_lossy(50.0, 10.0, 2.0).current_page,
            10
        );
    }

    #[test]
    fn signed_request_clamps_negatives() {
        let request = PaginationRequest::from_signed(-7, -1, -2);
        assert_eq!(request, PaginationRequest::new(1, 0, 0));
        assert!(request.page_range().tokens.is_empty());

        let request = PaginationRequest::from_signed(12, 10, 1);
        assert_eq!(request.current_page, 10);
    }

    #[test]
    fn navigation_resolves_controls_and_skips_no_ops() {
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Previous), Some(4));
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Next), Some(6));
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::First), Some(1));
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Last), Some(10));
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Page(8)), Some(8));

        assert_eq!(resolve_navigation(1, 10, NavigationTarget::Previous), None);
        assert_eq!(resolve_navigation(1, 10, NavigationTarget::First), None);
        assert_eq!(resolve_navigation(10, 10, NavigationTarget::Next), None);
        assert_eq!(resolve_navigation(10, 10, NavigationTarget::Last), None);
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Page(5)), None);
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Page(0)), None);
        assert_eq!(resolve_navigation(5, 10, NavigationTarget::Page(11)), None);
        assert_eq!(resolve_navigation(1, 0, NavigationTarget::Next), None);
    }

    #[test]
    fn page_arithmetic_handles_partial_and_empty_pages() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(5, 0), 0);

        assert_eq!(page_item_bounds(1, 10, 95), 0..10);
        assert_eq!(page_item_bounds(10, 10, 95), 90..95);
        assert_eq!(page_item_bounds(11, 10, 95), 0..0);
        assert_eq!(page_item_bounds(0, 10, 95), 0..0);
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: PaginationConfig =
            serde_json::from_str(r#"{"show_first_last":true}"#).expect("config");
        assert_eq!(
            config,
            PaginationConfig {
                sibling_count: 1,
                show_first_last: true,
            }
        );
    }

    #[test]
    fn tokens_render_as_labels() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "…");
    }
}
