//! Shared UI primitive library for the component showcase.
//!
//! The crate owns reusable Leptos primitives, the visual skin registry, and
//! the pure page-range calculator behind every pagination control. Skins only
//! change the stable `data-ui-*` DOM contract consumed by the CSS layers;
//! pagination behavior is computed once in [`pagination`] and shared by all
//! of them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod pagination;
mod primitives;
mod skin;

pub use pagination::{
    compute_page_range, page_count, page_item_bounds, resolve_navigation, NavigationTarget,
    PageRangeResult, PageToken, PaginationConfig, PaginationRequest,
};
pub use primitives::{
    Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Cluster, DataTable, Heading,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Pagination, Panel, Stack, StatusBar,
    StatusBarItem, Text, TextField, TextRole, TextTone,
};
pub use skin::{UiSkin, UnknownSkinError};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        compute_page_range, page_count, page_item_bounds, resolve_navigation, Badge, Button,
        ButtonShape, ButtonSize, ButtonVariant, Cluster, DataTable, Heading, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, NavigationTarget, PageRangeResult, PageToken,
        Pagination, PaginationConfig, PaginationRequest, Panel, Stack, StatusBar, StatusBarItem,
        Text, TextField, TextRole, TextTone, UiSkin,
    };
}
