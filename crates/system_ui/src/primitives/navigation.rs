use super::*;

#[component]
/// Shared status bar primitive.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-variant="standard"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared pagination strip.
///
/// Page tokens come from [`compute_page_range`](crate::compute_page_range), so
/// every skin renders the same pages; `skin` only selects styling through
/// `data-ui-skin`. Activations that resolve to the current page or fall
/// outside the page range never reach `on_page_change`.
pub fn Pagination(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] current_page: MaybeSignal<u32>,
    #[prop(into)] total_pages: MaybeSignal<u32>,
    #[prop(optional, into)] config: MaybeSignal<PaginationConfig>,
    #[prop(optional, into)] skin: MaybeSignal<UiSkin>,
    #[prop(default = ButtonSize::Sm)] size: ButtonSize,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_page_change: Option<Callback<u32>>,
) -> impl IntoView {
    let range = Signal::derive(move || {
        compute_page_range(
            current_page.get(),
            total_pages.get(),
            config.get().sibling_count,
        )
    });
    let navigate = move |target: NavigationTarget| {
        let Some(page) =
            resolve_navigation(current_page.get_untracked(), total_pages.get_untracked(), target)
        else {
            return;
        };
        if let Some(on_page_change) = on_page_change.as_ref() {
            on_page_change.call(page);
        }
    };
    let at_start = Signal::derive(move || !range.get().can_go_previous());
    let at_end = Signal::derive(move || !range.get().can_go_next());
    let show_first_last = move || config.get().show_first_last;

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-skin=move || skin.get().id()
            data-ui-empty=move || bool_token(range.get().tokens.is_empty())
            aria-label=aria_label.unwrap_or_else(|| "Pagination".to_string())
        >
            <Show when=show_first_last fallback=|| ()>
                <Button
                    ui_slot="first"
                    size
                    variant=ButtonVariant::Quiet
                    aria_label="First page".to_string()
                    disabled=at_start
                    on_click=Callback::new(move |_| navigate(NavigationTarget::First))
                >
                    "«"
                </Button>
            </Show>
            <Button
                ui_slot="previous"
                size
                variant=ButtonVariant::Quiet
                aria_label="Previous page".to_string()
                disabled=at_start
                on_click=Callback::new(move |_| navigate(NavigationTarget::Previous))
            >
                "‹"
            </Button>
            <span data-ui-slot="pages">
                {move || {
                    let range = range.get();
                    let current = range.current_page;
                    range
                        .tokens
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => {
                                let selected = page == current;
                                let variant = if selected {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Standard
                                };
                                let aria_current = selected.then_some("page");
                                view! {
                                    <Button
                                        ui_slot="page"
                                        size
                                        shape=ButtonShape::Square
                                        variant
                                        selected
                                        aria_current
                                        aria_label=format!("Page {page}")
                                        on_click=Callback::new(move |_| {
                                            navigate(NavigationTarget::Page(page))
                                        })
                                    >
                                        {page.to_string()}
                                    </Button>
                                }
                                .into_view()
                            }
                            PageToken::Ellipsis => view! {
                                <span data-ui-slot="ellipsis" aria-hidden="true">
                                    {token.to_string()}
                                </span>
                            }
                            .into_view(),
                        })
                        .collect_view()
                }}
            </span>
            <Button
                ui_slot="next"
                size
                variant=ButtonVariant::Quiet
                aria_label="Next page".to_string()
                disabled=at_end
                on_click=Callback::new(move |_| navigate(NavigationTarget::Next))
            >
                "›"
            </Button>
            <Show when=show_first_last fallback=|| ()>
                <Button
                    ui_slot="last"
                    size
                    variant=ButtonVariant::Quiet
                    aria_label="Last page".to_string()
                    disabled=at_end
                    on_click=Callback::new(move |_| navigate(NavigationTarget::Last))
                >
                    "»"
                </Button>
            </Show>
        </nav>
    }
}
