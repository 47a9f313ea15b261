//! Component showcase app for the shared pagination control.
//!
//! The app renders one pagination state through every visual skin so skin
//! changes can be reviewed against identical page tokens, drives a paged data
//! table from the same state, and exposes a playground that feeds raw text
//! input through the calculator's lossy normalization.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod state;

use leptos::*;
use serde_json::Value;
use system_ui::prelude::*;

use crate::state::{ShowcaseAction, UiShowcaseState, PAGE_SIZE_PRESETS};

const SIBLING_CHOICES: [u32; 5] = [0, 1, 2, 3, 4];

#[component]
/// UI showcase app contents.
pub fn UiShowcaseApp(
    /// Previously persisted app state payload.
    restored_state: Option<Value>,
    /// Receives every changed state snapshot.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let initial = match restored_state.map(UiShowcaseState::restore) {
        Some(Ok(restored)) => restored,
        Some(Err(err)) => {
            logging::warn!("ui showcase restore failed: {err}");
            UiShowcaseState::default()
        }
        None => UiShowcaseState::default(),
    };
    let last_saved = create_rw_signal(serde_json::to_string(&initial).ok());
    let state = create_rw_signal(initial);

    let raw_current = create_rw_signal(String::new());
    let raw_total = create_rw_signal(String::new());
    let raw_siblings = create_rw_signal(String::new());

    let dispatch = move |action: ShowcaseAction| {
        let mut next = state.get_untracked();
        if next.apply(action) {
            state.set(next);
        }
    };
    let apply_playground = move || {
        let mut next = state.get_untracked();
        let changed = raw_current.with_untracked(|current| {
            raw_total.with_untracked(|total| {
                raw_siblings
                    .with_untracked(|siblings| next.apply_playground_input(current, total, siblings))
            })
        });
        if changed {
            state.set(next);
        }
    };

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("ui showcase persist failed: {err}"),
            }
        }
    });

    let current_page = Signal::derive(move || state.get().current_page);
    let total_pages = Signal::derive(move || state.get().total_pages());
    let config = Signal::derive(move || state.get().pagination);
    let skin = Signal::derive(move || state.get().skin);
    let on_page_change = Callback::new(move |page: u32| {
        dispatch(ShowcaseAction::Navigate(NavigationTarget::Page(page)));
    });

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md>
            <Cluster justify=LayoutJustify::Between>
                <Heading>"Pagination Showcase"</Heading>
                <Badge>{move || skin.get().id()}</Badge>
            </Cluster>

            <Panel aria_label="Skin">
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Skin"</Heading>
                    <Cluster gap=LayoutGap::Sm role="group" aria_label="Skin">
                        {UiSkin::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        shape=ButtonShape::Pill
                                        selected=Signal::derive(move || skin.get() == option)
                                        on_click=Callback::new(move |_| {
                                            dispatch(ShowcaseAction::SetSkin(option));
                                        })
                                    >
                                        {option.label()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                </Stack>
            </Panel>

            <Panel aria_label="Options">
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Label>"Siblings per side"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        {SIBLING_CHOICES
                            .into_iter()
                            .map(|count| {
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        shape=ButtonShape::Square
                                        selected=Signal::derive(move || config.get().sibling_count == count)
                                        on_click=Callback::new(move |_| {
                                            dispatch(ShowcaseAction::SetSiblingCount(count));
                                        })
                                    >
                                        {count.to_string()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                    <Heading role=TextRole::Label>"Rows per page"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        {PAGE_SIZE_PRESETS
                            .into_iter()
                            .map(|page_size| {
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        selected=Signal::derive(move || state.get().page_size == page_size)
                                        on_click=Callback::new(move |_| {
                                            dispatch(ShowcaseAction::SetPageSize(page_size));
                                        })
                                    >
                                        {page_size.to_string()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Button
                            variant=ButtonVariant::Secondary
                            pressed=Signal::derive(move || config.get().show_first_last)
                            on_click=Callback::new(move |_| dispatch(ShowcaseAction::ToggleFirstLast))
                        >
                            "First / last controls"
                        </Button>
                    </Cluster>
                </Stack>
            </Panel>

            <Panel aria_label="Paged table" skin=UiSkin::default()>
                <Stack gap=LayoutGap::Md>
                    <Heading role=TextRole::Title>"Paged table"</Heading>
                    <DataTable aria_label="Paged rows">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Item"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .get()
                                    .visible_rows()
                                    .map(|index| {
                                        view! {
                                            <tr>
                                                <td>{(index + 1).to_string()}</td>
                                                <td>{format!("Sample row {}", index + 1)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </DataTable>
                    <Pagination
                        current_page
                        total_pages
                        config
                        skin
                        size=ButtonSize::Md
                        aria_label="Table pages".to_string()
                        on_page_change
                    />
                </Stack>
            </Panel>

            <Panel aria_label="Skin gallery">
                <Stack gap=LayoutGap::Md>
                    <Heading role=TextRole::Title>"Every skin, same pages"</Heading>
                    {UiSkin::ALL
                        .into_iter()
                        .map(|gallery_skin| {
                            view! {
                                <Panel skin=gallery_skin padding=LayoutPadding::Sm>
                                    <Cluster justify=LayoutJustify::Between>
                                        <Text role=TextRole::Label>{gallery_skin.label()}</Text>
                                        <Pagination
                                            current_page
                                            total_pages
                                            config
                                            skin=gallery_skin
                                            aria_label=format!("{} pages", gallery_skin.label())
                                            on_page_change
                                        />
                                    </Cluster>
                                </Panel>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>

            <Panel aria_label="Playground">
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Title>"Playground"</Heading>
                    <Text tone=TextTone::Secondary>
                        "Raw values are clamped: blank or invalid fields keep their current value."
                    </Text>
                    <Cluster gap=LayoutGap::Sm>
                        <TextField
                            aria_label="Current page"
                            placeholder="Current page"
                            input_type="number"
                            value=Signal::derive(move || raw_current.get())
                            on_input=Callback::new(move |ev| {
                                raw_current.set(event_target_value(&ev));
                                apply_playground();
                            })
                        />
                        <TextField
                            aria_label="Total items"
                            placeholder="Total items"
                            input_type="number"
                            value=Signal::derive(move || raw_total.get())
                            on_input=Callback::new(move |ev| {
                                raw_total.set(event_target_value(&ev));
                                apply_playground();
                            })
                        />
                        <TextField
                            aria_label="Siblings per side"
                            placeholder="Siblings"
                            input_type="number"
                            value=Signal::derive(move || raw_siblings.get())
                            on_input=Callback::new(move |ev| {
                                raw_siblings.set(event_target_value(&ev));
                                apply_playground();
                            })
                        />
                    </Cluster>
                    <Text role=TextRole::Code>
                        {move || {
                            state
                                .get()
                                .page_range()
                                .tokens
                                .iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>()
                                .join(" ")
                        }}
                    </Text>
                </Stack>
            </Panel>

            <StatusBar>
                <StatusBarItem>
                    {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                </StatusBarItem>
                <StatusBarItem>
                    {move || {
                        let rows = state.get().visible_rows();
                        if rows.is_empty() {
                            "No rows".to_string()
                        } else {
                            format!("Rows {}–{}", rows.start + 1, rows.end)
                        }
                    }}
                </StatusBarItem>
                <StatusBarItem>{move || format!("Skin: {}", skin.get().label())}</StatusBarItem>
            </StatusBar>
        </Stack>
    }
}
