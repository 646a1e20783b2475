//! Drop-zone demo: drag catalog tiles into a zone, remove them again.

use leptos::prelude::*;

use crate::state::dropzone::{DropZoneState, Item};
use crate::util::drag_payload;

const USAGE: &[&str] = &[
    "点击并拖拽左侧的可拖拽组件",
    "将组件拖到右侧的放置区域释放",
    "点击组件右上角的 × 按钮可以移除已放置的组件",
    "可以多次拖拽同一个组件到放置区域",
];

/// Drop-zone page — catalog on the left, drop target on the right.
#[component]
pub fn DropZonePage() -> impl IntoView {
    let zone = RwSignal::new(DropZoneState::default());

    let tiles = zone
        .with_untracked(|z| z.catalog)
        .iter()
        .map(|item| {
            let item = *item;
            let on_drag_start = move |ev: leptos::ev::DragEvent| {
                drag_payload::write(&ev, &drag_payload::encode_zone_item(item.id));
                zone.update(|z| z.start_drag(item));
            };
            let on_drag_end = move |_ev: leptos::ev::DragEvent| zone.update(DropZoneState::end_drag);

            view! {
                <div
                    class=format!("zone-tile zone-tile--draggable zone-tile--{}", item.tone)
                    draggable="true"
                    on:dragstart=on_drag_start
                    on:dragend=on_drag_end
                >
                    {item.label}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        zone.update(|z| {
            if z.drop_in_zone() {
                log::debug!("drop zone: {} placed", z.placed_count());
            }
        });
    };

    let placed = move || {
        zone.with(|z| z.placed.clone())
            .into_iter()
            .map(|item| view! { <PlacedTile zone=zone item=item/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page dropzone">
            <h1 class="page__title">"可拖拽式组件放置演示"</h1>

            <div class="dropzone__grid">
                <section class="panel">
                    <h2 class="panel__title">"可拖拽组件"</h2>
                    <div class="tile-grid">{tiles}</div>
                </section>

                <section
                    class="panel dropzone__target"
                    class:dropzone__target--active=move || zone.with(DropZoneState::is_drop_target_active)
                    on:dragover=on_drag_over
                    on:drop=on_drop
                >
                    <h2 class="panel__title">
                        "放置区域"
                        <Show when=move || !zone.with(DropZoneState::is_empty)>
                            <span class="panel__count">
                                {move || format!("({} 个组件)", zone.with(DropZoneState::placed_count))}
                            </span>
                        </Show>
                    </h2>
                    <Show
                        when=move || !zone.with(DropZoneState::is_empty)
                        fallback=|| view! { <div class="dropzone__empty"><p>"将组件拖拽到这里"</p></div> }
                    >
                        <div class="tile-grid">{placed}</div>
                    </Show>
                </section>
            </div>

            <UsageNotes notes=USAGE/>
        </div>
    }
}

#[component]
fn PlacedTile(zone: RwSignal<DropZoneState>, item: Item) -> impl IntoView {
    let on_remove = move |_ev: leptos::ev::MouseEvent| {
        zone.update(|z| {
            let removed = z.remove_from_zone(item.id);
            log::debug!("drop zone: removed {removed} x {}", item.label);
        });
    };

    view! {
        <div class=format!("zone-tile zone-tile--placed zone-tile--{}", item.tone)>
            {item.label}
            <button class="zone-tile__remove" aria-label="移除组件" on:click=on_remove>
                "×"
            </button>
        </div>
    }
}

/// Bulleted usage notes shown under a demo.
#[component]
pub fn UsageNotes(notes: &'static [&'static str]) -> impl IntoView {
    view! {
        <section class="panel usage">
            <h3 class="usage__title">"使用说明"</h3>
            <ul class="usage__list">
                {notes.iter().map(|note| view! { <li>{*note}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
