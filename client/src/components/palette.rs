//! Palette of component kinds that can be dragged onto the builder canvas.
//!
//! DESIGN
//! ======
//! Entries come straight from `canvas::palette::PALETTE`, so the list, the
//! drop defaults, and the render shapes share one table.

use canvas::engine::Engine;
use canvas::palette::{KindSpec, PALETTE};
use leptos::prelude::*;

use crate::util::action_log::log_actions;
use crate::util::drag_payload;

/// Vertical list of draggable component kinds.
#[component]
pub fn Palette() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();

    let entries = PALETTE
        .iter()
        .map(|spec: &'static KindSpec| {
            let kind = spec.kind;
            let on_drag_start = move |ev: leptos::ev::DragEvent| {
                drag_payload::write(&ev, &drag_payload::encode_kind(kind));
                engine.update(|e| log_actions("palette", &e.start_palette_drag(kind)));
            };
            let on_drag_end = move |_ev: leptos::ev::DragEvent| {
                engine.update(|e| log_actions("palette", &e.cancel_palette_drag()));
            };

            view! {
                <div
                    class=format!("palette__entry palette__entry--{}", kind.as_str())
                    draggable="true"
                    on:dragstart=on_drag_start
                    on:dragend=on_drag_end
                >
                    {spec.label}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="palette">
            <h2 class="palette__title">"组件库"</h2>
            {entries}
        </aside>
    }
}
