//! Bridge component between DOM events and the builder `canvas::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns every interaction decision. This surface re-measures the
//! canvas element on each event (the page may have scrolled), forwards the
//! client-space pointer position, and re-renders from engine state.

use canvas::engine::Engine;
use canvas::input::Key;
use canvas::render;
use leptos::prelude::*;

use crate::components::canvas_component::PlacedComponent;
use crate::util::action_log::log_actions;
use crate::util::drag_payload;
use crate::util::pointer::{client_point, measure_frame};

/// The drop target and reposition area for placed components.
#[component]
pub fn CanvasSurface() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let point = client_point(&ev);
        let payload = drag_payload::read(&ev);
        engine.update(|e| {
            e.set_frame(measure_frame(canvas_ref));
            if !e.is_drop_target_active() {
                match payload.as_deref().and_then(drag_payload::decode_kind) {
                    Some(kind) => {
                        e.start_palette_drag(kind);
                    }
                    None => {
                        leptos::logging::warn!("ignoring drop with unrecognised payload: {payload:?}");
                        return;
                    }
                }
            }
            log_actions("drop", &e.drop_on_canvas(point));
        });
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(el) = canvas_ref.get_untracked() {
            if let Err(e) = el.focus() {
                log::debug!("canvas focus failed: {e:?}");
            }
        }
        let point = client_point(&ev);
        engine.update(|e| {
            e.set_frame(measure_frame(canvas_ref));
            log_actions("pointer", &e.on_pointer_down(point));
        });
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !engine.with_untracked(Engine::is_dragging_component) {
            return;
        }
        let point = client_point(&ev);
        engine.update(|e| {
            e.set_frame(measure_frame(canvas_ref));
            log_actions("pointer", &e.drag_move(point));
        });
    };

    let release = move || {
        if engine.with_untracked(Engine::is_dragging_component) {
            engine.update(|e| log_actions("pointer", &e.release_drag()));
        }
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| release();
    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| release();

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        let key = Key(ev.key());
        engine.update(|e| {
            let actions = e.on_key_down(&key);
            if !actions.is_empty() {
                ev.prevent_default();
            }
            log_actions("key", &actions);
        });
    };

    let components = move || {
        engine
            .with(|e| render::describe_all(&e.doc, &e.ui))
            .into_iter()
            .map(|item| view! { <PlacedComponent item=item/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class="canvas-surface"
            class:canvas-surface--drop-target=move || engine.with(Engine::is_drop_target_active)
            class:canvas-surface--grabbing=move || engine.with(Engine::is_dragging_component)
            node_ref=canvas_ref
            tabindex="0"
            on:dragover=on_drag_over
            on:drop=on_drop
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:keydown=on_key_down
        >
            <Show when=move || engine.with(|e| e.doc.is_empty())>
                <p class="canvas-surface__hint">"从左侧拖拽组件到画布"</p>
            </Show>
            {components}
        </div>
    }
}
