//! Canvas builder page — palette, canvas, and toolbar.
//!
//! ARCHITECTURE
//! ============
//! The page owns the single `RwSignal<Engine>` and provides it as context;
//! the palette and canvas surface both mutate it through engine calls.

use canvas::engine::Engine;
use leptos::prelude::*;

use crate::components::canvas_surface::CanvasSurface;
use crate::components::palette::Palette;
use crate::pages::dropzone::UsageNotes;
use crate::util::action_log::log_actions;

const USAGE: &[&str] = &[
    "从左侧组件库拖拽组件到画布上",
    "按住画布上的组件可以移动位置",
    "点击组件选中，点击右上角的 × 或按 Delete 键删除",
    "点击画布空白处或按 Esc 取消选中",
];

/// Canvas builder page.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let engine = RwSignal::new(Engine::new());
    provide_context(engine);

    let count = move || engine.with(|e| e.components().len());
    let on_clear = move |_ev: leptos::ev::MouseEvent| {
        engine.update(|e| log_actions("toolbar", &e.clear_all()));
    };

    view! {
        <div class="page builder">
            <header class="builder__toolbar">
                <h1 class="page__title">"拖拽式页面构建器"</h1>
                <span class="builder__count">{move || format!("{} 个组件", count())}</span>
                <button class="builder__clear" on:click=on_clear disabled=move || count() == 0>
                    "清空画布"
                </button>
            </header>

            <div class="builder__body">
                <Palette/>
                <CanvasSurface/>
            </div>

            <UsageNotes notes=USAGE/>
        </div>
    }
}
