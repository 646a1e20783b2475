//! One placed component on the builder canvas.

use canvas::engine::Engine;
use canvas::render::{ComponentView, ShapeView};
use leptos::prelude::*;

use crate::util::action_log::log_actions;

/// Draws a [`ComponentView`] as an absolutely positioned element.
///
/// Pointer-down is handled by the surrounding canvas surface; only the delete
/// affordance handles its own events.
#[component]
pub fn PlacedComponent(item: ComponentView) -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let id = item.id;

    let delete_button = item.show_delete.then(|| {
        view! {
            <button
                class="canvas-component__delete"
                aria-label="删除组件"
                on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    engine.update(|e| log_actions("delete", &e.delete_component(&id)));
                }
            >
                "×"
            </button>
        }
    });

    view! {
        <div class=item.class.clone() style=item.style()>
            {render_shape(item.shape)}
            {delete_button}
        </div>
    }
}

fn render_shape(shape: ShapeView) -> impl IntoView {
    match shape {
        ShapeView::TextBlock { text } => view! { <p class="shape-text">{text}</p> }.into_any(),
        ShapeView::ImagePlaceholder { glyph, caption } => view! {
            <div class="shape-image">
                <span class="shape-image__glyph">{glyph}</span>
                <span class="shape-image__caption">{caption}</span>
            </div>
        }
        .into_any(),
        ShapeView::Button { label } => view! { <button class="shape-button" type="button">{label}</button> }.into_any(),
        ShapeView::Card { glyph, title, body } => view! {
            <div class="shape-card">
                <div class="shape-card__image">{glyph}</div>
                <h3 class="shape-card__title">{title}</h3>
                <p class="shape-card__body">{body}</p>
            </div>
        }
        .into_any(),
        ShapeView::Heading { text } => view! { <h1 class="shape-heading">{text}</h1> }.into_any(),
        ShapeView::Divider => view! { <hr class="shape-divider"/> }.into_any(),
        ShapeView::Blank => view! { <div class="shape-blank"></div> }.into_any(),
    }
}
