//! Root application component with routing between the two demos.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{builder::BuilderPage, dropzone::DropZonePage};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dragboard"/>

        <Router>
            <nav class="demo-nav">
                <A href="/">"放置区域演示"</A>
                <A href="/builder">"页面构建器"</A>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DropZonePage/>
                <Route path=StaticSegment("builder") view=BuilderPage/>
            </Routes>
        </Router>
    }
}
