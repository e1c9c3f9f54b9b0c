use leptos::{component, view, ChildrenFn, IntoView};

/// The content area. Everything except the sidebar lives in this element
#[component]
pub fn Container(children: ChildrenFn) -> impl IntoView {
    view! {
        <main class="content">
            {children()}
        </main>
    }
}
