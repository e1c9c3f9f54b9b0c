use leptos::{component, view, IntoView};
use leptos_router::Router;

use crate::{components::Container, AppRoutes, Sidebar};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="shell">
                <Sidebar/>
                <Container>
                    <AppRoutes/>
                </Container>
            </div>
        </Router>
    }
}
