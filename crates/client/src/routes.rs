use leptos::{component, view, IntoView, SignalWith};
use leptos_router::{use_location, Route, Routes, A};
use shared::routes::AdminRoute;

use crate::components::PlansPanel;

macro_rules! routes {
    ($(($route:ident, $view:ident),)+) => {
        /// Persistent navigation panel shown next to the content area
        #[component]
        pub fn Sidebar() -> impl IntoView {
            let pathname = use_location().pathname;
            let is_active = move |route: AdminRoute| {
                pathname.with(|path| AdminRoute::from_path(path) == Some(route))
            };

            view! {
                <nav class="sidebar">
                    <ul>
                    $(
                        <li class:active=move || is_active(AdminRoute::$route)>
                            <A href={AdminRoute::$route.path()}>
                                {AdminRoute::$route.ui_text()}
                            </A>
                        </li>
                    )+
                    </ul>
                </nav>
            }
        }

        /// Unmatched paths render nothing
        #[component(transparent)]
        pub fn AppRoutes() -> impl IntoView {
            view! {
                <Routes>
                $(
                    <Route path={AdminRoute::$route.path()} view=$view/>
                )+
                </Routes>
            }
        }
    };
}

routes!((Plans, PlansPanel),);
