use crate::domain::a002_cart::context::CartContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One cart per session, read from localStorage here and shared via context.
    provide_context(CartContext::load());

    view! {
        <AppRoutes />
    }
}
