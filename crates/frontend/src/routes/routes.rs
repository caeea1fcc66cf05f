use crate::domain::a001_product::ui::{NotFound, ProductDetails, ProductList};
use crate::domain::a002_cart::ui::ShoppingCart;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/product/:id") view=ProductDetails />
                    <Route path=path!("/shopping-cart") view=ShoppingCart />
                </Routes>
            </Shell>
        </Router>
    }
}
