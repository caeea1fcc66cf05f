use crate::domain::a002_cart::context::use_cart;
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let cart = use_cart();
    let count = Memo::new(move |_| cart.item_count());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"Storefront"</A>
                <nav class="header__nav">
                    <A href="/products" attr:class="header__link">
                        {icons::icon("products")}
                        <span>"Products"</span>
                    </A>
                </nav>
            </div>
            <div class="header__actions">
                <A href="/shopping-cart" attr:class="header__cart">
                    {icons::icon("cart")}
                    <Show when=move || { count.get() > 0 }>
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {move || count.get().to_string()}
                        </Badge>
                    </Show>
                </A>
            </div>
        </header>
    }
}
