use contracts::domain::a002_cart::LineItem;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::CartSummaryPanel;
use crate::domain::a001_product::ui::{ProductImage, RatingStars};
use crate::domain::a002_cart::context::use_cart;
use crate::shared::icons::icon;
use crate::shared::number_format::format_usd;

#[component]
#[allow(non_snake_case)]
pub fn ShoppingCart() -> impl IntoView {
    let cart = use_cart();

    view! {
        <Show when=move || !cart.is_empty() fallback=|| view! { <EmptyCart /> }>
            <div class="cart">
                <h1 class="page-title">"Cart Items"</h1>
                <div class="cart__layout">
                    <div class="cart__items">
                        {move || {
                            cart.items()
                                .into_iter()
                                .map(|item| view! { <CartRow item=item /> })
                                .collect_view()
                        }}
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                cart.clear();
                            }
                        >
                            "Clear cart"
                        </Button>
                    </div>
                    <CartSummaryPanel />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartRow(item: LineItem) -> impl IntoView {
    let cart = use_cart();
    let id = item.id;
    let line_total = format_usd(item.line_total());

    view! {
        <div class="cart-row">
            <div class="cart-row__image">
                <ProductImage src=item.image.clone() alt=item.title.clone() fill=true />
            </div>
            <div class="cart-row__body">
                <div class="cart-row__info">
                    <A href=format!("/product/{}", id) attr:class="cart-row__title">
                        {item.title.clone()}
                    </A>
                    <p class="cart-row__description">{item.description.clone()}</p>
                    {item.rating.map(|rating| view! { <RatingStars rating=rating /> })}
                </div>
                <div class="cart-row__controls">
                    <div class="quantity-control">
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                cart.decrement(id);
                            }
                        >
                            "-"
                        </Button>
                        <input
                            class="quantity-control__value"
                            type="number"
                            min="1"
                            readonly=true
                            prop:value=item.quantity.to_string()
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                cart.increment(id);
                            }
                        >
                            "+"
                        </Button>
                    </div>
                    <div class="cart-row__total">
                        <p>{line_total}</p>
                        <button
                            class="cart-row__remove"
                            title="Remove"
                            on:click=move |_| {
                                cart.remove(id);
                            }
                        >
                            {icon("close")}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <section class="cart-empty">
            <div class="cart-empty__content">
                <p class="cart-empty__icon">{icon("warning")}</p>
                <h1>"Shopping cart is empty"</h1>
                <p>
                    "No products in your cart. Check out our trending items and discover something you'll love."
                </p>
                <A href="/products" attr:class="cart-empty__link">
                    <span>"Shop Now"</span>
                    {icon("arrow-right")}
                </A>
            </div>
        </section>
    }
}
