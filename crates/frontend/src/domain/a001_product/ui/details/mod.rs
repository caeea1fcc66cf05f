use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_cart::CartChange;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::{NotFound, ProductImage, RatingStars};
use crate::domain::a002_cart::context::use_cart;
use crate::shared::number_format::format_usd;

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Product),
    Missing,
    Failed(String),
}

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails() -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| ProductId::from_string(&raw).ok())
        })
    });

    let (state, set_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        let Some(id) = product_id.get() else {
            set_state.set(LoadState::Missing);
            return;
        };
        set_state.set(LoadState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let next = match api::fetch_product(id).await {
                Ok(Some(product)) => LoadState::Loaded(product),
                Ok(None) => LoadState::Missing,
                Err(e) => {
                    log::error!("Failed to load product {}: {}", id, e);
                    LoadState::Failed(e)
                }
            };
            if product_id.get_untracked() == Some(id) {
                set_state.set(next);
            }
        });
    });

    move || match state.get() {
        LoadState::Loading => view! {
            <div class="product-details__loading"><Spinner /></div>
        }
        .into_any(),
        LoadState::Missing => view! { <NotFound /> }.into_any(),
        LoadState::Failed(e) => view! {
            <MessageBar intent=MessageBarIntent::Error>
                <div>{format!("Failed to load product: {}", e)}</div>
            </MessageBar>
        }
        .into_any(),
        LoadState::Loaded(product) => view! { <ProductView product=product /> }.into_any(),
    }
}

#[component]
fn ProductView(product: Product) -> impl IntoView {
    let cart = use_cart();
    let (quantity, set_quantity) = signal(1u32);
    let (added, set_added) = signal::<Option<CartChange>>(None);
    let id = product.id;
    let product = StoredValue::new(product);

    let in_cart = move || cart.quantity_of(id);

    let on_add = move |_| {
        let change = product.with_value(|p| cart.add(p, quantity.get_untracked()));
        if change.is_mutation() {
            set_quantity.set(1);
        }
        set_added.set(Some(change));
    };

    let (title, description, category, image, price, rating) = product.with_value(|p| {
        (
            p.title.clone(),
            p.description.clone(),
            p.category.clone(),
            p.image.clone(),
            p.price,
            p.rating,
        )
    });

    view! {
        <div class="product-details">
            <div class="product-details__image">
                <ProductImage src=image alt=title.clone() />
            </div>
            <div class="product-details__info">
                <p class="product-details__category">{category}</p>
                <h1 class="product-details__title">{title}</h1>
                {rating.map(|rating| view! { <RatingStars rating=rating /> })}
                <p class="product-details__price">{format_usd(price)}</p>
                <p class="product-details__description">{description}</p>

                <Flex align=FlexAlign::Center gap=FlexGap::Large>
                    <div class="quantity-control">
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                        >
                            "-"
                        </Button>
                        <input
                            class="quantity-control__value"
                            type="number"
                            min="1"
                            readonly=true
                            prop:value=move || quantity.get().to_string()
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_quantity.update(|q| *q = q.saturating_add(1))
                        >
                            "+"
                        </Button>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=on_add>
                        "Add to cart"
                    </Button>
                </Flex>

                {move || match added.get() {
                    Some(change) if change.is_mutation() => view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <div>
                                {format!("Added to cart ({} in cart). ", in_cart().unwrap_or_default())}
                                <A href="/shopping-cart">"View cart"</A>
                            </div>
                        </MessageBar>
                    }
                    .into_any(),
                    Some(_) => view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <div>"This product cannot be added to the cart."</div>
                        </MessageBar>
                    }
                    .into_any(),
                    None => view! {}.into_any(),
                }}
            </div>
        </div>
    }
}
