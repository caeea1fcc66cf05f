use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::{ProductImage, RatingStars};
use crate::shared::number_format::format_usd;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<String>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Selected category lives in the query string so the page can be linked
    let query = use_query_map();
    let category = Memo::new(move |_| {
        query.with(|q| q.get("category").filter(|c| !c.trim().is_empty()))
    });

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_categories().await {
            Ok(v) => set_categories.set(v),
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
    });

    Effect::new(move |_| {
        let selected = category.get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match selected.as_deref() {
                Some(c) => api::fetch_products_in_category(c).await,
                None => api::fetch_products().await,
            };
            // A newer selection has already been requested
            if category.get_untracked() != selected {
                return;
            }
            match result {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let chip_class = |active: bool| {
        if active {
            "category-chip category-chip--active"
        } else {
            "category-chip"
        }
    };

    view! {
        <div class="product-list">
            <h1 class="page-title">"Products"</h1>

            <nav class="product-list__filters">
                <A href="/products" attr:class=move || chip_class(category.get().is_none())>
                    "All"
                </A>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|name| {
                            let href = format!("/products?category={}", urlencoding::encode(&name));
                            let value = name.clone();
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        chip_class(category.get().as_deref() == Some(value.as_str()))
                                    }
                                >
                                    {name}
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div>{format!("Failed to load products: {}", e)}</div>
                </MessageBar>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="product-list__loading"><Spinner /></div> }
            >
                <div class="product-grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);

    view! {
        <A href=href attr:class="product-card">
            <div class="product-card__image">
                <ProductImage src=product.image.clone() alt=product.title.clone() fill=true />
            </div>
            <div class="product-card__body">
                <p class="product-card__category">{product.category.clone()}</p>
                <h3 class="product-card__title">{product.title.clone()}</h3>
                {product.rating.map(|rating| view! { <RatingStars rating=rating /> })}
                <p class="product-card__description">{product.description.clone()}</p>
                <p class="product-card__price">{format_usd(product.price)}</p>
            </div>
        </A>
    }
}
