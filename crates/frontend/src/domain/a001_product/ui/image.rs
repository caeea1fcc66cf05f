use leptos::prelude::*;

/// Product image that stays blurred and grey until the browser has loaded it.
///
/// With `fill` the image stretches over its positioned parent, otherwise it is
/// drawn in a fixed 400×1000 box.
#[component]
pub fn ProductImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] fill: bool,
) -> impl IntoView {
    let (loading, set_loading) = signal(true);

    let class = move || {
        let state = if loading.get() {
            "product-image--loading"
        } else {
            "product-image--loaded"
        };
        let mode = if fill { "product-image--fill" } else { "product-image--fixed" };
        format!("product-image {} {}", mode, state)
    };

    if fill {
        view! {
            <img
                src=src
                alt=alt
                class=class
                on:load=move |_| set_loading.set(false)
            />
        }
        .into_any()
    } else {
        view! {
            <img
                src=src
                alt=alt
                width="400"
                height="1000"
                class=class
                on:load=move |_| set_loading.set(false)
            />
        }
        .into_any()
    }
}
