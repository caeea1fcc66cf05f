use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::number_format::format_usd;

/// Subtotal, shipping and grand total. Totals are re-derived from the store
/// on every cart change.
#[component]
pub fn CartSummaryPanel() -> impl IntoView {
    let cart = use_cart();
    let summary = Memo::new(move |_| cart.summary());

    view! {
        <div class="cart-summary">
            <div class="cart-summary__row">
                <p>"Subtotal"</p>
                <p>{move || format_usd(summary.get().subtotal)}</p>
            </div>
            <div class="cart-summary__row">
                <p>"Shipping"</p>
                <p>{move || format_usd(summary.get().shipping)}</p>
            </div>
            <hr />
            <div class="cart-summary__row cart-summary__row--total">
                <p>"Total"</p>
                <div>
                    <p class="cart-summary__total">{move || format_usd(summary.get().total)}</p>
                    <p class="cart-summary__note">"including VAT"</p>
                </div>
            </div>
            // Payment is handled outside the storefront
            <Button appearance=ButtonAppearance::Primary>
                "Check out"
            </Button>
        </div>
    }
}
