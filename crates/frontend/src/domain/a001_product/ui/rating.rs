use contracts::domain::a001_product::Rating;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn RatingStars(rating: Rating) -> impl IntoView {
    let (filled, outline) = rating.stars();

    view! {
        <div class="rating">
            <span class="rating__rate">{format!("{:.1}", rating.rate)}</span>
            <span class="rating__stars">
                {(0..filled).map(|_| icon("star")).collect_view()}
                {(0..outline).map(|_| icon("star-outline")).collect_view()}
            </span>
            <span class="rating__count">{format!("See all {} reviews", rating.count)}</span>
        </div>
    }
}
