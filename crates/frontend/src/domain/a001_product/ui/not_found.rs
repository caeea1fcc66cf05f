use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"NotFound"</h1>
            <p>"Could not find requested resource"</p>
        </div>
    }
}
