pub mod header;

use header::Header;
use leptos::prelude::*;

/// Page chrome: header on top, routed page below.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, nav, cart badge)         |
/// +------------------------------------------+
/// |  Routed page                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
