//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🥗 Ingredient Checker"</h1>
            <p class="subtitle">"Snap a food label and see which ingredients to avoid"</p>
        </header>
    }
}
