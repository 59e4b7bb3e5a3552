//! 結果リストコンポーネント
//!
//! 行HTMLはcommon側の純関数で組み立てる（3フィールドとも
//! エスケープ済みのHTMLが返る）

use ingredient_checker_common::{results_html, IngredientVerdict};
use leptos::prelude::*;

#[component]
pub fn ResultsList<F>(
    verdicts: ReadSignal<Vec<IngredientVerdict>>,
    preview_url: ReadSignal<Option<String>>,
    on_reset: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Copy,
{
    view! {
        <div class="results">
            <h2>"Analysis Results"</h2>
            {move || {
                preview_url
                    .get()
                    .map(|url| view! { <img class="preview-image" src=url alt="Selected label" /> })
            }}
            <div
                class="results-container"
                inner_html=move || results_html(&verdicts.get())
            ></div>
            <button class="btn btn-primary" on:click=move |_| on_reset(())>
                "Check Another Image"
            </button>
        </div>
    }
}
