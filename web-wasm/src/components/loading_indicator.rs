//! ローディング表示コンポーネント
//!
//! アップロードと解析の2リクエストは、ユーザーには1つの
//! 「解析中」ステップとして見せる

use crate::app::SelectedImage;
use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(selected: ReadSignal<Option<SelectedImage>>) -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <div class="spinner"></div>
            <p class="loading-text">"Analyzing your ingredient label..."</p>
            {move || {
                selected
                    .get()
                    .map(|image| view! { <p class="text-muted">{image.file_name}</p> })
            }}
        </div>
    }
}
