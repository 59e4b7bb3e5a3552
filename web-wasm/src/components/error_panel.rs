//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorPanel<F>(message: ReadSignal<String>, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Copy,
{
    view! {
        <div class="error-panel">
            <div class="error-icon">"⚠️"</div>
            <p class="error-text">{move || message.get()}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry(())>
                "Try Again"
            </button>
        </div>
    }
}
