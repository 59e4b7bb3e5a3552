//! 設定パネルコンポーネント
//!
//! 解析APIのURLとCloudinaryの接続先を初回利用前に設定する。
//! unsigned upload presetとcloud nameは公開情報なのでそのまま入力できる

use ingredient_checker_common::CheckerConfig;
use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    config: ReadSignal<CheckerConfig>,
    set_config: WriteSignal<CheckerConfig>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-url">"Analysis API URL"</label>
                    <input
                        type="text"
                        id="api-url"
                        placeholder="https://example.com/webhook/..."
                        prop:value=move || config.get().api_url
                        on:input=move |ev| {
                            set_config.update(|c| c.api_url = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="cloud-name">"Cloudinary Cloud Name"</label>
                    <input
                        type="text"
                        id="cloud-name"
                        placeholder="YOUR_CLOUD_NAME"
                        prop:value=move || config.get().cloud_name
                        on:input=move |ev| {
                            set_config.update(|c| c.cloud_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="upload-preset">"Cloudinary Upload Preset"</label>
                    <input
                        type="text"
                        id="upload-preset"
                        placeholder="YOUR_UPLOAD_PRESET"
                        prop:value=move || config.get().upload_preset
                        on:input=move |ev| {
                            set_config.update(|c| c.upload_preset = event_target_value(&ev));
                        }
                    />
                    <p class="text-muted">"Unsigned preset only. No API secret is ever sent."</p>
                </div>
            </div>
        </div>
    }
}
