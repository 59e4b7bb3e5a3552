//! メインアプリケーションコンポーネント
//!
//! 4画面（upload / loading / results / error）の状態機械と、
//! 検証 -> アップロード -> 解析のパイプラインを束ねる

use ingredient_checker_common::{
    validate_image, AnalyzeRequest, CheckerConfig, Error, IngredientVerdict,
};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileReader};

use crate::api;
use crate::components::{
    error_panel::ErrorPanel, header::Header, loading_indicator::LoadingIndicator,
    results_list::ResultsList, settings_panel::SettingsPanel, upload_area::UploadArea,
};

/// 画面状態
///
/// 常にちょうど1画面だけが表示され、残りはhiddenクラスを持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Upload,
    Loading,
    Results,
    Error,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Upload => "upload",
            ViewState::Loading => "loading",
            ViewState::Results => "results",
            ViewState::Error => "error",
        }
    }
}

/// 選択中の画像のメタ情報
///
/// File本体はパイプラインのFutureへ移動するため、表示用のメタだけ残す
#[derive(Debug, Clone, Default)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (view_state, set_view_state) = signal(ViewState::Upload);
    let (config, set_config) = signal(CheckerConfig::default());
    let (selected, set_selected) = signal(None::<SelectedImage>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (verdicts, set_verdicts) = signal(Vec::<IngredientVerdict>::new());
    let (error_message, set_error_message) = signal(String::new());

    // 進行中パイプラインの世代番号。新しいファイルを受け付けるたびに
    // 増やし、古いFutureの結果は着信しても破棄する
    let attempt_seq = StoredValue::new(0u64);

    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let camera_input_ref = NodeRef::<leptos::html::Input>::new();

    let show_error = move |error: &Error| {
        gloo::console::error!(format!("{error}"));
        set_error_message.set(error.user_message());
        set_view_state.set(ViewState::Error);
    };

    // ファイル受付: 検証 -> プレビュー読込 -> アップロード+解析
    let process_file = move |file: File| {
        let meta = SelectedImage {
            file_name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        };

        let attempt = attempt_seq.get_value() + 1;
        attempt_seq.set_value(attempt);

        // 前回の選択・プレビュー・結果はここで破棄される
        set_verdicts.set(Vec::new());
        set_preview_url.set(None);

        if let Err(e) = validate_image(&meta.mime_type, meta.size) {
            set_selected.set(None);
            show_error(&Error::from(e));
            return;
        }

        set_selected.set(Some(meta));
        start_preview(&file, set_preview_url);
        set_view_state.set(ViewState::Loading);

        let config = config.get_untracked();
        spawn_local(async move {
            let result = run_pipeline(&config, file).await;
            if attempt_seq.get_value() != attempt {
                // 新しい選択が始まっているので古い結果は捨てる
                return;
            }
            match result {
                Ok(list) => {
                    set_verdicts.set(list);
                    set_view_state.set(ViewState::Results);
                }
                Err(e) => show_error(&e),
            }
        });
    };

    // リセット/リトライ: 選択・プレビュー・結果・入力値をすべて破棄して
    // アップロード画面へ戻る。file inputを空にするので同じファイルを
    // 選び直してもchangeが発火する
    let reset = move |_: ()| {
        attempt_seq.set_value(attempt_seq.get_value() + 1);
        set_selected.set(None);
        set_preview_url.set(None);
        set_verdicts.set(Vec::new());
        set_error_message.set(String::new());
        for input_ref in [file_input_ref, camera_input_ref] {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
        set_view_state.set(ViewState::Upload);
    };

    view! {
        <div class="container" data-state=move || view_state.get().as_str()>
            <Header />

            <SettingsPanel config=config set_config=set_config />

            <div
                class="section upload-section"
                class:hidden=move || view_state.get() != ViewState::Upload
            >
                <UploadArea
                    on_file=process_file
                    file_input_ref=file_input_ref
                    camera_input_ref=camera_input_ref
                />
            </div>

            <div
                class="section loading-section"
                class:hidden=move || view_state.get() != ViewState::Loading
            >
                <LoadingIndicator selected=selected />
            </div>

            <div
                class="section results-section"
                class:hidden=move || view_state.get() != ViewState::Results
            >
                <ResultsList verdicts=verdicts preview_url=preview_url on_reset=reset />
            </div>

            <div
                class="section error-section"
                class:hidden=move || view_state.get() != ViewState::Error
            >
                <ErrorPanel message=error_message on_retry=reset />
            </div>
        </div>
    }
}

/// アップロード -> 解析の2段パイプライン
///
/// 設定チェックはネットワークに出る前に行う。1段目が失敗したら
/// 2段目のリクエストは発行しない
async fn run_pipeline(
    config: &CheckerConfig,
    file: File,
) -> Result<Vec<IngredientVerdict>, Error> {
    config.ensure_configured()?;
    let image_url = api::cloudinary::upload_image(config, &file).await?;
    let request = AnalyzeRequest {
        image_url,
        filename: file.name(),
        mime_type: file.type_(),
    };
    api::analysis::analyze(&config.api_url, &request).await
}

/// FileReaderでプレビュー用Data URLを読み込む
///
/// プレビューは補助機能なので、読み込み失敗は黙って無視する
fn start_preview(file: &File, set_preview_url: WriteSignal<Option<String>>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_preview_url.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    let _ = reader.read_as_data_url(file);
}
