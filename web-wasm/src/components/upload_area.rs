//! アップロードエリアコンポーネント
//!
//! ファイル選択・カメラ撮影・ドラッグ&ドロップの3経路を
//! 1つのコールバックへ正規化する

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, MouseEvent};

#[component]
pub fn UploadArea<F>(
    on_file: F,
    file_input_ref: NodeRef<leptos::html::Input>,
    camera_input_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView
where
    F: Fn(File) + 'static + Copy,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // 複数ドロップされたときは先頭の1枚だけを採用する
    let handle_files = move |files: FileList| {
        if let Some(file) = files.get(0) {
            on_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    // エリア自体のクリックはファイル選択ダイアログを開く。
    // ボタンと隠しinputはstop_propagationで二重発火を防ぐ
    let on_area_click = move |_: MouseEvent| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_area_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop a photo of the ingredient label"</p>
            <p class="text-muted">"JPG, PNG, GIF, WebP (max 10MB)"</p>
            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        if let Some(input) = file_input_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "Choose File"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        if let Some(input) = camera_input_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "Take Photo"
                </button>
            </div>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input_ref
                on:click=move |ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
            <input
                type="file"
                accept="image/*"
                capture="environment"
                class="hidden"
                node_ref=camera_input_ref
                on:click=move |ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
