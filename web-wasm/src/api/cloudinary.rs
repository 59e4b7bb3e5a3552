//! Cloudinary unsigned uploadクライアント
//!
//! multipartでファイル本体と固定メタデータを送り、secure_urlを得る。
//! クライアントシークレットは一切送らない（unsigned uploadの契約）

use ingredient_checker_common::{parse_upload_response, CheckerConfig, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use super::network_error;

/// 画像をアップロードして公開HTTPS URLを得る
///
/// # Arguments
/// * `config` - cloud name / upload preset / folder / tags
/// * `file` - 検証済みの画像ファイル
///
/// # Returns
/// レスポンスの`secure_url`
pub async fn upload_image(config: &CheckerConfig, file: &File) -> Result<String> {
    let form = FormData::new().map_err(network_error)?;
    form.append_with_blob("file", file).map_err(network_error)?;
    form.append_with_str("upload_preset", &config.upload_preset)
        .map_err(network_error)?;
    form.append_with_str("folder", &config.folder)
        .map_err(network_error)?;
    form.append_with_str("tags", &config.tags)
        .map_err(network_error)?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(form.as_ref()));

    let request =
        Request::new_with_str_and_init(&config.upload_endpoint(), &opts).map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    let text_promise = resp.text().map_err(network_error)?;
    let text = JsFuture::from(text_promise).await.map_err(network_error)?;
    let body = text.as_string().unwrap_or_default();

    parse_upload_response(resp.ok(), resp.status(), &body)
}
