//! 解析APIクライアント
//!
//! 画像URLをJSONでPOSTし、成分ごとの判定リストを受け取る。
//! レスポンスボディの解釈（素の配列/エンベロープ）はcommon側の
//! パーサーに委ねる

use ingredient_checker_common::{
    parse_analysis_response, AnalyzeRequest, Error, IngredientVerdict, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::network_error;

/// 画像URLを解析APIへ送信する
///
/// 2xx以外はHttpエラー（404/500は専用メッセージに割り当てられる）
pub async fn analyze(api_url: &str, request_body: &AnalyzeRequest) -> Result<Vec<IngredientVerdict>> {
    let body = serde_json::to_string(request_body)?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(api_url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let text_promise = resp.text().map_err(network_error)?;
    let text = JsFuture::from(text_promise).await.map_err(network_error)?;
    let body = text.as_string().unwrap_or_default();

    parse_analysis_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_matches_wire_contract() {
        let request = AnalyzeRequest {
            image_url: "https://res.cloudinary.com/demo/image/upload/label.jpg".to_string(),
            filename: "label.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
        };

        let body = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(body.contains("\"imageUrl\""));
        assert!(body.contains("\"filename\""));
        assert!(body.contains("\"mimeType\""));
        assert!(!body.contains("\"image_url\""));
    }
}
