//! リモートAPI連携

pub mod analysis;
pub mod cloudinary;

use ingredient_checker_common::Error;
use wasm_bindgen::JsValue;

/// fetch系の失敗（名前解決不可・CORS・中断など）をNetworkエラーへ分類する
///
/// 生のJsValueは画面に出さず、呼び出し側でログにだけ残す
pub(crate) fn network_error(value: JsValue) -> Error {
    Error::Network(format!("{value:?}"))
}
