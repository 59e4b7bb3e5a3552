//! APIレスポンスパーサー
//!
//! 解析APIのレスポンスはデプロイによって2形式ある:
//! 1. 判定の素の配列
//! 2. {success, message?, data: {ingredient, data?}} エンベロープ
//!
//! どちらも受け付け、正準のVec<IngredientVerdict>へ落とす

use crate::error::{Error, Result};
use crate::types::{AnalysisEnvelope, IngredientVerdict, UploadResponse};

/// 解析APIのレスポンスボディをパースする
///
/// # Arguments
/// * `body` - レスポンスボディ（JSON文字列）
///
/// # Returns
/// * `Ok(Vec<IngredientVerdict>)` - 1件以上の判定（入力順を保持）
/// * `Err(Error::Api)` - success=falseまたはデータ欠落。messageはそのまま表示される
/// * `Err(Error::NoIngredientFound)` - ingredient=false（成分が写っていない）
/// * `Err(Error::EmptyResult)` - 成功したが判定が0件
pub fn parse_analysis_response(body: &str) -> Result<Vec<IngredientVerdict>> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let verdicts: Vec<IngredientVerdict> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        let envelope: AnalysisEnvelope = serde_json::from_value(value)?;
        if !envelope.success {
            return Err(Error::Api(
                envelope.message.unwrap_or_else(|| "Analysis failed".to_string()),
            ));
        }
        let data = envelope
            .data
            .ok_or_else(|| Error::Api("No ingredient data received".to_string()))?;
        if !data.ingredient {
            return Err(Error::NoIngredientFound);
        }
        data.data
            .ok_or_else(|| Error::Api("No ingredient data received".to_string()))?
    };

    if verdicts.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(verdicts)
}

/// Cloudinaryアップロードのレスポンスをパースする
///
/// 非2xx、またはボディにerrorオブジェクトがあれば失敗。
/// 成功時はsecure_url（HTTPS URL）を返す
pub fn parse_upload_response(ok: bool, status: u16, body: &str) -> Result<String> {
    // 失敗時のボディはJSONとは限らないので、パース不能はデフォルト値へ落とす
    let response: UploadResponse = serde_json::from_str(body).unwrap_or_default();

    if !ok {
        let message = response
            .error
            .map(|e| e.message)
            .unwrap_or_else(|| format!("status {}", status));
        return Err(Error::Upload(message));
    }
    if let Some(error) = response.error {
        return Err(Error::Upload(error.message));
    }
    if response.secure_url.is_empty() {
        return Err(Error::Upload("missing secure_url in response".to_string()));
    }
    Ok(response.secure_url)
}
