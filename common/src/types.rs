//! ワークフローの型定義
//!
//! Web(WASM)と共有される型:
//! - IngredientVerdict: 成分ごとの判定
//! - AnalyzeRequest: 解析APIへのリクエストボディ
//! - AnalysisEnvelope / AnalysisData: 解析APIレスポンスのエンベロープ形式
//! - UploadResponse: Cloudinaryアップロードのレスポンス

use serde::{Deserialize, Serialize};

/// 成分ごとの判定
///
/// デプロイによってフィールド名に揺れがある（`name`/`ingredient`、
/// `reason`/`effect`）ため、aliasで両方を受け付ける。
/// シリアライズ時は正準形の`name`/`reason`を出力する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientVerdict {
    #[serde(alias = "ingredient")]
    pub name: String,
    pub status: String,
    #[serde(alias = "effect")]
    pub reason: String,
}

/// 解析APIへのリクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub image_url: String,
    pub filename: String,
    pub mime_type: String,
}

/// 解析APIレスポンスのエンベロープ形式
///
/// `success=false`のときは`message`をそのままユーザーへ表示する
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisEnvelope {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<AnalysisData>,
}

/// エンベロープ内の成分データ
///
/// `ingredient=false`は「成分が写っていなかった」という
/// 正常系の終端であり、通信エラーとは区別する
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisData {
    pub ingredient: bool,
    pub data: Option<Vec<IngredientVerdict>>,
}

/// Cloudinaryアップロードのレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub secure_url: String,
    pub error: Option<UploadErrorBody>,
}

/// アップロード失敗時のエラーボディ
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // IngredientVerdict テスト
    // =============================================

    #[test]
    fn test_verdict_deserialize_canonical_fields() {
        let json = r#"{"name": "Vitamin C", "status": "good", "reason": "Antioxidant vitamin"}"#;

        let verdict: IngredientVerdict = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(verdict.name, "Vitamin C");
        assert_eq!(verdict.status, "good");
        assert_eq!(verdict.reason, "Antioxidant vitamin");
    }

    #[test]
    fn test_verdict_deserialize_aliased_fields() {
        // もう一方のデプロイ: ingredient/effect のフィールド名
        let json = r#"{"ingredient": "Trans Fat", "status": "don't touch", "effect": "Raises bad cholesterol"}"#;

        let verdict: IngredientVerdict = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(verdict.name, "Trans Fat");
        assert_eq!(verdict.status, "don't touch");
        assert_eq!(verdict.reason, "Raises bad cholesterol");
    }

    #[test]
    fn test_verdict_deserialize_missing_fields() {
        let json = r#"{"status": "avoid"}"#;

        let verdict: IngredientVerdict = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(verdict.name, ""); // デフォルト値
        assert_eq!(verdict.reason, ""); // デフォルト値
    }

    #[test]
    fn test_verdict_serialize_canonical() {
        let verdict = IngredientVerdict {
            name: "Organic Quinoa".to_string(),
            status: "healthy".to_string(),
            reason: "Complete protein source".to_string(),
        };

        let json = serde_json::to_string(&verdict).expect("シリアライズ失敗");
        assert!(json.contains("\"name\":\"Organic Quinoa\""));
        assert!(json.contains("\"reason\":\"Complete protein source\""));
        assert!(!json.contains("\"ingredient\""));
        assert!(!json.contains("\"effect\""));
    }

    // =============================================
    // AnalyzeRequest テスト
    // =============================================

    #[test]
    fn test_analyze_request_serialize_camel_case() {
        let request = AnalyzeRequest {
            image_url: "https://res.cloudinary.com/demo/image/upload/label.jpg".to_string(),
            filename: "label.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"imageUrl\":\"https://res.cloudinary.com/demo/image/upload/label.jpg\""));
        assert!(json.contains("\"filename\":\"label.jpg\""));
        assert!(json.contains("\"mimeType\":\"image/jpeg\""));
    }

    #[test]
    fn test_analyze_request_roundtrip() {
        let original = AnalyzeRequest {
            image_url: "https://example.com/a.png".to_string(),
            filename: "a.png".to_string(),
            mime_type: "image/png".to_string(),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: AnalyzeRequest = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(original, restored);
    }

    // =============================================
    // エンベロープ テスト
    // =============================================

    #[test]
    fn test_envelope_deserialize_full() {
        let json = r#"{
            "success": true,
            "data": {
                "ingredient": true,
                "data": [{"name": "Sugar", "status": "avoid", "reason": "Added sugar"}]
            }
        }"#;

        let envelope: AnalysisEnvelope = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(envelope.success);
        let data = envelope.data.expect("dataがない");
        assert!(data.ingredient);
        assert_eq!(data.data.expect("成分リストがない").len(), 1);
    }

    #[test]
    fn test_envelope_deserialize_failure_message() {
        let json = r#"{"success": false, "message": "Image could not be processed"}"#;

        let envelope: AnalysisEnvelope = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Image could not be processed"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_deserialize_unknown_object() {
        // エンベロープの形をしていないオブジェクトはデフォルト値に落ちる
        let json = r#"{"foo": 1}"#;

        let envelope: AnalysisEnvelope = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!envelope.success);
        assert!(envelope.message.is_none());
    }

    // =============================================
    // UploadResponse テスト
    // =============================================

    #[test]
    fn test_upload_response_deserialize_success() {
        let json = r#"{"secure_url": "https://res.cloudinary.com/demo/image/upload/x.jpg", "public_id": "x"}"#;

        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.secure_url, "https://res.cloudinary.com/demo/image/upload/x.jpg");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_upload_response_deserialize_error_body() {
        let json = r#"{"error": {"message": "Upload preset not found"}}"#;

        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.secure_url, "");
        assert_eq!(response.error.expect("errorがない").message, "Upload preset not found");
    }
}
