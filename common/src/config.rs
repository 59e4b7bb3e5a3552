//! ワークフロー設定
//!
//! 解析APIのURLとCloudinaryのアップロード先。どちらも実行時に
//! 設定パネルから上書きできる。シークレットは一切持たない
//! （unsigned uploadの契約）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// アップロード先フォルダ（固定）
pub const UPLOAD_FOLDER: &str = "ingredient-checker";

/// アップロード時に付与するタグ（固定、カンマ区切り）
pub const UPLOAD_TAGS: &str = "ingredient,food,analysis";

const PLACEHOLDER_CLOUD_NAME: &str = "YOUR_CLOUD_NAME";
const PLACEHOLDER_UPLOAD_PRESET: &str = "YOUR_UPLOAD_PRESET";

/// ワークフロー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub api_url: String,
    pub cloud_name: String,
    pub upload_preset: String,
    pub folder: String,
    pub tags: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            cloud_name: String::new(),
            upload_preset: String::new(),
            folder: UPLOAD_FOLDER.to_string(),
            tags: UPLOAD_TAGS.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Cloudinaryのアップロードエンドポイント
    pub fn upload_endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    /// ネットワークに出る前の設定チェック
    ///
    /// 未設定・プレースホルダーのままの値があればConfigエラーで
    /// 即座に失敗し、リクエストは一切発行させない
    pub fn ensure_configured(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::Config(
                "API URL not configured. Please check your configuration.".to_string(),
            ));
        }
        if is_unset(&self.cloud_name, PLACEHOLDER_CLOUD_NAME)
            || is_unset(&self.upload_preset, PLACEHOLDER_UPLOAD_PRESET)
        {
            return Err(Error::Config(
                "Cloudinary not configured. Please set your cloud name and upload preset.".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_unset(value: &str, placeholder: &str) -> bool {
    value.trim().is_empty() || value == placeholder
}
