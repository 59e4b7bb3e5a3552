//! エラー型定義

use crate::validate::ValidationError;
use thiserror::Error;

/// ワークフロー共通エラー型
///
/// Displayは技術的な詳細（ログ用）、ユーザーへ見せる1行は
/// `user_message()`で別に引く
#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("analysis API returned status {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("analysis rejected: {0}")]
    Api(String),

    #[error("no ingredient found in the image")]
    NoIngredientFound,

    #[error("analysis returned an empty result")]
    EmptyResult,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// エラー画面に表示する1行メッセージ
    pub fn user_message(&self) -> String {
        match self {
            Error::Config(message) => message.clone(),
            Error::Validation(ValidationError::InvalidType(_)) => {
                "Please select a valid image file (JPG, PNG, GIF, WebP)".to_string()
            }
            Error::Validation(ValidationError::TooLarge(_)) => {
                "File size must be less than 10MB".to_string()
            }
            Error::Upload(_) => {
                "Failed to upload image to Cloudinary. Please try again.".to_string()
            }
            Error::Http(404) => {
                "Analysis service not found. Please check the API configuration.".to_string()
            }
            Error::Http(500) => {
                "Server error occurred during analysis. Please try again later.".to_string()
            }
            Error::Http(_) | Error::Json(_) => {
                "An error occurred during analysis. Please try again.".to_string()
            }
            Error::Network(_) => {
                "Unable to connect to the analysis service. Please check your internet connection and try again."
                    .to_string()
            }
            Error::Api(message) => message.clone(),
            Error::NoIngredientFound => "Ingredient not found in the image".to_string(),
            Error::EmptyResult => {
                "No ingredients found in the image. Please try with a clearer image of ingredient labels."
                    .to_string()
            }
        }
    }
}
