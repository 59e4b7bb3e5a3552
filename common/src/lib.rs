//! Ingredient Checker Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod config;
pub mod error;
pub mod parser;
pub mod render;
pub mod status;
pub mod types;
pub mod validate;

pub use config::CheckerConfig;
pub use error::{Error, Result};
pub use parser::{parse_analysis_response, parse_upload_response};
pub use render::{escape_html, ingredient_row_html, results_html};
pub use status::StatusCategory;
pub use types::{AnalyzeRequest, IngredientVerdict};
pub use validate::{validate_image, ValidationError, MAX_FILE_SIZE};
