//! 選択ファイルの検証

use thiserror::Error;

/// 受け付ける画像MIMEタイプ
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// ファイルサイズ上限（10MB）。上限ちょうどは許容し、超過のみ拒否する
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// 検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported image type: {0}")]
    InvalidType(String),

    #[error("file too large: {0} bytes")]
    TooLarge(u64),
}

/// 候補ファイルを検証する
///
/// サイズ超過はMIMEタイプに関わらずTooLargeになる
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), ValidationError> {
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge(size));
    }
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(ValidationError::InvalidType(mime_type.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_all_allowed_types() {
        for mime in ALLOWED_MIME_TYPES {
            assert_eq!(validate_image(mime, 1024), Ok(()));
        }
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let result = validate_image("application/pdf", 1024);
        assert_eq!(result, Err(ValidationError::InvalidType("application/pdf".to_string())));
    }

    #[test]
    fn test_validate_rejects_svg_even_within_limit() {
        let result = validate_image("image/svg+xml", 100);
        assert!(matches!(result, Err(ValidationError::InvalidType(_))));
    }

    #[test]
    fn test_validate_size_boundary_exact_limit_passes() {
        assert_eq!(validate_image("image/jpeg", 10_485_760), Ok(()));
    }

    #[test]
    fn test_validate_size_boundary_one_over_fails() {
        let result = validate_image("image/jpeg", 10_485_761);
        assert_eq!(result, Err(ValidationError::TooLarge(10_485_761)));
    }

    #[test]
    fn test_validate_too_large_wins_regardless_of_type() {
        // サイズ超過はMIMEタイプが不正でもTooLarge
        let result = validate_image("text/plain", 20 * 1024 * 1024);
        assert!(matches!(result, Err(ValidationError::TooLarge(_))));
    }
}
