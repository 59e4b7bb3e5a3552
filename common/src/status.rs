//! ステータス分類
//!
//! 解析APIが返すstatus文字列を閉じたカテゴリへ正規化し、
//! 表示用のアイコン・文字色・背景色・CSSクラスへ全域写像する

/// 判定カテゴリ
///
/// 認識できないstatusはNeutralへフォールバックする（エラーにはしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Healthy,
    Good,
    Avoid,
    VeryBad,
    Neutral,
}

impl StatusCategory {
    /// status文字列からカテゴリを解決する
    ///
    /// 大文字小文字を区別せず、前後の空白は無視する
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "healthy" => StatusCategory::Healthy,
            "good" | "okay" | "can eat" => StatusCategory::Good,
            "avoid" | "bad" => StatusCategory::Avoid,
            "very bad" | "don't touch" => StatusCategory::VeryBad,
            _ => StatusCategory::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "healthy",
            StatusCategory::Good => "good",
            StatusCategory::Avoid => "avoid",
            StatusCategory::VeryBad => "very-bad",
            StatusCategory::Neutral => "neutral",
        }
    }

    /// ステータスアイコン
    pub fn icon(&self) -> &'static str {
        match self {
            StatusCategory::Healthy | StatusCategory::Good => "✓",
            StatusCategory::Avoid => "!",
            StatusCategory::VeryBad => "✗",
            StatusCategory::Neutral => "?",
        }
    }

    /// ステータスラベルの文字色
    pub fn color(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "#27ae60",
            StatusCategory::Good => "#2ecc71",
            StatusCategory::Avoid => "#e74c3c",
            StatusCategory::VeryBad => "#c0392b",
            StatusCategory::Neutral => "#f39c12",
        }
    }

    /// 行の背景色
    pub fn background(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "rgba(39, 174, 96, 0.05)",
            StatusCategory::Good => "rgba(46, 204, 113, 0.05)",
            StatusCategory::Avoid => "rgba(231, 76, 60, 0.05)",
            StatusCategory::VeryBad => "rgba(192, 57, 43, 0.05)",
            StatusCategory::Neutral => "rgba(243, 156, 18, 0.05)",
        }
    }

    /// ステータスインジケーターのCSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "status-healthy",
            StatusCategory::Good => "status-good",
            StatusCategory::Avoid => "status-bad",
            StatusCategory::VeryBad => "status-very-bad",
            StatusCategory::Neutral => "status-neutral",
        }
    }
}
