//! 結果リストのHTML組み立て
//!
//! 判定のリストから表示用の行HTMLを純関数で組み立てる。
//! 解析APIから返るテキストは信頼できないため、3フィールドとも
//! 必ずエスケープしてから埋め込む

use crate::status::StatusCategory;
use crate::types::IngredientVerdict;

/// HTMLエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 成分1件分の行HTML
///
/// アイコン・文字色・背景色はstatus文字列から解決したカテゴリで決まる
pub fn ingredient_row_html(verdict: &IngredientVerdict) -> String {
    let category = StatusCategory::from_status(&verdict.status);
    format!(
        concat!(
            r#"<div class="ingredient-item" style="background-color: {tint}">"#,
            r#"<div class="status-indicator {class}">{icon}</div>"#,
            r#"<div class="ingredient-content">"#,
            r#"<div class="ingredient-name">{name}</div>"#,
            r#"<div class="ingredient-status" style="color: {color}">{status}</div>"#,
            r#"<div class="ingredient-reason">{reason}</div>"#,
            "</div></div>"
        ),
        tint = category.background(),
        class = category.css_class(),
        icon = category.icon(),
        name = escape_html(&verdict.name),
        color = category.color(),
        status = escape_html(&verdict.status),
        reason = escape_html(&verdict.reason),
    )
}

/// 入力順を保ったまま全行を連結する
pub fn results_html(verdicts: &[IngredientVerdict]) -> String {
    verdicts.iter().map(ingredient_row_html).collect()
}
