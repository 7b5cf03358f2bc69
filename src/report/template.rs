//! The report template and placeholder substitution
//!
//! The template prose and the 34-field extraction order are one versioned
//! contract: `TOKEN_COUNT` placeholders (`@`) consume year, month, then the
//! formatted values, strictly left to right. Keep `REPORT_TEMPLATE` and
//! `FIELD_SPECS` in sync when either changes; the unit tests pin the counts
//! together.

use crate::error::{ScribeError, ScribeResult};
use crate::excel::extractor::FIELD_COUNT;

/// The substitution point in the template
pub const PLACEHOLDER: char = '@';

/// year + month + the 34 report values
pub const TOKEN_COUNT: usize = FIELD_COUNT + 2;

/// Report prose. Every `@` is replaced in order by the next token.
pub const REPORT_TEMPLATE: &str = "主旨：陳本院@年@月份藥品及衛材耗用金額總報表，如說明，請鑒核。

說明：
藥品門診耗用成本@元，住院耗用成本@元，診所耗用成本@元，花蓮榮家耗用成本@元，合計@元。

衛材門診耗用成本@元，住院耗用成本@元，診所耗用成本@元，花蓮榮家耗用成本@元，合計@元。

門診醫療收入為@元。門診藥品耗用成本@元，佔門診收入@，門診衛材耗用成本@元，佔門診收入@。

住院醫療收入@元。住院藥品耗用成本@元，佔住院收入@，住院衛材耗用成本@元，佔住院收入@。

藥品及衛材耗用量總金額@元，門診住院醫療總收入@元，藥衛材耗用成本佔全院總收入@。

本院門住院藥品耗用成本@元，佔本院門住院醫療收入@元，比率@；本院門住院診衛材耗用成本@元，佔本院門住院醫療收入@，本院門住院藥衛材耗用成本@元，佔本院門住院醫療收入@。

藥品庫存比@；衛材庫存比@；藥衛材庫存比@，藥衛材週轉率@。

擬辦：
奉核後文存備查。";

/// Replace placeholders left to right with the next unconsumed token.
/// When tokens run out, remaining placeholders stay as-is; surplus tokens
/// are dropped.
pub fn fill(template: &str, tokens: &[String]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut tokens = tokens.iter();
    for c in template.chars() {
        if c == PLACEHOLDER {
            if let Some(token) = tokens.next() {
                filled.push_str(token);
                continue;
            }
        }
        filled.push(c);
    }
    filled
}

/// Like [`fill`], but refuses mismatched placeholder/token counts
pub fn fill_strict(template: &str, tokens: &[String]) -> ScribeResult<String> {
    let markers = template.matches(PLACEHOLDER).count();
    if markers != tokens.len() {
        return Err(ScribeError::TokenCountMismatch {
            markers,
            tokens: tokens.len(),
        });
    }
    Ok(fill(template, tokens))
}

/// Build the token sequence (year, month, values) and fill the report
/// template. `values` must hold exactly [`FIELD_COUNT`] formatted entries.
pub fn render_report(
    year: u32,
    month: u32,
    values: &[String],
    strict: bool,
) -> ScribeResult<String> {
    if values.len() != FIELD_COUNT {
        return Err(ScribeError::ValueCountInvariant {
            expected: FIELD_COUNT,
            actual: values.len(),
        });
    }
    let mut tokens = Vec::with_capacity(TOKEN_COUNT);
    tokens.push(year.to_string());
    tokens.push(month.to_string());
    tokens.extend_from_slice(values);
    if strict {
        fill_strict(REPORT_TEMPLATE, &tokens)
    } else {
        Ok(fill(REPORT_TEMPLATE, &tokens))
    }
}
