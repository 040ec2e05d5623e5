use thiserror::Error;

use crate::api_models::{CalculateForm, CategoryField, ScanMode};
use crate::i18n::Strings;
use crate::services::reading::{all_sections, each_section, CalcError, SectionCounts};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("required fields are empty")]
    EmptyFields,
    #[error("missing value for {0}")]
    MissingField(String),
    #[error("retail value is missing")]
    MissingRetail,
    #[error("value is not an integer")]
    InvalidNumber,
    #[error("retail value is zero")]
    ZeroRetail,
    #[error("{0}")]
    Unexpected(String),
}

impl SubmissionError {
    /// 按界面语言生成提示文本
    pub fn message(&self, strings: &Strings) -> String {
        match self {
            SubmissionError::EmptyFields => strings.err_empty.to_string(),
            SubmissionError::MissingField(label) => strings.missing_field(label),
            SubmissionError::MissingRetail => strings.err_retail.to_string(),
            SubmissionError::InvalidNumber => strings.err_invalid.to_string(),
            SubmissionError::ZeroRetail => strings.err_zero_retail.to_string(),
            SubmissionError::Unexpected(desc) => format!("Unexpected error: {}", desc),
        }
    }
}

impl From<CalcError> for SubmissionError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::ZeroRetail => SubmissionError::ZeroRetail,
            other => SubmissionError::Unexpected(other.to_string()),
        }
    }
}

/// 校验并计算一次表单提交
///
/// 顺序：模式 -> 必填 -> 整数解析 -> retail 非零 -> 计算。
/// 模式无效时返回 `Ok(None)`，不计算也不报错。
pub fn evaluate(form: &CalculateForm) -> Result<Option<String>, SubmissionError> {
    match form.scan_mode() {
        Some(ScanMode::All) => evaluate_all(form).map(Some),
        Some(ScanMode::Each) => evaluate_each(form).map(Some),
        None => Ok(None),
    }
}

fn evaluate_all(form: &CalculateForm) -> Result<String, SubmissionError> {
    let (Some(reading), Some(retail)) = (present(&form.reading), present(&form.retail)) else {
        return Err(SubmissionError::EmptyFields);
    };
    let reading = parse_int(reading)?;
    let retail = parse_retail(retail)?;
    all_sections(reading, retail).map_err(SubmissionError::from)
}

fn evaluate_each(form: &CalculateForm) -> Result<String, SubmissionError> {
    let mut raw = Vec::with_capacity(CategoryField::ALL.len());
    for field in CategoryField::ALL {
        match form.category(field).filter(|v| !v.is_empty()) {
            Some(value) => raw.push(value),
            None => return Err(SubmissionError::MissingField(field.label())),
        }
    }
    let retail = present(&form.retail).ok_or(SubmissionError::MissingRetail)?;

    let mut values = [0i64; 9];
    for (slot, value) in values.iter_mut().zip(raw) {
        *slot = parse_int(value)?;
    }
    let [mc, ms, mp, wc, ws, wp, kc, ks, kp] = values;
    let counts = SectionCounts {
        man_clothing: mc,
        man_shoes: ms,
        man_perfume: mp,
        woman_clothing: wc,
        woman_shoes: ws,
        woman_perfume: wp,
        kids_clothing: kc,
        kids_shoes: ks,
        kids_perfume: kp,
    };
    let retail = parse_retail(retail)?;
    each_section(&counts, retail).map_err(SubmissionError::from)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_int(raw: &str) -> Result<i64, SubmissionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SubmissionError::InvalidNumber)
}

fn parse_retail(raw: &str) -> Result<i64, SubmissionError> {
    match parse_int(raw)? {
        0 => Err(SubmissionError::ZeroRetail),
        retail => Ok(retail),
    }
}
