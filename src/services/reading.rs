use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("retail quantity is zero")]
    ZeroRetail,
    #[error("section totals overflow")]
    Overflow,
}

/// 分区扫描数量（男/女/童 × 服装/鞋/香水）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub man_clothing: i64,
    pub man_shoes: i64,
    pub man_perfume: i64,
    pub woman_clothing: i64,
    pub woman_shoes: i64,
    pub woman_perfume: i64,
    pub kids_clothing: i64,
    pub kids_shoes: i64,
    pub kids_perfume: i64,
}

impl SectionCounts {
    /// 返回 (man, woman, kids) 三个分区的小计
    pub fn section_totals(&self) -> Result<(i64, i64, i64), CalcError> {
        let man = checked_sum(&[self.man_clothing, self.man_shoes, self.man_perfume])?;
        let woman = checked_sum(&[self.woman_clothing, self.woman_shoes, self.woman_perfume])?;
        let kids = checked_sum(&[self.kids_clothing, self.kids_shoes, self.kids_perfume])?;
        Ok((man, woman, kids))
    }

    pub fn total(&self) -> Result<i64, CalcError> {
        let (man, woman, kids) = self.section_totals()?;
        checked_sum(&[man, woman, kids])
    }
}

fn checked_sum(values: &[i64]) -> Result<i64, CalcError> {
    values
        .iter()
        .try_fold(0i64, |acc, v| acc.checked_add(*v))
        .ok_or(CalcError::Overflow)
}

/// 整体模式：`reading / retail`，百分比与三位小数均为截断而非四舍五入
///
/// 输出格式：`"<percent>% ~ (<ratio>)"`
pub fn all_sections(reading: i64, retail: i64) -> Result<String, CalcError> {
    if retail == 0 {
        return Err(CalcError::ZeroRetail);
    }
    let ratio = reading as f64 / retail as f64;
    // 百分比可能超出 i64 范围，直接格式化 f64；加 0.0 消除 -0.0
    let percent = (ratio * 100.0).floor() + 0.0;
    let truncated = (ratio * 1000.0).floor() / 1000.0 + 0.0;
    Ok(format!("{:.0}% ~ ({})", percent, format_ratio(truncated)))
}

/// 分区模式：九个分类求和后按整体模式计算
pub fn each_section(counts: &SectionCounts, retail: i64) -> Result<String, CalcError> {
    let total = counts.total()?;
    all_sections(total, retail)
}

// f64 的 Display 对整数值不带小数点（1.0 -> "1"），这里统一补上 ".0"
fn format_ratio(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
