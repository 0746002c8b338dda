// 发布日期范围解析
//
// 把 "2009" / "2009-07" / "2009-07-25" 这类不完整日期展开成具体日期，
// 作为范围起点时取最早的一天，作为范围终点时取最晚的一天。

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref FULL_DATE_PATTERN: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap();
    static ref YEAR_MONTH_PATTERN: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})$").unwrap();
    static ref YEAR_PATTERN: Regex = Regex::new(r"^([0-9]{4})$").unwrap();
}

/// 日期字符串不符合 YYYY / YYYY-MM / YYYY-MM-DD 中任何一种
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format: {raw:?}")]
pub struct InvalidDateFormat {
    pub raw: String,
}

impl InvalidDateFormat {
    fn new(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }
}

/// 日期边界在范围中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundRole {
    Start,
    End,
}

/// 解析后的具体日期边界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBound {
    pub date: NaiveDate,
    pub role: BoundRole,
}

impl DateBound {
    pub fn resolve(raw: &str, role: BoundRole) -> Result<Self, InvalidDateFormat> {
        let date = resolve(raw, role == BoundRole::Start)?;
        Ok(Self { date, role })
    }
}

/// 把不完整日期解析成具体日期。
///
/// 只看输入字符串和角色，与系统时间、时区无关。
pub fn resolve(raw: &str, is_range_start: bool) -> Result<NaiveDate, InvalidDateFormat> {
    let invalid = || InvalidDateFormat::new(raw);

    if let Some(caps) = FULL_DATE_PATTERN.captures(raw) {
        let year = parse_component(&caps[1]).ok_or_else(invalid)?;
        let month = parse_component(&caps[2]).ok_or_else(invalid)?;
        let day = parse_component(&caps[3]).ok_or_else(invalid)?;
        return NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid);
    }

    if let Some(caps) = YEAR_MONTH_PATTERN.captures(raw) {
        let year = parse_component(&caps[1]).ok_or_else(invalid)? as i32;
        let month = parse_component(&caps[2]).ok_or_else(invalid)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        return if is_range_start {
            Ok(first)
        } else {
            last_day_of_month(first).ok_or_else(invalid)
        };
    }

    if let Some(caps) = YEAR_PATTERN.captures(raw) {
        let year = parse_component(&caps[1]).ok_or_else(invalid)? as i32;
        let (month, day) = if is_range_start { (1, 1) } else { (12, 31) };
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid);
    }

    Err(invalid())
}

fn parse_component(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}
