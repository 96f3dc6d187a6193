use chrono::NaiveTime;

use crate::common::api::error::ApiError;

/// `HH:MM` 输入拆分后的结果，时、分保留原始字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: String,
    pub minute: String,
    time: NaiveTime,
}

impl TimeOfDay {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        let input = input.trim();
        let (hour, minute) = input
            .split_once(':')
            .filter(|(hour, minute)| is_clock_field(hour) && is_clock_field(minute))
            .ok_or_else(|| ApiError::Validation(format!("时间格式应为 HH:MM: {:?}", input)))?;

        let time = hour
            .parse::<u32>()
            .ok()
            .zip(minute.parse::<u32>().ok())
            .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .ok_or_else(|| ApiError::Validation(format!("无效的时间: {:?}", input)))?;

        Ok(Self {
            hour: hour.to_string(),
            minute: minute.to_string(),
            time,
        })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

/// 一到两位 ASCII 数字
fn is_clock_field(field: &str) -> bool {
    (1..=2).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

/// 允许下载的每日时间段。结束早于开始表示跨越午夜。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeWindow {
    pub fn parse(start: &str, end: &str) -> Result<Self, ApiError> {
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }

    pub fn passes_midnight(&self) -> bool {
        self.start.time > self.end.time
    }

    /// 开始时刻包含在内，结束时刻不包含；开始等于结束时窗口为空
    pub fn contains(&self, now: NaiveTime) -> bool {
        let (start, end) = (self.start.time, self.end.time);
        if self.passes_midnight() {
            now >= start || now < end
        } else {
            now >= start && now < end
        }
    }
}
