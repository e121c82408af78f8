use chrono::{NaiveDate, NaiveDateTime};

/// 응답용 일시 포맷 (초 단위, UTC)
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}
