use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Một bài đăng có ngày, nhãn tác phẩm và URL gốc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRecord {
    pub id: u32,
    /// Ngày dạng `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub work: String,
    pub url: String,
}

impl PostRecord {
    /// Khóa năm: 4 ký tự đầu của `date` (hoặc cả chuỗi nếu ngắn hơn).
    pub fn year(&self) -> &str {
        self.date.get(..4).unwrap_or(&self.date)
    }

    /// Ngày đã parse, `None` nếu chuỗi không đúng định dạng ISO.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Tọa độ pixel trên canvas hoặc trên trang.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
