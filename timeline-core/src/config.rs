use serde::{Deserialize, Serialize};

/// Cấu hình bố cục và kiểu dáng timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Chiều rộng canvas (px).
    pub canvas_width: f64,
    /// Chiều cao tối thiểu của canvas (px).
    pub min_height: f64,
    pub margin: Margin,
    pub dot_radius: f64,
    /// Khoảng cách tâm giữa hai chấm liền kề trên một dòng.
    pub dot_gap: f64,
    /// Khoảng hở thêm giữa hai dòng ngắt của cùng một hàng.
    pub line_spacing: f64,
    /// Chiều cao dành cho mỗi dòng ngắt khi tính chiều cao động.
    pub row_height: f64,
    pub packing: PackingMode,
    pub popup_offset: PopupOffset,
    pub dot_color: String,
    pub spine_color: String,
    pub data_source: DataSource,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            min_height: 600.0,
            margin: Margin::default(),
            dot_radius: 13.0,
            dot_gap: 36.0,
            line_spacing: 8.0,
            row_height: 60.0,
            packing: PackingMode::Center,
            popup_offset: PopupOffset::default(),
            dot_color: "#1da1f2".to_string(),
            spine_color: "#fff".to_string(),
            data_source: DataSource::default(),
        }
    }
}

impl TimelineConfig {
    /// Khoảng dịch dọc giữa hai dòng ngắt liên tiếp.
    pub fn line_step(&self) -> f64 {
        2.0 * self.dot_radius + self.line_spacing
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 40.0,
            left: 240.0,
        }
    }
}

/// Độ lệch popup so với chấm: sang phải `x`, lên trên `y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopupOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for PopupOffset {
    fn default() -> Self {
        Self { x: 30.0, y: 60.0 }
    }
}

/// Cách xếp chấm trên một dòng.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackingMode {
    /// Chấm đầu tiên nằm trên trục, các chấm sau trải sang phải.
    Left,
    /// Cả dòng được căn giữa quanh trục.
    #[default]
    Center,
}

/// Nguồn dữ liệu bài đăng cho giao diện.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DataSource {
    /// Bộ dữ liệu mẫu biên dịch sẵn.
    Bundled,
    /// Tải file JSON tĩnh khi mount.
    Fetch { url: String },
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Fetch {
            url: "timeline-data.json".to_string(),
        }
    }
}
