use serde::{Deserialize, Serialize};

use crate::{Grouping, PackingMode, TimelineConfig};

const YEAR_AXIS_CLEARANCE: f64 = 8.0;

/// Vị trí một chấm trên canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarkerPosition {
    pub record_id: u32,
    /// Vị trí bài đăng trong danh sách đầu vào.
    pub record_index: usize,
    pub x: f64,
    pub y: f64,
    pub line_index: usize,
    pub pos_in_line: usize,
}

/// Một hàng `(năm, tác phẩm)` đã được gán vị trí dọc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutRow {
    pub slot: usize,
    pub year: String,
    pub work: String,
    pub slot_y: f64,
    /// Số dòng ngắt của hàng, luôn >= 1.
    pub line_count: usize,
    pub markers: Vec<MarkerPosition>,
}

/// Mốc nhãn năm, neo vào hàng đầu tiên của năm đó.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearAnchor {
    pub year: String,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    pub max_per_line: usize,
    pub total_lines: usize,
    pub spine_top: f64,
    pub spine_bottom: f64,
    /// Trục nhãn năm; luôn nằm bên trái mép chấm xa nhất về bên trái.
    pub year_axis_x: f64,
    pub years: Vec<YearAnchor>,
    pub rows: Vec<LayoutRow>,
}

impl TimelineLayout {
    pub fn markers(&self) -> impl Iterator<Item = &MarkerPosition> {
        self.rows.iter().flat_map(|row| row.markers.iter())
    }

    pub fn marker(&self, record_id: u32) -> Option<&MarkerPosition> {
        self.markers().find(|marker| marker.record_id == record_id)
    }
}

/// Số chấm tối đa trên một dòng; không bao giờ nhỏ hơn 1.
pub(crate) fn max_per_line(config: &TimelineConfig) -> usize {
    let usable = config.canvas_width - config.margin.left;
    if !usable.is_finite() || !config.dot_gap.is_finite() || config.dot_gap <= 0.0 || usable <= 0.0
    {
        return 1;
    }
    ((usable / config.dot_gap).floor() as usize).max(1)
}

fn lines_for(count: usize, per_line: usize) -> usize {
    count.div_ceil(per_line).max(1)
}

/// Chiều cao canvas: không nhỏ hơn `min_height`, không nhỏ hơn
/// `total_lines * row_height` cộng lề, và đủ chỗ cho dòng ngắt cuối của mọi hàng.
pub(crate) fn canvas_height(line_counts: &[usize], config: &TimelineConfig) -> f64 {
    let total_lines: usize = line_counts.iter().sum();
    let margins = config.margin.top + config.margin.bottom;
    let dynamic = total_lines as f64 * config.row_height + margins;

    // Hàng i neo tại top + (i + 0.5) * band / n; phần dưới neo phải chứa
    // (lines - 1) bước dòng cộng bán kính chấm.
    let n = line_counts.len() as f64;
    let fitted_band = line_counts
        .iter()
        .enumerate()
        .map(|(slot, &lines)| {
            let below_slot =
                (lines - 1) as f64 * config.line_step().max(0.0) + config.dot_radius.max(0.0);
            below_slot * n / (n - slot as f64 - 0.5)
        })
        .fold(0.0, f64::max);

    dynamic.max(fitted_band + margins).max(config.min_height)
}

/// Tính vị trí cho mọi hàng và mọi chấm.
pub fn compute_layout(grouping: &Grouping<'_>, config: &TimelineConfig) -> TimelineLayout {
    let per_line = max_per_line(config);
    let line_counts: Vec<usize> = grouping
        .rows()
        .map(|row| lines_for(row.records.len(), per_line))
        .collect();
    let total_lines: usize = line_counts.iter().sum();
    let height = canvas_height(&line_counts, config);

    let spine_top = config.margin.top;
    let spine_bottom = height - config.margin.bottom;
    let row_count = line_counts.len();
    let step = if row_count == 0 {
        0.0
    } else {
        (spine_bottom - spine_top) / row_count as f64
    };

    let mut rows = Vec::with_capacity(row_count);
    let mut years = Vec::with_capacity(grouping.years.len());

    for (slot, row) in grouping.rows().enumerate() {
        let slot_y = spine_top + (slot as f64 + 0.5) * step;

        if years
            .last()
            .map_or(true, |anchor: &YearAnchor| anchor.year != row.year)
        {
            years.push(YearAnchor {
                year: row.year.to_string(),
                y: slot_y,
            });
        }

        let len = row.records.len();
        let markers = row
            .records
            .iter()
            .enumerate()
            .zip(&row.indices)
            .map(|((index, record), &record_index)| {
                let line_index = index / per_line;
                let pos_in_line = index % per_line;
                let count_in_line = (len - line_index * per_line).min(per_line);
                let column = match config.packing {
                    PackingMode::Left => pos_in_line as f64,
                    PackingMode::Center => {
                        pos_in_line as f64 - (count_in_line as f64 - 1.0) / 2.0
                    }
                };
                MarkerPosition {
                    record_id: record.id,
                    record_index,
                    x: config.margin.left + column * config.dot_gap,
                    y: slot_y + line_index as f64 * config.line_step(),
                    line_index,
                    pos_in_line,
                }
            })
            .collect();

        rows.push(LayoutRow {
            slot,
            year: row.year.to_string(),
            work: row.work.to_string(),
            slot_y,
            line_count: line_counts[slot],
            markers,
        });
    }

    let leftmost_edge = rows
        .iter()
        .flat_map(|row: &LayoutRow| row.markers.iter())
        .map(|marker| marker.x - config.dot_radius)
        .fold(f64::INFINITY, f64::min);
    let year_axis_x = (config.margin.left / 2.0).min(leftmost_edge - YEAR_AXIS_CLEARANCE);

    TimelineLayout {
        width: config.canvas_width,
        height,
        max_per_line: per_line,
        total_lines,
        spine_top,
        spine_bottom,
        year_axis_x,
        years,
        rows,
    }
}
