//! Bridge WASM <-> JavaScript trung lập framework.

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use timeline_core::{
    sample_textures, AccountTextures, Margin, PackingMode, PopupOffset, PostRecord, TimelineConfig,
    TimelineError,
};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsTimelineConfig {
    #[serde(default)]
    canvas_width: Option<f64>,
    #[serde(default)]
    min_height: Option<f64>,
    #[serde(default)]
    margin: Option<Margin>,
    #[serde(default)]
    dot_radius: Option<f64>,
    #[serde(default)]
    dot_gap: Option<f64>,
    #[serde(default)]
    line_spacing: Option<f64>,
    #[serde(default)]
    row_height: Option<f64>,
    #[serde(default)]
    packing: Option<PackingMode>,
    #[serde(default)]
    popup_offset: Option<PopupOffset>,
    #[serde(default)]
    dot_color: Option<String>,
    #[serde(default)]
    spine_color: Option<String>,
}

impl From<JsTimelineConfig> for TimelineConfig {
    fn from(cfg: JsTimelineConfig) -> Self {
        let mut base = TimelineConfig::default();
        if let Some(width) = cfg.canvas_width {
            base.canvas_width = width;
        }
        if let Some(height) = cfg.min_height {
            base.min_height = height;
        }
        if let Some(margin) = cfg.margin {
            base.margin = margin;
        }
        if let Some(radius) = cfg.dot_radius {
            base.dot_radius = radius;
        }
        if let Some(gap) = cfg.dot_gap {
            base.dot_gap = gap;
        }
        if let Some(spacing) = cfg.line_spacing {
            base.line_spacing = spacing;
        }
        if let Some(row_height) = cfg.row_height {
            base.row_height = row_height;
        }
        if let Some(packing) = cfg.packing {
            base.packing = packing;
        }
        if let Some(offset) = cfg.popup_offset {
            base.popup_offset = offset;
        }
        if let Some(color) = cfg.dot_color {
            base.dot_color = color;
        }
        if let Some(color) = cfg.spine_color {
            base.spine_color = color;
        }
        base
    }
}

/// Dựng cảnh vẽ (JSON) từ mảng bài đăng `{id, date, work, url}`.
#[wasm_bindgen]
pub fn layout_timeline(
    records: JsValue,
    config: Option<JsValue>,
    textures: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let records: Vec<PostRecord> = from_value(records)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được danh sách bài đăng: {err}")))?;

    let cfg = parse_config(config)?;

    let textures = parse_textures(textures)?;

    let scene = timeline_core::build_scene(&records, &textures, &cfg);

    to_value(&scene).map_err(|err| JsValue::from_str(&format!("Không serialize cảnh vẽ: {err}")))
}

/// Tên tài khoản trong URL bài đăng, `undefined` nếu URL lỗi.
#[wasm_bindgen]
pub fn account_from_url(url: &str) -> Option<String> {
    timeline_core::account_from_url(url)
}

/// Chuyển body JSON của API bảng tính thành mảng bài đăng.
#[wasm_bindgen]
pub fn parse_sheet_values(body: &str) -> Result<JsValue, JsValue> {
    let records = timeline_sheets::parse_values_str(body)
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))?;

    to_value(&records)
        .map_err(|err| JsValue::from_str(&format!("Không serialize bài đăng: {err}")))
}

fn parse_config(config: Option<JsValue>) -> Result<TimelineConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsTimelineConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(TimelineConfig::from(cfg))
        }
        _ => Ok(TimelineConfig::default()),
    }
}

/// Bảng ảnh nền từ JS; bỏ trống thì dùng bảng có sẵn như giao diện yew và CLI.
fn parse_textures(textures: Option<JsValue>) -> Result<AccountTextures, JsValue> {
    match textures {
        Some(js_textures) if !js_textures.is_undefined() && !js_textures.is_null() => {
            from_value(js_textures)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được bảng ảnh nền: {err}")))
        }
        _ => Ok(sample_textures()),
    }
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Timeline error: {err}")
}
