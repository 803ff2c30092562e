#![cfg(target_arch = "wasm32")]

use serde_wasm_bindgen::from_value;
use timeline_core::PostRecord;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Tải file JSON bài đăng tĩnh. Một request duy nhất, không hủy, không thử lại.
pub async fn fetch_posts(url: &str) -> Result<Vec<PostRecord>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Tải {url} thất bại: HTTP {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let records: Vec<PostRecord> = from_value(json)?;
    Ok(records)
}
