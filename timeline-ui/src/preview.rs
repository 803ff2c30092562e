#![cfg(target_arch = "wasm32")]

//! Widget nhúng bài đăng của X/Twitter, bọc sau `PreviewRenderer`.

use std::rc::Rc;

use js_sys::{Function, Reflect};
use timeline_core::PreviewRenderer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document};

const WIDGETS_SCRIPT: &str = "https://platform.twitter.com/widgets.js";
const SCRIPT_SELECTOR: &str = "script[data-post-timeline-widgets]";

/// Gọi `window.twttr.widgets.load()` để biến `blockquote.twitter-tweet` thành bản xem trước.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwitterWidgets;

impl TwitterWidgets {
    /// Chèn script widget một lần nếu trang chưa có `window.twttr`.
    pub fn ensure_script(&self, document: &Document) -> Result<(), JsValue> {
        if widgets_load().is_some() {
            self.rescan();
            return Ok(());
        }
        if document.query_selector(SCRIPT_SELECTOR)?.is_some() {
            return Ok(());
        }

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("Document không có thẻ <body>"))?;
        let script = document.create_element("script")?;
        script.set_attribute("src", WIDGETS_SCRIPT)?;
        script.set_attribute("async", "true")?;
        script.set_attribute("charset", "utf-8")?;
        script.set_attribute("data-post-timeline-widgets", "1")?;
        body.append_child(&script)?;
        Ok(())
    }
}

impl PreviewRenderer for TwitterWidgets {
    fn rescan(&self) {
        // Script chưa tải xong thì bỏ qua; widget tự quét trang khi khởi động.
        let Some((widgets, load)) = widgets_load() else {
            return;
        };
        if let Err(err) = load.call0(&widgets) {
            console::error_1(&err);
        }
    }
}

fn widgets_load() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let twttr = Reflect::get(&window, &JsValue::from_str("twttr")).ok()?;
    if twttr.is_undefined() || twttr.is_null() {
        return None;
    }
    let widgets = Reflect::get(&twttr, &JsValue::from_str("widgets")).ok()?;
    let load = Reflect::get(&widgets, &JsValue::from_str("load"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((widgets, load))
}

/// Tham chiếu tới bộ hiển thị được truyền qua props; so sánh theo con trỏ.
#[derive(Clone)]
pub struct PreviewHandle(pub Rc<dyn PreviewRenderer>);

impl PreviewHandle {
    pub fn rescan(&self) {
        self.0.rescan();
    }
}

impl PartialEq for PreviewHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
