#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-post-timeline]";

/// CSS mặc định của component, kèm design token dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --post-timeline-font-family: 'Hiragino Sans', 'Noto Sans JP', system-ui, sans-serif;
  --post-timeline-bg: #15202b;
  --post-timeline-text: #e7e9ea;
  --post-timeline-muted: #8b98a5;
  --post-timeline-year: #ffffff;
  --post-timeline-dot-hover: #ffd400;
  --post-timeline-popup-bg: #ffffff;
  --post-timeline-popup-shadow: 0 18px 36px rgba(0, 0, 0, 0.35);
}

.post-timeline-root {
  position: relative;
  margin: 0 auto;
  font-family: var(--post-timeline-font-family);
  background: var(--post-timeline-bg);
  color: var(--post-timeline-text);
  border-radius: 12px;
}

.post-timeline-root svg {
  display: block;
}

.post-timeline-root .year-label {
  fill: var(--post-timeline-year);
  font-size: 18px;
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

.post-timeline-root .work-label {
  fill: var(--post-timeline-muted);
  font-size: 12px;
}

.post-timeline-root .timeline-dot {
  cursor: pointer;
  transition: stroke 120ms ease-in-out;
}

.post-timeline-root .timeline-dot:hover {
  stroke: var(--post-timeline-dot-hover);
}

.post-timeline-root .tooltip {
  position: fixed;
  z-index: 10;
  min-width: 320px;
  max-width: 420px;
  background: var(--post-timeline-popup-bg);
  border-radius: 12px;
  box-shadow: var(--post-timeline-popup-shadow);
  padding: 4px;
}

.post-timeline-root .tooltip .twitter-tweet {
  margin: 0 !important;
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-post-timeline", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
