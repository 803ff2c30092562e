//! Máy trạng thái hover: chấm nào đang được trỏ và popup neo ở đâu.

use serde::{Deserialize, Serialize};

use crate::{Point, PopupOffset, PostStore};

/// Bộ hiển thị bài đăng bên thứ ba (widget nhúng).
///
/// Được truyền vào thay vì truy cập biến toàn cục; chỉ cần một thao tác quét lại
/// DOM để biến placeholder mới thành bản xem trước.
pub trait PreviewRenderer {
    fn rescan(&self);
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum HoverState {
    #[default]
    Idle,
    Hovering { record_id: u32, anchor: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverEvent {
    PointerEnter { record_id: u32, anchor: Point },
    PointerLeave,
}

/// Kết quả của một lần chuyển trạng thái.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Entered,
    /// Chuyển thẳng từ chấm này sang chấm khác, popup không bị đóng.
    Switched,
    Left,
    Unchanged,
}

impl HoverChange {
    /// Popup vừa có nội dung mới, widget cần quét lại DOM.
    pub fn needs_rescan(self) -> bool {
        matches!(self, Self::Entered | Self::Switched)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverController {
    state: HoverState,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered_id(&self) -> Option<u32> {
        match self.state {
            HoverState::Hovering { record_id, .. } => Some(record_id),
            HoverState::Idle => None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            HoverState::Hovering { anchor, .. } => Some(anchor),
            HoverState::Idle => None,
        }
    }

    pub fn pointer_enter(&mut self, record_id: u32, anchor: Point) -> HoverChange {
        let next = HoverState::Hovering { record_id, anchor };
        let change = match self.state {
            HoverState::Idle => HoverChange::Entered,
            current if current == next => HoverChange::Unchanged,
            HoverState::Hovering { .. } => HoverChange::Switched,
        };
        self.state = next;
        change
    }

    pub fn pointer_leave(&mut self) -> HoverChange {
        match std::mem::take(&mut self.state) {
            HoverState::Idle => HoverChange::Unchanged,
            HoverState::Hovering { .. } => HoverChange::Left,
        }
    }

    pub fn apply(&mut self, event: HoverEvent) -> HoverChange {
        match event {
            HoverEvent::PointerEnter { record_id, anchor } => self.pointer_enter(record_id, anchor),
            HoverEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Áp dụng sự kiện rồi yêu cầu widget quét lại khi popup đổi nội dung.
    pub fn dispatch(&mut self, event: HoverEvent, renderer: &dyn PreviewRenderer) -> HoverChange {
        let change = self.apply(event);
        if change.needs_rescan() {
            renderer.rescan();
        }
        change
    }

    /// Góc trên-trái của popup: lệch sang phải và lên trên so với điểm neo.
    pub fn popup_position(&self, offset: PopupOffset) -> Option<Point> {
        self.anchor()
            .map(|anchor| Point::new(anchor.x + offset.x, anchor.y - offset.y))
    }

    /// Đưa về `Idle` nếu bài đăng đang hover không còn trong store.
    pub fn retain_records(&mut self, store: &PostStore) -> HoverChange {
        match self.hovered_id() {
            Some(id) if !store.contains(id) => self.pointer_leave(),
            _ => HoverChange::Unchanged,
        }
    }
}
