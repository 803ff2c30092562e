use std::cell::Cell;

use timeline_core::{
    HoverChange, HoverController, HoverEvent, HoverState, Point, PopupOffset, PostRecord,
    PostStore, PreviewRenderer,
};

#[derive(Default)]
struct CountingRenderer {
    rescans: Cell<usize>,
}

impl PreviewRenderer for CountingRenderer {
    fn rescan(&self) {
        self.rescans.set(self.rescans.get() + 1);
    }
}

fn post(id: u32) -> PostRecord {
    PostRecord {
        id,
        date: "1983-05-28".to_string(),
        work: "A".to_string(),
        url: format!("https://x.com/acc1/status/{id}"),
    }
}

#[test]
fn switching_markers_never_passes_through_idle() {
    let mut hover = HoverController::new();
    let pos_a = Point::new(10.0, 20.0);
    let pos_b = Point::new(46.0, 20.0);

    assert_eq!(hover.pointer_enter(1, pos_a), HoverChange::Entered);
    assert_eq!(hover.pointer_enter(2, pos_b), HoverChange::Switched);
    assert_eq!(
        hover.state(),
        HoverState::Hovering {
            record_id: 2,
            anchor: pos_b
        }
    );
}

#[test]
fn leave_clears_record_and_anchor() {
    let mut hover = HoverController::new();
    hover.pointer_enter(1, Point::new(1.0, 2.0));

    assert_eq!(hover.pointer_leave(), HoverChange::Left);
    assert_eq!(hover.state(), HoverState::Idle);
    assert_eq!(hover.hovered_id(), None);
    assert_eq!(hover.anchor(), None);
    assert_eq!(hover.pointer_leave(), HoverChange::Unchanged);
}

#[test]
fn last_event_wins_after_rapid_sequence() {
    let mut hover = HoverController::new();
    let events = [
        HoverEvent::PointerEnter { record_id: 1, anchor: Point::new(0.0, 0.0) },
        HoverEvent::PointerLeave,
        HoverEvent::PointerEnter { record_id: 2, anchor: Point::new(5.0, 5.0) },
        HoverEvent::PointerLeave,
        HoverEvent::PointerEnter { record_id: 3, anchor: Point::new(9.0, 9.0) },
    ];
    for event in events {
        hover.apply(event);
    }
    assert_eq!(hover.hovered_id(), Some(3));
}

#[test]
fn dispatch_rescans_only_when_popup_content_changes() {
    let renderer = CountingRenderer::default();
    let mut hover = HoverController::new();
    let anchor = Point::new(3.0, 4.0);

    hover.dispatch(HoverEvent::PointerEnter { record_id: 1, anchor }, &renderer);
    hover.dispatch(HoverEvent::PointerEnter { record_id: 1, anchor }, &renderer);
    hover.dispatch(
        HoverEvent::PointerEnter { record_id: 2, anchor },
        &renderer,
    );
    hover.dispatch(HoverEvent::PointerLeave, &renderer);

    assert_eq!(renderer.rescans.get(), 2);
}

#[test]
fn popup_sits_up_and_right_of_anchor() {
    let mut hover = HoverController::new();
    assert_eq!(hover.popup_position(PopupOffset::default()), None);

    hover.pointer_enter(1, Point::new(100.0, 200.0));
    assert_eq!(
        hover.popup_position(PopupOffset::default()),
        Some(Point::new(130.0, 140.0))
    );
}

#[test]
fn reload_without_hovered_record_resets_state() {
    let mut store = PostStore::loaded(vec![post(1), post(2)]);
    let mut hover = HoverController::new();
    hover.pointer_enter(2, Point::new(0.0, 0.0));

    assert_eq!(hover.retain_records(&store), HoverChange::Unchanged);
    assert_eq!(hover.hovered_id(), Some(2));

    store.replace(vec![post(1)]);
    assert_eq!(hover.retain_records(&store), HoverChange::Left);
    assert_eq!(hover.state(), HoverState::Idle);
}
