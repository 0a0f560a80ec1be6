// End-to-end grid scenarios driven through Session::dispatch, the way the
// browser host drives it.

use video_grid_wasm::drag::{DragEndReason, ItemRect, Point, Rect};
use video_grid_wasm::renderers::project;
use video_grid_wasm::session::{GridEvent, ListenerChange, Session};
use video_grid_wasm::GridItemId;

fn event(json: &str) -> GridEvent {
    serde_json::from_str(json).expect("event JSON should deserialize")
}

/// Session with `n` items laid out in a single row of 300px cells
fn session_with(n: usize) -> (Session, Vec<GridItemId>) {
    let mut session = Session::default();
    session.dispatch(GridEvent::ContainerMeasured { width: 1200 }, 0.0);

    let ids: Vec<GridItemId> = (0..n)
        .map(|i| {
            session
                .add_source(&format!("https://youtu.be/clip{:07}", i), 0.0)
                .expect("valid short link")
        })
        .collect();

    let rects = ids
        .iter()
        .enumerate()
        .map(|(i, id)| ItemRect {
            id: *id,
            rect: Rect::new(i as f64 * 300.0, 0.0, 300.0, 169.0),
        })
        .collect();
    session.dispatch(GridEvent::SetItemRects { rects }, 0.0);
    (session, ids)
}

fn drag(session: &mut Session, id: GridItemId, from: Point, to: Point) {
    let start = session.dispatch(GridEvent::drag_start(id, from), 0.0);
    assert_eq!(start.listeners, Some(ListenerChange::Attach));
    session.dispatch(GridEvent::DragMove { x: to.x, y: to.y }, 0.0);
    let end = session.dispatch(GridEvent::DragEnd { x: to.x, y: to.y }, 0.0);
    assert_eq!(
        end.listeners,
        Some(ListenerChange::Detach {
            reason: DragEndReason::Released
        })
    );
}

#[test]
fn test_add_n_items_in_append_order() {
    let (session, ids) = session_with(4);
    assert_eq!(session.registry().ids(), ids);

    let view = project(&session);
    let refs: Vec<&str> = view.items.iter().map(|item| item.source_ref.as_str()).collect();
    assert_eq!(refs, vec!["clip0000000", "clip0000001", "clip0000002", "clip0000003"]);
    assert_eq!(view.count, 4);
    assert!(!view.empty_state_visible);
}

#[test]
fn test_drag_first_onto_last_moves_after() {
    let (mut session, ids) = session_with(3);
    drag(&mut session, ids[0], Point::new(150.0, 80.0), Point::new(750.0, 80.0));
    assert_eq!(session.registry().ids(), vec![ids[1], ids[2], ids[0]]);
}

#[test]
fn test_drag_last_onto_first_moves_before() {
    let (mut session, ids) = session_with(3);
    drag(&mut session, ids[2], Point::new(750.0, 80.0), Point::new(150.0, 80.0));
    assert_eq!(session.registry().ids(), vec![ids[2], ids[0], ids[1]]);
}

#[test]
fn test_last_move_sample_decides_target() {
    let (mut session, ids) = session_with(4);
    session.dispatch(GridEvent::drag_start(ids[0], Point::new(10.0, 10.0)), 0.0);
    session.dispatch(GridEvent::DragMove { x: 950.0, y: 10.0 }, 0.0);
    session.dispatch(GridEvent::DragMove { x: 650.0, y: 10.0 }, 0.0);
    assert_eq!(project(&session).items.iter().filter(|i| i.drop_target).count(), 1);
    session.dispatch(GridEvent::DragEnd { x: 650.0, y: 10.0 }, 0.0);

    assert_eq!(session.registry().ids(), vec![ids[1], ids[2], ids[0], ids[3]]);
}

#[test]
fn test_window_blur_mid_drag_leaves_order() {
    let (mut session, ids) = session_with(3);
    session.dispatch(GridEvent::drag_start(ids[0], Point::new(10.0, 10.0)), 0.0);
    session.dispatch(GridEvent::DragMove { x: 650.0, y: 10.0 }, 0.0);

    let outcome = session.dispatch(GridEvent::WindowBlur, 0.0);

    assert_eq!(
        outcome.listeners,
        Some(ListenerChange::Detach {
            reason: DragEndReason::WindowBlur
        })
    );
    assert_eq!(session.registry().ids(), ids);
    let view = project(&session);
    assert!(!view.is_dragging);
    assert!(view.drag_proxy.is_none());
    assert!(view.items.iter().all(|item| !item.dragging && !item.drop_target));

    // A stray release after cleanup does nothing.
    let late = session.dispatch(GridEvent::DragEnd { x: 650.0, y: 10.0 }, 0.0);
    assert!(!late.changed);
    assert_eq!(session.registry().ids(), ids);
}

#[test]
fn test_pointer_leave_inside_viewport_keeps_drag() {
    let (mut session, ids) = session_with(2);
    session.dispatch(GridEvent::drag_start(ids[0], Point::new(10.0, 10.0)), 0.0);

    let inside = event(
        r#"{"type": "pointerLeave", "x": 400, "y": 300, "viewportWidth": 1280, "viewportHeight": 720}"#,
    );
    assert!(session.dispatch(inside, 0.0).listeners.is_none());
    assert!(session.drag().is_dragging());

    let edge = event(
        r#"{"type": "pointerLeave", "x": 400, "y": 0, "viewportWidth": 1280, "viewportHeight": 720}"#,
    );
    let outcome = session.dispatch(edge, 0.0);
    assert_eq!(
        outcome.listeners,
        Some(ListenerChange::Detach {
            reason: DragEndReason::LeftViewport
        })
    );
}

#[test]
fn test_item_with_open_prompt_cannot_be_dragged() {
    let (mut session, ids) = session_with(2);
    session.dispatch(GridEvent::RequestRemoval { id: ids[1] }, 0.0);

    let outcome = session.dispatch(GridEvent::drag_start(ids[1], Point::new(350.0, 10.0)), 0.0);

    assert!(!outcome.changed);
    assert!(outcome.listeners.is_none());
    assert!(!session.drag().is_dragging());
}

#[test]
fn test_removal_prompt_round_trip_and_confirm() {
    let (mut session, ids) = session_with(3);
    let id_json = serde_json::to_string(&ids[1]).unwrap();

    session.dispatch(event(&format!(r#"{{"type": "requestRemoval", "id": {}}}"#, id_json)), 0.0);
    assert!(project(&session).items[1].showing_confirmation);
    session.dispatch(event(&format!(r#"{{"type": "cancelRemoval", "id": {}}}"#, id_json)), 0.0);
    assert!(!project(&session).items[1].showing_confirmation);
    assert_eq!(session.registry().ids(), ids);

    session.dispatch(GridEvent::RequestRemoval { id: ids[1] }, 0.0);
    session.dispatch(GridEvent::ConfirmRemoval { id: ids[1] }, 0.0);
    assert_eq!(session.registry().ids(), vec![ids[0], ids[2]]);

    // Removing again after the item is gone is a silent no-op.
    let outcome = session.dispatch(GridEvent::ConfirmRemoval { id: ids[1] }, 0.0);
    assert!(!outcome.changed);
    assert_eq!(session.registry().count(), 2);
}

#[test]
fn test_remove_after_bulk_clear_is_noop() {
    let (mut session, ids) = session_with(2);
    session.dispatch(GridEvent::RequestRemoval { id: ids[0] }, 0.0);
    session.dispatch(GridEvent::RequestClearAll, 0.0);
    session.dispatch(GridEvent::ConfirmClearAll, 0.0);

    session.dispatch(GridEvent::ConfirmRemoval { id: ids[0] }, 0.0);

    let view = project(&session);
    assert_eq!(view.count, 0);
    assert!(view.empty_state_visible);
}

#[test]
fn test_layout_controls_resize_every_item() {
    let (mut session, _) = session_with(3);
    assert_eq!(project(&session).item_width, 600);

    session.dispatch(GridEvent::IncreaseColumns, 0.0);
    session.dispatch(GridEvent::IncreaseColumns, 0.0);
    session.dispatch(event(r#"{"type": "setScale", "percent": 50}"#), 0.0);

    let view = project(&session);
    assert_eq!(view.columns, 4);
    assert_eq!(view.scale_label, "50%");
    assert_eq!(view.item_width, 150);
    assert!(view.items.iter().all(|item| item.width == 150));
    assert!(view.panel.translucent);

    session.dispatch(GridEvent::ResetLayout, 0.0);
    let view = project(&session);
    assert_eq!(view.columns, 2);
    assert_eq!(view.scale_percent, 100);
    assert!(view.items.iter().all(|item| item.width == 600));
}

#[test]
fn test_toast_expires_through_ticks() {
    let (mut session, _) = session_with(1);
    session.dispatch(GridEvent::InputChanged { text: "garbage".to_string() }, 100.0);
    session.dispatch(GridEvent::Submit, 100.0);

    let view = project(&session);
    assert_eq!(view.input, "garbage");
    assert_eq!(view.toast.as_ref().unwrap().message, "Invalid YouTube URL");

    session.tick(3100.0);
    assert!(project(&session).toast.is_some());
    session.tick(3400.0);
    assert!(project(&session).toast.is_none());
}
