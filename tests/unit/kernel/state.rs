use super::*;

#[test]
fn test_mode_predicates() {
    assert!(!EditorMode::Closed.is_open());
    assert!(EditorMode::Normal.is_open());
    assert!(!EditorMode::Normal.is_editing());
    assert!(EditorMode::Editing.is_editing());
    assert!(EditorMode::PickingColor.is_editing());
}

#[test]
fn test_drag_axis_follows_direction() {
    let cell = CellGeometry::new(0, 8, 18);
    assert_eq!(DragState::new(cell, Direction::Top, false).axis(), Axis::Horizontal);
    assert_eq!(DragState::new(cell, Direction::Right, false).axis(), Axis::Vertical);
}

#[test]
fn test_status_message_expires() {
    let config = EditorConfig::default();
    let start = Instant::now();
    let status = StatusMessage::new(StatusKind::Copied, start);
    assert_eq!(status.alpha(start, &config), Some(255));
    assert!(status.alpha(start + Duration::from_millis(1900), &config).unwrap() < 255);
    assert_eq!(status.alpha(start + Duration::from_millis(2000), &config), None);
}

#[test]
fn test_button_flash_window() {
    let start = Instant::now();
    let flash = ButtonFlash::new(FlashButton::Copy, start);
    let duration = Duration::from_millis(200);
    assert!(flash.is_active(start + Duration::from_millis(199), duration));
    assert!(!flash.is_active(start + Duration::from_millis(200), duration));
}
