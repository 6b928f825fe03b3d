use std::time::Duration;

use super::*;
use crate::core::PointerEvent;
use crate::kernel::clipboard::ClipboardBuffer;
use crate::kernel::hit_test::CellGeometry;
use crate::kernel::layout::ScreenLayout;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::session::SessionContext;
use crate::kernel::Action;
use crate::models::{AnnotationSet, BlockPos, ContainerKey, DirectionSet, STANDARD_PALETTE};

fn session(annotations: AnnotationSet) -> EditorSession {
    let cells = (0..9)
        .map(|col| CellGeometry::new(col, 8 + col as i32 * 18, 18))
        .chain(std::iter::once(CellGeometry::player(27, 8, 85)))
        .collect();
    EditorSession::open(
        ContainerKey::position(BlockPos::new(0, 70, 0), "minecraft:overworld"),
        ScreenLayout::default(),
        cells,
        annotations,
        EditorConfig::default(),
    )
}

fn send(session: &mut EditorSession, palette: &mut CustomPalette, action: Action, now: Instant) {
    let mut clipboard = ClipboardBuffer::new();
    let mut ctx = SessionContext {
        palette,
        clipboard: &mut clipboard,
        show_edit_button: true,
    };
    session.dispatch_at(action, &mut ctx, now);
}

fn render(session: &EditorSession, palette: &CustomPalette, now: Instant) -> RenderData {
    session.render_data(
        &RenderContext {
            palette,
            clipboard_has_data: false,
            show_edit_button: true,
        },
        now,
    )
}

#[test]
fn test_border_rects_wrap_the_cell() {
    assert_eq!(border_rect(10, 20, 16, Direction::Top), Rect::new(9, 19, 18, 1));
    assert_eq!(border_rect(10, 20, 16, Direction::Bottom), Rect::new(9, 36, 18, 1));
    assert_eq!(border_rect(10, 20, 16, Direction::Left), Rect::new(9, 19, 1, 18));
    assert_eq!(border_rect(10, 20, 16, Direction::Right), Rect::new(26, 19, 1, 18));
}

#[test]
fn test_saved_lines_visible_outside_edit_mode() {
    let mut annotations = AnnotationSet::new();
    annotations.set_border(1, DirectionSet::single(Direction::Top), Rgb::RED);
    annotations.set_border(27, DirectionSet::ALL, Rgb::RED);
    let session = session(annotations);
    let palette = CustomPalette::default();

    let data = render(&session, &palette, Instant::now());
    assert_eq!(data.mode, EditorMode::Normal);
    assert_eq!(
        data.saved_lines,
        vec![BorderLine {
            slot: 1,
            direction: Direction::Top,
            rect: Rect::new(150, 54, 18, 1),
            argb: 0xFFFF_0000,
        }]
    );
    assert_eq!(data.entry_button.map(|b| b.label), Some(ENTRY_LABEL_OPEN));
    assert!(data.preview_lines.is_empty());
    assert!(data.picker.is_none());
}

#[test]
fn test_hover_preview_uses_selected_colour() {
    let mut s = session(AnnotationSet::new());
    let mut palette = CustomPalette::default();
    let now = Instant::now();
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(285.0, 20.0)), now);
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::hover(141.0, 56.0)), now);

    let data = render(&s, &palette, now);
    assert_eq!(data.entry_button.map(|b| b.label), Some(ENTRY_LABEL_CLOSE));
    assert_eq!(data.preview_lines.len(), 1);
    let line = data.preview_lines[0];
    assert_eq!(line.slot, 0);
    assert_eq!(line.direction, Direction::Top);
    assert_eq!(line.argb, STANDARD_PALETTE[0].color.with_alpha(PREVIEW_ALPHA));
}

#[test]
fn test_drag_preview_covers_range() {
    let mut s = session(AnnotationSet::new());
    let mut palette = CustomPalette::default();
    let now = Instant::now();
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(285.0, 20.0)), now);
    send(&mut s, &mut palette, Action::SelectSource(PaintSource::Eraser), now);
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(141.0, 56.0)), now);
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::drag(195.0, 56.0)), now);

    let data = render(&s, &palette, now);
    let slots: Vec<usize> = data.preview_lines.iter().map(|l| l.slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 3]);
    assert!(data.preview_lines.iter().all(|l| l.argb == ERASER_PREVIEW));
}

#[test]
fn test_status_and_flash_expire() {
    let mut s = session(AnnotationSet::new());
    let mut palette = CustomPalette::default();
    let start = Instant::now();
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(285.0, 20.0)), start);
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(339.0, 24.0)), start);

    let data = render(&s, &palette, start);
    assert_eq!(data.pressed, Some(FlashButton::ClearAll));
    let status = data.status.expect("status shown");
    assert_eq!(status.kind, StatusKind::Cleared);
    assert_eq!(status.alpha, 255);

    let data = render(&s, &palette, start + Duration::from_millis(300));
    assert_eq!(data.pressed, None);
    assert!(data.status.is_some());

    let data = render(&s, &palette, start + Duration::from_millis(2100));
    assert!(data.status.is_none());
}

#[test]
fn test_picker_view_hides_entry_button() {
    let mut s = session(AnnotationSet::new());
    let mut palette = CustomPalette::default();
    let now = Instant::now();
    send(&mut s, &mut palette, Action::Pointer(PointerEvent::down(285.0, 20.0)), now);
    send(&mut s, &mut palette, Action::OpenPicker, now);

    let data = render(&s, &palette, now);
    assert!(data.entry_button.is_none());
    let picker = data.picker.expect("picker open");
    assert_eq!(picker.custom_index, Some(0));
    assert_eq!(picker.window, Rect::new(103, 35, 220, 170));
}
