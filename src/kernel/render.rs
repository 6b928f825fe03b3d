//! Draw data for the host renderer. Nothing here mutates a session.

use std::time::Instant;

use crate::core::Rect;
use crate::kernel::hit_test::CellGeometry;
use crate::kernel::session::EditorSession;
use crate::kernel::state::{EditorMode, FlashButton, StatusKind};
use crate::models::{CustomPalette, Direction, PaintSource, Rgb, CUSTOM_PALETTE_LEN};

/// Alpha applied to the selected colour while previewing.
pub const PREVIEW_ALPHA: u8 = 0x88;
/// Preview colour when the stroke will erase.
pub const ERASER_PREVIEW: u32 = 0x88FF_FFFF;

pub const ENTRY_LABEL_OPEN: char = '✎';
pub const ENTRY_LABEL_CLOSE: char = '✖';

/// One 1px border line, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderLine {
    pub slot: usize,
    pub direction: Direction,
    pub rect: Rect,
    pub argb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryButtonView {
    pub rect: Rect,
    pub label: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub text: &'static str,
    pub alpha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerView {
    pub window: Rect,
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub color: Rgb,
    pub custom_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderData {
    pub mode: EditorMode,
    pub entry_button: Option<EntryButtonView>,
    pub saved_lines: Vec<BorderLine>,
    pub preview_lines: Vec<BorderLine>,
    pub source: PaintSource,
    pub custom_palette: [Option<Rgb>; CUSTOM_PALETTE_LEN],
    pub paste_enabled: bool,
    pub pressed: Option<FlashButton>,
    pub status: Option<StatusView>,
    pub picker: Option<PickerView>,
}

/// Border line rectangle for a cell whose top-left is `(x, y)`. Lines sit one pixel
/// outside the cell and the horizontal ones span the corners.
pub fn border_rect(x: i32, y: i32, size: i32, direction: Direction) -> Rect {
    match direction {
        Direction::Top => Rect::new(x - 1, y - 1, size + 2, 1),
        Direction::Bottom => Rect::new(x - 1, y + size, size + 2, 1),
        Direction::Left => Rect::new(x - 1, y - 1, 1, size + 2),
        Direction::Right => Rect::new(x + size, y - 1, 1, size + 2),
    }
}

/// Host-side inputs that are not part of the session.
pub struct RenderContext<'a> {
    pub palette: &'a CustomPalette,
    pub clipboard_has_data: bool,
    pub show_edit_button: bool,
}

impl EditorSession {
    pub fn render_data(&self, ctx: &RenderContext<'_>, now: Instant) -> RenderData {
        let mode = self.mode();
        let config = self.config();

        let entry_button = (ctx.show_edit_button
            && matches!(mode, EditorMode::Normal | EditorMode::Editing))
        .then(|| EntryButtonView {
            rect: self.layout().entry_button(),
            label: if mode.is_editing() {
                ENTRY_LABEL_CLOSE
            } else {
                ENTRY_LABEL_OPEN
            },
        });

        let status = self.status().and_then(|status| {
            status.alpha(now, config).map(|alpha| StatusView {
                kind: status.kind,
                text: status.kind.message(),
                alpha,
            })
        });

        let picker = (mode == EditorMode::PickingColor).then(|| {
            let picker = self.picker();
            PickerView {
                window: self.layout().picker_window(),
                hue: picker.hue(),
                saturation: picker.saturation(),
                value: picker.value(),
                color: picker.current_color(),
                custom_index: self.editing_custom(),
            }
        });

        RenderData {
            mode,
            entry_button,
            saved_lines: self.saved_lines(),
            preview_lines: self.preview_lines(ctx.palette),
            source: self.source(),
            custom_palette: ctx.palette.colors(),
            paste_enabled: ctx.clipboard_has_data,
            pressed: self
                .flash()
                .filter(|flash| flash.is_active(now, config.flash_duration()))
                .map(|flash| flash.button),
            status: if mode.is_editing() { status } else { None },
            picker,
        }
    }

    /// Persisted borders of every cell in the layout.
    pub fn saved_lines(&self) -> Vec<BorderLine> {
        if !self.mode().is_open() {
            return Vec::new();
        }
        let mut lines = Vec::new();
        for cell in self.cells().iter().filter(|c| c.is_editable()) {
            let Some(annotation) = self.annotations().slot(cell.index) else {
                continue;
            };
            for (direction, color) in annotation.borders() {
                lines.push(self.line_for(cell, direction, color.with_alpha(0xFF)));
            }
        }
        lines
    }

    /// Lines the current hover or drag would produce. Empty outside plain edit mode.
    pub fn preview_lines(&self, palette: &CustomPalette) -> Vec<BorderLine> {
        if self.mode() != EditorMode::Editing {
            return Vec::new();
        }
        let source = self.source();

        if let Some(drag) = self.drag() {
            let argb = if drag.erasing || source.is_eraser() {
                ERASER_PREVIEW
            } else {
                match source.color(palette) {
                    Some(color) => color.with_alpha(PREVIEW_ALPHA),
                    None => return Vec::new(),
                }
            };
            return self
                .drag_cells()
                .iter()
                .map(|cell| self.line_for(cell, drag.direction, argb))
                .collect();
        }

        let Some((cell, direction)) = self.hover_target() else {
            return Vec::new();
        };
        let argb = match source.color(palette) {
            _ if source.is_eraser() => ERASER_PREVIEW,
            Some(color) => color.with_alpha(PREVIEW_ALPHA),
            None => return Vec::new(),
        };
        vec![self.line_for(&cell, direction, argb)]
    }

    fn line_for(&self, cell: &CellGeometry, direction: Direction, argb: u32) -> BorderLine {
        let layout = self.layout();
        BorderLine {
            slot: cell.index,
            direction,
            rect: border_rect(
                layout.gui_x + cell.x,
                layout.gui_y + cell.y,
                self.config().cell_size as i32,
                direction,
            ),
            argb,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/render.rs"]
mod tests;
