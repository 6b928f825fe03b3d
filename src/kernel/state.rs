use std::time::{Duration, Instant};

use crate::kernel::hit_test::CellGeometry;
use crate::kernel::services::ports::EditorConfig;
use crate::models::{Axis, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// No container open.
    #[default]
    Closed,
    /// Container open, edit mode off.
    Normal,
    Editing,
    /// Edit mode on with the colour picker window open.
    PickingColor,
}

impl EditorMode {
    pub fn is_editing(self) -> bool {
        matches!(self, EditorMode::Editing | EditorMode::PickingColor)
    }

    pub fn is_open(self) -> bool {
        !matches!(self, EditorMode::Closed)
    }
}

/// An in-progress drag-paint gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start: CellGeometry,
    pub current: CellGeometry,
    pub direction: Direction,
    /// Set when the drag started on a border that already had the selected colour.
    pub erasing: bool,
}

impl DragState {
    pub fn new(cell: CellGeometry, direction: Direction, erasing: bool) -> Self {
        Self {
            start: cell,
            current: cell,
            direction,
            erasing,
        }
    }

    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Cleared,
    Copied,
    Pasted,
}

impl StatusKind {
    pub fn message(self) -> &'static str {
        match self {
            StatusKind::Cleared => "Separators cleared",
            StatusKind::Copied => "Layout copied",
            StatusKind::Pasted => "Layout pasted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, shown_at: Instant) -> Self {
        Self { kind, shown_at }
    }

    /// Opacity at `now`, or `None` once the message has expired.
    pub fn alpha(&self, now: Instant, config: &EditorConfig) -> Option<u8> {
        config.status_alpha(now.saturating_duration_since(self.shown_at))
    }
}

/// Buttons that show a short pressed state after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashButton {
    ClearAll,
    Copy,
    Paste,
    Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFlash {
    pub button: FlashButton,
    pub at: Instant,
}

impl ButtonFlash {
    pub fn new(button: FlashButton, at: Instant) -> Self {
        Self { button, at }
    }

    pub fn is_active(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.at) < duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
