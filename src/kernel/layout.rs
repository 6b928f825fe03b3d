//! Screen geometry of the editor overlay: entry button, sidebar and colour picker window.
//!
//! All rectangles are in screen pixels. The container background is placed by the host at
//! `(gui_x, gui_y)`; the sidebar hangs off its right edge.

use serde::{Deserialize, Serialize};

use crate::core::geom::{Point, Rect};
use crate::models::{CUSTOM_PALETTE_LEN, STANDARD_PALETTE_LEN};

pub const ENTRY_BUTTON_SIZE: i32 = 20;
pub const TOOL_BUTTON_SIZE: i32 = 20;
pub const SWATCH_SIZE: i32 = 12;
pub const SWATCH_STRIDE: i32 = SWATCH_SIZE + 4;
pub const SIDEBAR_WIDTH: i32 = 100;
pub const SIDEBAR_Y_OFFSET: i32 = -18;
pub const PALETTE_BOX_WIDTH: i32 = 86;
pub const PALETTE_BOX_HEIGHT: i32 = 135;
pub const PICKER_WIDTH: i32 = 220;
pub const PICKER_HEIGHT: i32 = 170;
pub const PICKER_BOX_SIZE: i32 = 100;
pub const PICKER_HUE_WIDTH: i32 = 20;
pub const PICKER_BUTTON_WIDTH: i32 = 60;
pub const PICKER_BUTTON_HEIGHT: i32 = 18;

const STANDARD_ROWS: usize = 8;
const PALETTE_BUTTON_ROW: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolButton {
    Eraser,
    ClearAll,
    Copy,
    Paste,
}

impl ToolButton {
    pub const ALL: [ToolButton; 4] = [
        ToolButton::Eraser,
        ToolButton::ClearAll,
        ToolButton::Copy,
        ToolButton::Paste,
    ];

    fn column(self) -> i32 {
        match self {
            ToolButton::Eraser => 0,
            ToolButton::ClearAll => 1,
            ToolButton::Copy => 2,
            ToolButton::Paste => 3,
        }
    }
}

/// What a pointer-down inside the sidebar band landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    Tool(ToolButton),
    Standard(usize),
    Custom(usize),
    PaletteButton,
    /// Inside the band but on no control.
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerHit {
    SaturationValue,
    Hue,
    Save,
    Cancel,
    /// Inside the window frame but on no control.
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenLayout {
    pub gui_x: i32,
    pub gui_y: i32,
    pub background_width: i32,
    pub background_height: i32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Default for ScreenLayout {
    /// A 176x166 single chest background centred on a 427x240 screen.
    fn default() -> Self {
        Self::centered(176, 166, 427, 240)
    }
}

impl ScreenLayout {
    pub fn centered(
        background_width: i32,
        background_height: i32,
        screen_width: i32,
        screen_height: i32,
    ) -> Self {
        Self {
            gui_x: (screen_width - background_width) / 2,
            gui_y: (screen_height - background_height) / 2,
            background_width,
            background_height,
            screen_width,
            screen_height,
        }
    }

    pub fn container_origin(&self) -> Point {
        Point::new(self.gui_x as f64, self.gui_y as f64)
    }

    pub fn entry_button(&self) -> Rect {
        Rect::new(
            self.gui_x + self.background_width - 22,
            self.gui_y - 22,
            ENTRY_BUTTON_SIZE,
            ENTRY_BUTTON_SIZE,
        )
    }

    fn sidebar_x(&self) -> i32 {
        self.gui_x + self.background_width + 4
    }

    fn content_x(&self) -> i32 {
        self.sidebar_x() + 7
    }

    fn tools_y(&self) -> i32 {
        self.gui_y + SIDEBAR_Y_OFFSET
    }

    /// Region in which every pointer-down is swallowed by the sidebar. Closed on all
    /// edges.
    pub fn sidebar_band(&self) -> Rect {
        Rect::new(
            self.sidebar_x(),
            self.tools_y(),
            SIDEBAR_WIDTH,
            self.background_height - SIDEBAR_Y_OFFSET,
        )
    }

    pub fn tool_button(&self, tool: ToolButton) -> Rect {
        Rect::new(
            self.content_x() + tool.column() * 22,
            self.tools_y(),
            TOOL_BUTTON_SIZE,
            TOOL_BUTTON_SIZE,
        )
    }

    pub fn palette_box(&self) -> Rect {
        Rect::new(
            self.content_x(),
            self.tools_y() + 25,
            PALETTE_BOX_WIDTH,
            PALETTE_BOX_HEIGHT,
        )
    }

    fn swatch_origin(&self) -> (i32, i32) {
        let palette = self.palette_box();
        (palette.x + 8, palette.y + 4)
    }

    fn custom_column_x(&self) -> i32 {
        self.swatch_origin().0 + SWATCH_STRIDE * 2 + 4
    }

    /// Standard swatches fill two columns of eight, top to bottom.
    pub fn standard_swatch(&self, index: usize) -> Option<Rect> {
        if index >= STANDARD_PALETTE_LEN {
            return None;
        }
        let (px, py) = self.swatch_origin();
        let col = (index / STANDARD_ROWS) as i32;
        let row = (index % STANDARD_ROWS) as i32;
        Some(Rect::new(
            px + col * SWATCH_STRIDE,
            py + row * SWATCH_STRIDE,
            SWATCH_SIZE,
            SWATCH_SIZE,
        ))
    }

    pub fn custom_swatch(&self, index: usize) -> Option<Rect> {
        if index >= CUSTOM_PALETTE_LEN {
            return None;
        }
        let (_, py) = self.swatch_origin();
        Some(Rect::new(
            self.custom_column_x(),
            py + index as i32 * SWATCH_STRIDE,
            SWATCH_SIZE,
            SWATCH_SIZE,
        ))
    }

    /// The whole custom column including the gaps between swatches. Closed on all edges.
    pub fn custom_column(&self) -> Rect {
        let (_, py) = self.swatch_origin();
        Rect::new(
            self.custom_column_x(),
            py,
            SWATCH_SIZE,
            CUSTOM_PALETTE_LEN as i32 * SWATCH_STRIDE,
        )
    }

    pub fn palette_button(&self) -> Rect {
        let (_, py) = self.swatch_origin();
        Rect::new(
            self.custom_column_x() + SWATCH_SIZE + 6,
            py + PALETTE_BUTTON_ROW * SWATCH_STRIDE,
            TOOL_BUTTON_SIZE,
            TOOL_BUTTON_SIZE,
        )
    }

    pub fn sidebar_hit(&self, p: Point) -> Option<SidebarHit> {
        if !self.sidebar_band().contains_inclusive(p) {
            return None;
        }
        if let Some(tool) = ToolButton::ALL
            .into_iter()
            .find(|tool| self.tool_button(*tool).contains(p))
        {
            return Some(SidebarHit::Tool(tool));
        }
        if let Some(i) = (0..STANDARD_PALETTE_LEN)
            .find(|i| self.standard_swatch(*i).is_some_and(|r| r.contains(p)))
        {
            return Some(SidebarHit::Standard(i));
        }
        if let Some(i) =
            (0..CUSTOM_PALETTE_LEN).find(|i| self.custom_swatch(*i).is_some_and(|r| r.contains(p)))
        {
            return Some(SidebarHit::Custom(i));
        }
        if self.palette_button().contains(p) {
            return Some(SidebarHit::PaletteButton);
        }
        Some(SidebarHit::Background)
    }

    pub fn picker_window(&self) -> Rect {
        Rect::new(
            (self.screen_width - PICKER_WIDTH) / 2,
            (self.screen_height - PICKER_HEIGHT) / 2,
            PICKER_WIDTH,
            PICKER_HEIGHT,
        )
    }

    pub fn picker_box(&self) -> Rect {
        let window = self.picker_window();
        Rect::new(window.x + 12, window.y + 35, PICKER_BOX_SIZE, PICKER_BOX_SIZE)
    }

    pub fn picker_hue_bar(&self) -> Rect {
        let sv = self.picker_box();
        Rect::new(sv.x + 115, sv.y, PICKER_HUE_WIDTH, PICKER_BOX_SIZE)
    }

    pub fn picker_save_button(&self) -> Rect {
        let window = self.picker_window();
        Rect::new(
            window.right() - 135,
            window.bottom() - 30,
            PICKER_BUTTON_WIDTH,
            PICKER_BUTTON_HEIGHT,
        )
    }

    pub fn picker_cancel_button(&self) -> Rect {
        let window = self.picker_window();
        Rect::new(
            window.right() - 70,
            window.bottom() - 30,
            PICKER_BUTTON_WIDTH,
            PICKER_BUTTON_HEIGHT,
        )
    }

    /// Drag tolerance around the saturation/value box. Closed on all edges.
    pub fn picker_box_drag_zone(&self) -> Rect {
        let sv = self.picker_box();
        Rect::new(sv.x - 20, sv.y - 20, 130, 140)
    }

    /// Drag tolerance around the hue bar. Overlaps the box zone, which takes precedence.
    pub fn picker_hue_drag_zone(&self) -> Rect {
        let sv = self.picker_box();
        Rect::new(sv.x + 100, sv.y - 20, 50, 140)
    }

    pub fn picker_hit(&self, p: Point) -> Option<PickerHit> {
        if !self.picker_window().contains_inclusive(p) {
            return None;
        }
        let hit = if self.picker_box().contains(p) {
            PickerHit::SaturationValue
        } else if self.picker_hue_bar().contains(p) {
            PickerHit::Hue
        } else if self.picker_save_button().contains(p) {
            PickerHit::Save
        } else if self.picker_cancel_button().contains(p) {
            PickerHit::Cancel
        } else {
            PickerHit::Window
        };
        Some(hit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
