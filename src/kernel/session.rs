//! EditorSession: the per-container editor state machine.
//!
//! A session lives from container open to container close. Input arrives as [`Action`]s;
//! every dispatch returns the [`Effect`]s the owner must execute (persistence is never
//! touched from here) and whether the input was consumed.

use std::time::Instant;

use crate::core::{Command, EventResult, Point, PointerEvent, PointerPhase};
use crate::kernel::clipboard::ClipboardBuffer;
use crate::kernel::hit_test::{self, CellGeometry};
use crate::kernel::layout::{PickerHit, ScreenLayout, SidebarHit, ToolButton};
use crate::kernel::picker::{ColorPicker, DEFAULT_PICKER_COLOR};
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::state::{
    ButtonFlash, DragState, EditorMode, FlashButton, StatusKind, StatusMessage,
};
use crate::kernel::{Action, Effect};
use crate::models::{
    AnnotationSet, ContainerKey, CustomPalette, Direction, DirectionSet, PaintSource, Rgb,
    CUSTOM_PALETTE_LEN, STANDARD_PALETTE_LEN,
};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    pub result: EventResult,
}

impl DispatchResult {
    fn ignored() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
            result: EventResult::Ignored,
        }
    }

    fn passthrough(state_changed: bool) -> Self {
        Self {
            state_changed,
            ..Self::ignored()
        }
    }

    fn consumed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            result: EventResult::Consumed,
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// World-scoped state a session borrows for the duration of one dispatch.
pub struct SessionContext<'a> {
    pub palette: &'a mut CustomPalette,
    pub clipboard: &'a mut ClipboardBuffer,
    pub show_edit_button: bool,
}

pub struct EditorSession {
    key: ContainerKey,
    layout: ScreenLayout,
    cells: Vec<CellGeometry>,
    annotations: AnnotationSet,
    mode: EditorMode,
    source: PaintSource,
    editing_custom: Option<usize>,
    picker: ColorPicker,
    drag: Option<DragState>,
    pointer: Option<Point>,
    status: Option<StatusMessage>,
    flash: Option<ButtonFlash>,
    config: EditorConfig,
}

impl EditorSession {
    /// Starts a session in `Normal` mode over already-loaded annotations.
    pub fn open(
        key: ContainerKey,
        layout: ScreenLayout,
        cells: Vec<CellGeometry>,
        annotations: AnnotationSet,
        config: EditorConfig,
    ) -> Self {
        Self {
            key,
            layout,
            cells,
            annotations,
            mode: EditorMode::Normal,
            source: PaintSource::default(),
            editing_custom: None,
            picker: ColorPicker::default(),
            drag: None,
            pointer: None,
            status: None,
            flash: None,
            config,
        }
    }

    pub fn key(&self) -> &ContainerKey {
        &self.key
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn cells(&self) -> &[CellGeometry] {
        &self.cells
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn source(&self) -> PaintSource {
        self.source
    }

    pub fn editing_custom(&self) -> Option<usize> {
        self.editing_custom
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn flash(&self) -> Option<&ButtonFlash> {
        self.flash.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn get_border(&self, slot: usize, direction: Direction) -> Option<Rgb> {
        self.annotations.get_border(slot, direction)
    }

    /// The editable cell under the pointer.
    pub fn hovered_cell(&self) -> Option<CellGeometry> {
        let pointer = self.pointer?;
        hit_test::hovered_cell(
            &self.cells,
            self.layout.container_origin(),
            pointer,
            self.config.cell_size,
        )
        .filter(|cell| cell.is_editable())
        .copied()
    }

    /// The hovered cell together with the border the pointer is on, if any.
    pub fn hover_target(&self) -> Option<(CellGeometry, Direction)> {
        let pointer = self.pointer?;
        let cell = self.hovered_cell()?;
        let direction = hit_test::hit_border(
            cell.screen_origin(self.layout.container_origin()),
            pointer,
            self.config.cell_size,
            self.config.hit_threshold,
        )?;
        Some((cell, direction))
    }

    /// Cells the active drag would change if released now.
    pub fn drag_cells(&self) -> Vec<CellGeometry> {
        match &self.drag {
            Some(drag) => hit_test::drag_range(&self.cells, &drag.start, &drag.current, drag.axis()),
            None => Vec::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action, ctx: &mut SessionContext<'_>) -> DispatchResult {
        self.dispatch_at(action, ctx, Instant::now())
    }

    pub fn dispatch_at(
        &mut self,
        action: Action,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        if !self.mode.is_open() {
            return DispatchResult::ignored();
        }

        match action {
            Action::Pointer(event) => self.on_pointer(event, ctx, now),
            Action::RunCommand(command) => self.run_command(command, ctx, now),
            Action::ExitEditMode => {
                if self.mode.is_editing() {
                    self.exit_edit_mode()
                } else {
                    DispatchResult::ignored()
                }
            }
            Action::SelectSource(source) => self.on_select_source(source, ctx),
            Action::OpenPicker => {
                if self.mode == EditorMode::Editing {
                    self.open_picker(ctx.palette)
                } else {
                    DispatchResult::ignored()
                }
            }
            Action::PickerSave => {
                if self.mode == EditorMode::PickingColor {
                    self.save_picker(ctx)
                } else {
                    DispatchResult::ignored()
                }
            }
            Action::PickerCancel => {
                if self.mode == EditorMode::PickingColor {
                    self.close_picker()
                } else {
                    DispatchResult::ignored()
                }
            }
            Action::Close => self.close(),
        }
    }

    fn run_command(
        &mut self,
        command: Command,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        if command.requires_edit_mode() && !self.mode.is_editing() {
            return DispatchResult::ignored();
        }

        match command {
            Command::ToggleEditMode => match self.mode {
                EditorMode::Normal if ctx.show_edit_button => self.enter_edit_mode(),
                EditorMode::Editing | EditorMode::PickingColor => self.exit_edit_mode(),
                _ => DispatchResult::ignored(),
            },
            Command::Cancel => match self.mode {
                EditorMode::PickingColor => self.close_picker(),
                _ => self.exit_edit_mode(),
            },
            // The visibility setting is global; the owner flips it.
            Command::ToggleEditButton => DispatchResult::ignored(),
            _ if self.mode != EditorMode::Editing => DispatchResult::ignored(),
            Command::Copy => self.copy(ctx, now),
            Command::Paste => self.paste(ctx, now),
            Command::ClearAll => self.clear_all(now),
            Command::SelectEraser => self.select_source(PaintSource::Eraser),
        }
    }

    fn on_pointer(
        &mut self,
        event: PointerEvent,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        self.pointer = Some(event.pos);
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event, ctx, now),
            PointerPhase::Move => self.on_pointer_move(event),
            PointerPhase::Up => self.on_pointer_up(event, ctx),
        }
    }

    fn on_pointer_down(
        &mut self,
        event: PointerEvent,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        match self.mode {
            EditorMode::Normal => {
                if event.is_primary() && self.entry_button_hit(event.pos, ctx) {
                    self.enter_edit_mode()
                } else {
                    DispatchResult::ignored()
                }
            }
            EditorMode::Editing => self.on_editing_pointer_down(event, ctx, now),
            EditorMode::PickingColor => self.on_picker_pointer_down(event.pos, ctx),
            EditorMode::Closed => DispatchResult::ignored(),
        }
    }

    fn on_editing_pointer_down(
        &mut self,
        event: PointerEvent,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        let p = event.pos;
        if event.is_primary() && self.entry_button_hit(p, ctx) {
            return self.exit_edit_mode();
        }

        if let Some(hit) = self.layout.sidebar_hit(p) {
            if !event.is_primary() {
                return DispatchResult::consumed(false);
            }
            return self.on_sidebar(hit, ctx, now);
        }

        if !event.is_primary() {
            return DispatchResult::consumed(false);
        }
        let Some((cell, direction)) = self.hover_target() else {
            return DispatchResult::consumed(false);
        };

        let erasing = match self.source.color(ctx.palette) {
            _ if self.source.is_eraser() => true,
            // Unset custom slot: nothing to paint with.
            None => return DispatchResult::consumed(false),
            Some(color) => self.annotations.get_border(cell.index, direction) == Some(color),
        };
        self.drag = Some(DragState::new(cell, direction, erasing));
        DispatchResult::consumed(true)
    }

    fn on_sidebar(
        &mut self,
        hit: SidebarHit,
        ctx: &mut SessionContext<'_>,
        now: Instant,
    ) -> DispatchResult {
        match hit {
            SidebarHit::Tool(ToolButton::Eraser) => self.select_source(PaintSource::Eraser),
            SidebarHit::Tool(ToolButton::ClearAll) => self.clear_all(now),
            SidebarHit::Tool(ToolButton::Copy) => self.copy(ctx, now),
            SidebarHit::Tool(ToolButton::Paste) => self.paste(ctx, now),
            SidebarHit::Standard(index) => self.select_source(PaintSource::Standard(index)),
            SidebarHit::Custom(index) => {
                if self.source == PaintSource::Custom(index) {
                    self.editing_custom = Some(index);
                    self.open_picker(ctx.palette)
                } else {
                    self.select_source(PaintSource::Custom(index))
                }
            }
            SidebarHit::PaletteButton => {
                let result = self.open_picker(ctx.palette);
                self.flash = Some(ButtonFlash::new(FlashButton::Palette, now));
                result
            }
            SidebarHit::Background => DispatchResult::consumed(false),
        }
    }

    fn on_picker_pointer_down(
        &mut self,
        p: Point,
        ctx: &mut SessionContext<'_>,
    ) -> DispatchResult {
        if let Some(hit) = self.layout.picker_hit(p) {
            return match hit {
                PickerHit::SaturationValue => {
                    self.update_picker_box(p);
                    DispatchResult::consumed(true)
                }
                PickerHit::Hue => {
                    self.update_picker_hue(p);
                    DispatchResult::consumed(true)
                }
                PickerHit::Save => self.save_picker(ctx),
                PickerHit::Cancel => self.close_picker(),
                PickerHit::Window => DispatchResult::consumed(false),
            };
        }

        if self.layout.custom_column().contains_inclusive(p) {
            if let Some(SidebarHit::Custom(index)) = self.layout.sidebar_hit(p) {
                self.retarget_picker(index, ctx.palette);
                return DispatchResult::consumed(true);
            }
            return DispatchResult::consumed(false);
        }

        // Palette button or anywhere else outside the window.
        self.close_picker()
    }

    fn on_pointer_move(&mut self, event: PointerEvent) -> DispatchResult {
        let held = event.is_primary();
        match self.mode {
            EditorMode::PickingColor if held => {
                let p = event.pos;
                if self.layout.picker_box_drag_zone().contains_inclusive(p) {
                    self.update_picker_box(p);
                } else if self.layout.picker_hue_drag_zone().contains_inclusive(p) {
                    self.update_picker_hue(p);
                } else {
                    return DispatchResult::consumed(false);
                }
                DispatchResult::consumed(true)
            }
            EditorMode::Editing if held && self.drag.is_some() => {
                let hovered = self.hovered_cell();
                if let (Some(drag), Some(cell)) = (self.drag.as_mut(), hovered) {
                    drag.current = cell;
                }
                DispatchResult::consumed(true)
            }
            // Hover: the preview follows the pointer.
            EditorMode::Editing => DispatchResult::passthrough(true),
            _ => DispatchResult::passthrough(false),
        }
    }

    fn on_pointer_up(&mut self, event: PointerEvent, ctx: &mut SessionContext<'_>) -> DispatchResult {
        if self.mode != EditorMode::Editing || !event.is_primary() {
            return DispatchResult::ignored();
        }
        match self.drag.take() {
            Some(drag) => self.commit_drag(drag, ctx.palette),
            None => DispatchResult::ignored(),
        }
    }

    fn commit_drag(&mut self, drag: DragState, palette: &CustomPalette) -> DispatchResult {
        let color = self.source.color(palette);
        if !drag.erasing && color.is_none() {
            return DispatchResult::consumed(true);
        }

        let cells = hit_test::drag_range(&self.cells, &drag.start, &drag.current, drag.axis());
        if cells.is_empty() {
            return DispatchResult::consumed(true);
        }

        let directions = DirectionSet::single(drag.direction);
        for cell in &cells {
            match color {
                Some(color) if !drag.erasing => {
                    self.annotations.set_border(cell.index, directions, color)
                }
                _ => self.annotations.clear_border(cell.index, directions),
            }
        }
        tracing::debug!(
            key = %self.key,
            cells = cells.len(),
            direction = ?drag.direction,
            erasing = drag.erasing,
            "drag committed"
        );
        DispatchResult::consumed(true).with_effect(self.save_effect())
    }

    fn on_select_source(
        &mut self,
        source: PaintSource,
        ctx: &mut SessionContext<'_>,
    ) -> DispatchResult {
        let valid = match source {
            PaintSource::Eraser => true,
            PaintSource::Standard(index) => index < STANDARD_PALETTE_LEN,
            PaintSource::Custom(index) => index < CUSTOM_PALETTE_LEN,
        };
        if !valid {
            return DispatchResult::ignored();
        }
        match (self.mode, source) {
            (EditorMode::Editing, _) => self.select_source(source),
            (EditorMode::PickingColor, PaintSource::Custom(index)) => {
                self.retarget_picker(index, ctx.palette);
                DispatchResult::consumed(true)
            }
            _ => DispatchResult::ignored(),
        }
    }

    fn select_source(&mut self, source: PaintSource) -> DispatchResult {
        self.source = source;
        self.editing_custom = source.custom_index();
        DispatchResult::consumed(true)
    }

    fn entry_button_hit(&self, p: Point, ctx: &SessionContext<'_>) -> bool {
        ctx.show_edit_button && self.layout.entry_button().contains(p)
    }

    fn enter_edit_mode(&mut self) -> DispatchResult {
        self.mode = EditorMode::Editing;
        tracing::debug!(key = %self.key, "edit mode on");
        DispatchResult::consumed(true)
    }

    fn exit_edit_mode(&mut self) -> DispatchResult {
        self.mode = EditorMode::Normal;
        self.editing_custom = None;
        self.drag = None;
        tracing::debug!(key = %self.key, "edit mode off");
        DispatchResult::consumed(true).with_effect(self.save_effect())
    }

    fn close(&mut self) -> DispatchResult {
        let mut result = DispatchResult::consumed(true);
        if self.mode.is_editing() {
            result = result.with_effect(self.save_effect());
        }
        self.mode = EditorMode::Closed;
        self.annotations.clear_all();
        self.drag = None;
        self.editing_custom = None;
        result
    }

    /// Opens the picker on the selected custom slot, selecting slot 0 if none is.
    fn open_picker(&mut self, palette: &CustomPalette) -> DispatchResult {
        let index = self
            .editing_custom
            .or(self.source.custom_index())
            .unwrap_or(0);
        self.source = PaintSource::Custom(index);
        self.editing_custom = Some(index);
        self.picker = ColorPicker::from_rgb(palette.get(index).unwrap_or(DEFAULT_PICKER_COLOR));
        self.drag = None;
        self.mode = EditorMode::PickingColor;
        DispatchResult::consumed(true)
    }

    fn retarget_picker(&mut self, index: usize, palette: &CustomPalette) {
        self.source = PaintSource::Custom(index);
        self.editing_custom = Some(index);
        self.picker = ColorPicker::from_rgb(palette.get(index).unwrap_or(DEFAULT_PICKER_COLOR));
    }

    fn save_picker(&mut self, ctx: &mut SessionContext<'_>) -> DispatchResult {
        self.mode = EditorMode::Editing;
        let Some(index) = self.editing_custom else {
            return DispatchResult::consumed(true);
        };
        ctx.palette.set(index, Some(self.picker.current_color()));
        tracing::debug!(index, color = %self.picker.current_color(), "custom colour saved");
        DispatchResult::consumed(true).with_effect(Effect::SavePalette(*ctx.palette))
    }

    fn close_picker(&mut self) -> DispatchResult {
        self.mode = EditorMode::Editing;
        DispatchResult::consumed(true)
    }

    fn update_picker_box(&mut self, p: Point) {
        let area = self.layout.picker_box();
        let rel = p.offset_from(area.origin());
        self.picker
            .update_from_saturation_value_pointer(rel.x, rel.y, area.w as f64);
    }

    fn update_picker_hue(&mut self, p: Point) {
        let bar = self.layout.picker_hue_bar();
        self.picker
            .update_from_hue_pointer(p.y - bar.y as f64, bar.h as f64);
    }

    fn clear_all(&mut self, now: Instant) -> DispatchResult {
        self.annotations.clear_all();
        self.drag = None;
        self.status = Some(StatusMessage::new(StatusKind::Cleared, now));
        self.flash = Some(ButtonFlash::new(FlashButton::ClearAll, now));
        DispatchResult::consumed(true).with_effect(Effect::DeleteAnnotations(self.key.clone()))
    }

    fn copy(&mut self, ctx: &mut SessionContext<'_>, now: Instant) -> DispatchResult {
        ctx.clipboard.copy(&self.annotations);
        self.status = Some(StatusMessage::new(StatusKind::Copied, now));
        self.flash = Some(ButtonFlash::new(FlashButton::Copy, now));
        DispatchResult::consumed(true)
    }

    fn paste(&mut self, ctx: &mut SessionContext<'_>, now: Instant) -> DispatchResult {
        let Some(snapshot) = ctx.clipboard.paste() else {
            return DispatchResult::consumed(false);
        };
        self.annotations = snapshot;
        self.drag = None;
        self.status = Some(StatusMessage::new(StatusKind::Pasted, now));
        self.flash = Some(ButtonFlash::new(FlashButton::Paste, now));
        DispatchResult::consumed(true).with_effect(self.save_effect())
    }

    fn save_effect(&self) -> Effect {
        Effect::SaveAnnotations {
            key: self.key.clone(),
            annotations: self.annotations.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
