//! 工作台：宿主侧门面
//!
//! 持有进程级服务（持久化、剪贴板、世界调色板、设置、快捷键），
//! 以及当前打开容器的 EditorSession；负责把宿主事件转成 Action，
//! 并执行 session 返回的 Effect。

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{EventResult, InputEvent, Key, KeyPhase, PointerEvent};
use crate::kernel::services::adapters::settings::{ensure_settings_file_at, load_settings_from};
use crate::kernel::services::adapters::{
    handle_break, resolve_interaction, BreakEvent, BreakOutcome, KeybindingService,
    PersistenceService,
};
use crate::kernel::services::ports::Settings;
use crate::kernel::{
    Action, BorderLine, CellGeometry, ClipboardBuffer, EditorMode, EditorSession,
    RenderContext, RenderData, ScreenLayout,
};
use crate::models::{ContainerKey, CustomPalette, Direction, PairedContainer, Rgb};

mod bridge;
mod input;

/// Everything the host knows about a container screen when it opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenContainer {
    pub key: ContainerKey,
    #[serde(default)]
    pub layout: ScreenLayout,
    #[serde(default = "default_cells")]
    pub cells: Vec<CellGeometry>,
}

fn default_cells() -> Vec<CellGeometry> {
    crate::kernel::hit_test::container_grid(3)
}

impl OpenContainer {
    /// A single chest on the default screen.
    pub fn chest(key: ContainerKey) -> Self {
        Self {
            key,
            layout: ScreenLayout::default(),
            cells: default_cells(),
        }
    }
}

pub struct Workbench {
    persistence: PersistenceService,
    clipboard: ClipboardBuffer,
    palette: CustomPalette,
    settings: Settings,
    settings_path: Option<PathBuf>,
    keybindings: KeybindingService,
    session: Option<EditorSession>,
}

impl Workbench {
    pub fn new(
        persistence: PersistenceService,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);
        let palette = persistence.load_palette();

        Self {
            persistence,
            clipboard: ClipboardBuffer::new(),
            palette,
            settings,
            settings_path,
            keybindings,
            session: None,
        }
    }

    /// Opens a world on the local filesystem. With a settings path, missing settings are
    /// written out as defaults and invalid ones fall back to defaults.
    pub fn open_world(world_root: impl Into<PathBuf>, settings_path: Option<PathBuf>) -> Self {
        let settings = match settings_path.as_deref() {
            Some(path) => {
                if let Err(e) = ensure_settings_file_at(path) {
                    tracing::warn!(path = %path.display(), error = %e, "ensure_settings_file failed");
                }
                load_settings_from(path).unwrap_or_default()
            }
            None => Settings::default(),
        };
        Self::new(PersistenceService::local(world_root), settings, settings_path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> &CustomPalette {
        &self.palette
    }

    pub fn persistence(&self) -> &PersistenceService {
        &self.persistence
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn clipboard_has_data(&self) -> bool {
        self.clipboard.has_data()
    }

    pub fn mode(&self) -> EditorMode {
        self.session
            .as_ref()
            .map(EditorSession::mode)
            .unwrap_or_default()
    }

    /// Canonical key for a block container the player is about to open.
    pub fn on_interact_block(&mut self, container: &PairedContainer, dimension: &str) -> ContainerKey {
        resolve_interaction(&self.persistence, container, dimension)
    }

    pub fn on_open(&mut self, open: OpenContainer) {
        if self.session.is_some() {
            self.on_close();
        }
        let annotations = self.persistence.load(&open.key);
        tracing::debug!(key = %open.key, slots = annotations.len(), "container opened");
        self.session = Some(EditorSession::open(
            open.key,
            open.layout,
            open.cells,
            annotations,
            self.settings.editor.clone(),
        ));
    }

    pub fn on_close(&mut self) {
        if self.session.is_none() {
            return;
        }
        self.dispatch(Action::Close);
        if let Some(session) = self.session.take() {
            tracing::debug!(key = %session.key(), "container closed");
        }
    }

    /// Migrates persisted data after a container block is destroyed. An affected open
    /// session is dropped without saving.
    pub fn on_break_block(&mut self, event: &BreakEvent) -> BreakOutcome {
        let broken = ContainerKey::position(event.container.pos, event.dimension.clone());
        let canonical = ContainerKey::position(event.container.main_half(), event.dimension.clone());
        if self
            .session
            .as_ref()
            .is_some_and(|session| *session.key() == broken || *session.key() == canonical)
        {
            tracing::debug!(key = %broken, "open container destroyed");
            self.session = None;
        }
        handle_break(
            &self.persistence,
            event,
            self.settings.editor.single_container_capacity,
        )
    }

    /// Routes a raw host event. Key releases are never bound.
    pub fn on_event(&mut self, event: InputEvent) -> EventResult {
        match event {
            InputEvent::Pointer(event) => self.on_pointer(event),
            InputEvent::Key(key, KeyPhase::Press) => self.on_key(key),
            InputEvent::Key(_, KeyPhase::Release) => EventResult::Ignored,
        }
    }

    pub fn on_pointer(&mut self, event: PointerEvent) -> EventResult {
        self.dispatch(Action::Pointer(event))
    }

    pub fn on_key(&mut self, key: Key) -> EventResult {
        self.handle_key(key)
    }

    pub fn get_border(&self, slot: usize, direction: Direction) -> Option<Rgb> {
        self.session
            .as_ref()
            .and_then(|session| session.get_border(slot, direction))
    }

    pub fn preview_lines(&self) -> Vec<BorderLine> {
        self.session
            .as_ref()
            .map(|session| session.preview_lines(&self.palette))
            .unwrap_or_default()
    }

    pub fn render_data(&self, now: Instant) -> Option<RenderData> {
        let session = self.session.as_ref()?;
        let ctx = RenderContext {
            palette: &self.palette,
            clipboard_has_data: self.clipboard.has_data(),
            show_edit_button: self.settings.show_edit_button,
        };
        Some(session.render_data(&ctx, now))
    }
}
