use super::Workbench;
use crate::core::{Command, EventResult, Key};
use crate::kernel::services::adapters::settings::save_settings_to;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action, EditorMode};

impl Workbench {
    pub(super) fn handle_key(&mut self, key: Key) -> EventResult {
        let context = match self.mode() {
            EditorMode::PickingColor => KeybindingContext::Picker,
            EditorMode::Editing => KeybindingContext::Editing,
            EditorMode::Normal | EditorMode::Closed => KeybindingContext::Global,
        };
        match self.keybindings.resolve(context, &key).copied() {
            Some(command) => self.run_command(command),
            None => EventResult::Ignored,
        }
    }

    pub fn run_command(&mut self, command: Command) -> EventResult {
        match command {
            Command::ToggleEditButton => self.toggle_show_edit_button(),
            command => self.dispatch(Action::RunCommand(command)),
        }
    }

    /// Flips the entry-button visibility, persists it, and leaves edit mode when the
    /// button disappears.
    pub fn toggle_show_edit_button(&mut self) -> EventResult {
        self.settings.show_edit_button = !self.settings.show_edit_button;
        tracing::info!(show = self.settings.show_edit_button, "edit button visibility");

        if let Some(path) = self.settings_path.as_ref() {
            if let Err(e) = save_settings_to(path, &self.settings) {
                tracing::warn!(path = %path.display(), error = %e, "save settings failed");
            }
        }
        if !self.settings.show_edit_button {
            self.dispatch(Action::ExitEditMode);
        }
        EventResult::Consumed
    }
}
