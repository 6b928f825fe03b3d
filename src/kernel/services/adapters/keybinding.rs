//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    /// 任意时刻（容器打开即可）
    Global,
    /// 编辑模式，取色器关闭
    Editing,
    /// 取色器打开
    Picker,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editing" | "edit" | "editor" => Some(Self::Editing),
            "picker" | "colorpicker" | "color_picker" => Some(Self::Picker),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editing: FxHashMap<Key, Command>,
    picker: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editing: default_editing_keybindings(),
            picker: default_picker_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editing => {
                self.editing.get(key).or_else(|| self.global.get(key))
            }
            KeybindingContext::Picker => self.picker.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editing => &self.editing,
            KeybindingContext::Picker => &self.picker,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Layers user rules over the defaults. An empty command unbinds the key.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring unparsable keybinding");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
                continue;
            }
            match parse_command(&rule.command) {
                Some(command) => self.bind(context, key, command),
                None => tracing::warn!(command = %rule.command, "ignoring unknown command"),
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editing => &mut self.editing,
            KeybindingContext::Picker => &mut self.picker,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Char('c')), Command::ToggleEditButton);
    bindings.insert(Key::ctrl(KeyCode::Char('e')), Command::ToggleEditMode);
    bindings
}

fn default_editing_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Esc), Command::Cancel);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Copy);
    bindings.insert(Key::ctrl(KeyCode::Char('v')), Command::Paste);
    bindings.insert(Key::simple(KeyCode::Char('e')), Command::SelectEraser);
    bindings.insert(
        Key::new(KeyCode::Delete, KeyModifiers::CONTROL),
        Command::ClearAll,
    );
    bindings
}

fn default_picker_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Esc), Command::Cancel);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
