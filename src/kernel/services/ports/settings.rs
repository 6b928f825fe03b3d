use serde::{Deserialize, Serialize};

use super::config::EditorConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the edit entry button is shown. Edit mode is unavailable while hidden.
    #[serde(default = "default_show_edit_button")]
    pub show_edit_button: bool,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn default_show_edit_button() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_edit_button: true,
            keybindings: Vec::new(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
