//! 命令系统：语义命令定义
//!
//! Command 只描述意图，不关心具体按键；按键到命令的映射由 KeybindingService 负责。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// 切换编辑入口按钮的可见性（全局设置）
    ToggleEditButton,
    ToggleEditMode,
    /// 关闭取色器；取色器未打开时退出编辑模式
    Cancel,
    Copy,
    Paste,
    ClearAll,
    SelectEraser,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::ToggleEditButton,
        Command::ToggleEditMode,
        Command::Cancel,
        Command::Copy,
        Command::Paste,
        Command::ClearAll,
        Command::SelectEraser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::ToggleEditButton => "toggleEditButton",
            Command::ToggleEditMode => "toggleEditMode",
            Command::Cancel => "cancel",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::ClearAll => "clearAll",
            Command::SelectEraser => "selectEraser",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }

    /// 是否只在编辑模式下生效
    pub fn requires_edit_mode(&self) -> bool {
        !matches!(self, Command::ToggleEditButton | Command::ToggleEditMode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
