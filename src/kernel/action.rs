use crate::core::{Command, PointerEvent};
use crate::models::PaintSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Pointer(PointerEvent),
    RunCommand(Command),
    /// Leave edit mode if active (entry button hidden, host request).
    ExitEditMode,
    SelectSource(PaintSource),
    /// The palette button: opens the picker on the selected custom slot.
    OpenPicker,
    PickerSave,
    PickerCancel,
    /// The container was closed by the host.
    Close,
}
