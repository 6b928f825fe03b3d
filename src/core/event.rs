use crate::core::geom::Point;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let mut code = event.code;
        let mut modifiers = event.modifiers;

        if let KeyCode::Char(ch) = code {
            if ch.is_ascii_uppercase() {
                code = KeyCode::Char(ch.to_ascii_lowercase());
                modifiers |= KeyModifiers::SHIFT;
            }
        }

        Self::new(code, modifiers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer sample delivered by the host UI loop.
///
/// `button` is the button that changed state for `Down`/`Up`; for `Move` it is the
/// button held during the move (`None` for a plain hover).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: Option<PointerButton>,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            button: Some(PointerButton::Left),
            phase: PointerPhase::Down,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            button: Some(PointerButton::Left),
            phase: PointerPhase::Up,
        }
    }

    pub fn drag(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            button: Some(PointerButton::Left),
            phase: PointerPhase::Move,
        }
    }

    pub fn hover(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            button: None,
            phase: PointerPhase::Move,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.button == Some(PointerButton::Left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(Key, KeyPhase),
}

impl InputEvent {
    pub fn is_key(&self) -> bool {
        matches!(self, InputEvent::Key(..))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, InputEvent::Pointer(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
