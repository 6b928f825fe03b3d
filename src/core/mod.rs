//! 核心框架：事件、命令、几何

pub mod command;
pub mod event;
pub mod geom;

pub use command::Command;
pub use event::{EventResult, InputEvent, Key, KeyPhase, PointerButton, PointerEvent, PointerPhase};
pub use geom::{Point, Rect};
