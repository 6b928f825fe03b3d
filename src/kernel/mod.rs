//! Headless editor core (session/action/effect).

pub mod action;
pub mod clipboard;
pub mod effect;
pub mod layout;
pub mod picker;
pub mod render;
pub mod services;
pub mod session;
pub mod state;

pub use action::Action;
pub use clipboard::ClipboardBuffer;
pub use effect::Effect;
pub use hit_test::CellGeometry;
pub use layout::{PickerHit, ScreenLayout, SidebarHit, ToolButton};
pub use picker::ColorPicker;
pub use render::{BorderLine, RenderContext, RenderData};
pub use session::{DispatchResult, EditorSession, SessionContext};
pub use state::{EditorMode, FlashButton, StatusKind};
