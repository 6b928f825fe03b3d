//! slotmark - 容器格子边框标注
//!
//! 模块结构：
//! - core: 框架类型（Event, Key, Command, Point/Rect）
//! - models: 数据模型（Rgb, AnnotationSet, ContainerKey, CustomPalette）
//! - kernel: 无头编辑核心（EditorSession, ColorPicker, ClipboardBuffer）与 services
//! - app: 宿主门面（Workbench）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
