//! 数据路径管理
//!
//! 跨平台的应用数据目录，以及每个世界/服务器下的标注文件布局：
//! - macOS: ~/Library/Application Support/slotmark/
//! - Linux: ~/.local/share/slotmark/
//! - Windows: %APPDATA%\slotmark\
//!
//! 世界目录结构：
//! ```text
//! <world>/world_palette.dat
//! <world>/ender_chest.dat
//! <world>/separators/<dimension>_<x>_<y>_<z>.dat
//! <world>/separators/entity_<uuid>.dat
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::ContainerKey;

pub(crate) const APP_NAME: &str = "slotmark";
const LOG_DIR: &str = "logs";
const WORLDS_DIR: &str = "worlds";
pub const SEPARATORS_DIR: &str = "separators";
pub const ENDER_FILE_NAME: &str = "ender_chest.dat";
pub const PALETTE_FILE_NAME: &str = "world_palette.dat";
const UNKNOWN_WORLD: &str = "unknown_world";

/// 获取应用数据目录
pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        dirs_path_linux()
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn dirs_path_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn dirs_path_linux() -> Option<PathBuf> {
    // 优先使用 XDG_DATA_HOME，否则使用 ~/.local/share
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn dirs_path_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// 所有世界目录的默认父目录
pub fn get_worlds_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(WORLDS_DIR))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// 标注数据所属的世界：本地存档或远程服务器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum WorldIdentity {
    Local(String),
    Remote(String),
    Unknown,
}

impl WorldIdentity {
    /// 目录名：`sp_<存档名>` / `mp_<服务器地址>`，非 `[A-Za-z0-9_-]` 字符替换为 `_`
    pub fn folder_name(&self) -> String {
        let raw = match self {
            WorldIdentity::Local(name) => format!("sp_{name}"),
            WorldIdentity::Remote(address) => format!("mp_{address}"),
            WorldIdentity::Unknown => UNKNOWN_WORLD.to_string(),
        };
        sanitize_folder_name(&raw)
    }

    pub fn root_in(&self, worlds_dir: &Path) -> PathBuf {
        worlds_dir.join(self.folder_name())
    }
}

fn sanitize_folder_name(raw: &str) -> String {
    raw.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// 容器标注文件路径（相对世界根目录解析）
pub fn annotation_file_path(world_root: &Path, key: &ContainerKey) -> PathBuf {
    match key {
        ContainerKey::Position { pos, dimension } => {
            let safe_dim = sanitize_folder_name(dimension);
            world_root.join(SEPARATORS_DIR).join(format!(
                "{}_{}_{}_{}.dat",
                safe_dim, pos.x, pos.y, pos.z
            ))
        }
        ContainerKey::Entity { id } => world_root
            .join(SEPARATORS_DIR)
            .join(format!("entity_{}.dat", id)),
        ContainerKey::EnderChest => world_root.join(ENDER_FILE_NAME),
    }
}

pub fn palette_file_path(world_root: &Path) -> PathBuf {
    world_root.join(PALETTE_FILE_NAME)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
