//! 标注持久化：按 ContainerKey 读写 JSON 文档
//!
//! 文档格式：
//! ```json
//! { "Separators": { "0": [top, bottom, left, right], "13": [...] } }
//! { "Palette": [c0, c1, c2, c3, c4, c5, c6, c7] }
//! ```
//! 每个方向为 0（未设置）或 `0xFF000000 | rgb`。旧格式中槽位值是单个整数
//! （每方向 5 bit 的调色板序号），读取时按当前调色板解码。
//!
//! 所有 I/O 错误在这一层记录日志后吞掉，调用方只看到“没有持久化变化”。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::paths::{annotation_file_path, palette_file_path};
use super::LocalFileProvider;
use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use crate::models::{
    AnnotationSet, ContainerKey, CustomPalette, Direction, PaintSource, SlotAnnotation,
};

const SEPARATORS_FIELD: &str = "Separators";
const PALETTE_FIELD: &str = "Palette";

const LEGACY_MASK: i64 = 0x1F;
const LEGACY_SHIFTS: [(Direction, u32); 4] = [
    (Direction::Top, 0),
    (Direction::Bottom, 5),
    (Direction::Left, 10),
    (Direction::Right, 15),
];

#[derive(Serialize)]
struct AnnotationDocument {
    #[serde(rename = "Separators")]
    separators: BTreeMap<String, [u32; 4]>,
}

#[derive(Serialize)]
struct PaletteDocument {
    #[serde(rename = "Palette")]
    palette: [u32; 8],
}

pub struct PersistenceService {
    provider: Box<dyn FileProvider>,
    world_root: PathBuf,
}

impl PersistenceService {
    pub fn new(provider: Box<dyn FileProvider>, world_root: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            world_root: world_root.into(),
        }
    }

    pub fn local(world_root: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(LocalFileProvider::new()), world_root)
    }

    pub fn world_root(&self) -> &Path {
        &self.world_root
    }

    pub fn resolve_path(&self, key: &ContainerKey) -> PathBuf {
        annotation_file_path(&self.world_root, key)
    }

    pub fn exists(&self, key: &ContainerKey) -> bool {
        self.provider.is_file(&self.resolve_path(key))
    }

    /// Missing or unreadable files yield an empty set.
    pub fn load(&self, key: &ContainerKey) -> AnnotationSet {
        let path = self.resolve_path(key);
        if !self.provider.exists(&path) {
            return AnnotationSet::new();
        }
        match self.try_load(&path) {
            Ok(set) => {
                tracing::debug!(key = %key, slots = set.len(), "annotations loaded");
                set
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load annotations");
                AnnotationSet::new()
            }
        }
    }

    /// Writes `set` for `key`; an empty set removes the file instead.
    pub fn save(&self, key: &ContainerKey, set: &AnnotationSet) {
        if set.is_empty() {
            self.delete(key);
            return;
        }
        let path = self.resolve_path(key);
        match self.try_save(&path, set) {
            Ok(()) => tracing::debug!(key = %key, slots = set.len(), "annotations saved"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save annotations")
            }
        }
    }

    pub fn delete(&self, key: &ContainerKey) {
        let path = self.resolve_path(key);
        if !self.provider.exists(&path) {
            return;
        }
        match self.provider.delete_file(&path) {
            Ok(()) => tracing::debug!(key = %key, "annotations deleted"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to delete annotations")
            }
        }
    }

    /// Drops every slot above `max_slot`, rewriting the file only when something was
    /// removed. Returns whether the file changed.
    pub fn truncate(&self, key: &ContainerKey, max_slot: usize) -> bool {
        if !self.exists(key) {
            return false;
        }
        let mut set = self.load(key);
        if !set.truncate(max_slot) {
            return false;
        }
        self.save(key, &set);
        tracing::info!(key = %key, max_slot, "annotations truncated");
        true
    }

    /// Moves the file behind `from` to `to`. Never overwrites an existing destination.
    pub fn move_file(&self, from: &ContainerKey, to: &ContainerKey) -> bool {
        let src = self.resolve_path(from);
        let dst = self.resolve_path(to);
        if !self.provider.exists(&src) || self.provider.exists(&dst) {
            return false;
        }
        match self.provider.rename(&src, &dst) {
            Ok(()) => {
                tracing::info!(from = %from, to = %to, "annotations moved");
                true
            }
            Err(e) => {
                tracing::warn!(
                    from = %src.display(),
                    to = %dst.display(),
                    error = %e,
                    "failed to move annotations"
                );
                false
            }
        }
    }

    pub fn load_palette(&self) -> CustomPalette {
        let path = palette_file_path(&self.world_root);
        if !self.provider.exists(&path) {
            return CustomPalette::default();
        }
        match self.try_load_palette(&path) {
            Ok(palette) => palette,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load palette");
                CustomPalette::default()
            }
        }
    }

    pub fn save_palette(&self, palette: &CustomPalette) {
        let path = palette_file_path(&self.world_root);
        let doc = PaletteDocument {
            palette: palette.to_packed(),
        };
        let result = serde_json::to_vec(&doc)
            .map_err(FileError::from)
            .and_then(|bytes| self.provider.write_file_bytes(&path, &bytes));
        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "failed to save palette");
        }
    }

    fn try_load(&self, path: &Path) -> Result<AnnotationSet> {
        let bytes = self.provider.read_file_bytes(path)?;
        let root: Value = serde_json::from_slice(&bytes)?;
        let mut set = AnnotationSet::new();
        let Some(entries) = root.get(SEPARATORS_FIELD).and_then(Value::as_object) else {
            return Ok(set);
        };

        // Only needed for legacy integer entries that reference custom colours.
        let mut palette: Option<CustomPalette> = None;
        for (slot_key, value) in entries {
            let Ok(slot) = slot_key.trim().parse::<usize>() else {
                tracing::debug!(key = %slot_key, "skipping non-numeric slot key");
                continue;
            };
            let annotation = match value {
                Value::Array(items) => match parse_direction_array(items) {
                    Some(values) => SlotAnnotation::from_packed(values),
                    None => {
                        tracing::debug!(slot, "skipping malformed slot entry");
                        continue;
                    }
                },
                Value::Number(n) => match n.as_i64() {
                    Some(legacy) => {
                        let palette = palette.get_or_insert_with(|| self.load_palette());
                        decode_legacy(legacy, palette)
                    }
                    None => continue,
                },
                _ => {
                    tracing::debug!(slot, "skipping malformed slot entry");
                    continue;
                }
            };
            set.insert_slot(slot, annotation);
        }
        Ok(set)
    }

    fn try_save(&self, path: &Path, set: &AnnotationSet) -> Result<()> {
        let separators = set
            .iter()
            .map(|(slot, annotation)| (slot.to_string(), annotation.to_packed()))
            .collect();
        let bytes = serde_json::to_vec(&AnnotationDocument { separators })?;
        self.provider.write_file_bytes(path, &bytes)
    }

    fn try_load_palette(&self, path: &Path) -> Result<CustomPalette> {
        let bytes = self.provider.read_file_bytes(path)?;
        let root: Value = serde_json::from_slice(&bytes)?;
        let values: Vec<i64> = root
            .get(PALETTE_FIELD)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(|v| v.as_i64().unwrap_or(0)).collect())
            .unwrap_or_default();
        Ok(CustomPalette::from_packed(&values))
    }
}

fn parse_direction_array(items: &[Value]) -> Option<[i64; 4]> {
    if items.len() != 4 {
        return None;
    }
    let mut values = [0i64; 4];
    for (slot, item) in values.iter_mut().zip(items) {
        *slot = item.as_i64()?;
    }
    Some(values)
}

/// Decodes the packed-index format: 5 bits per direction holding `palette index + 1`.
fn decode_legacy(data: i64, palette: &CustomPalette) -> SlotAnnotation {
    let mut annotation = SlotAnnotation::default();
    for (direction, shift) in LEGACY_SHIFTS {
        let value = (data >> shift) & LEGACY_MASK;
        if value == 0 {
            continue;
        }
        let color = PaintSource::from_legacy_index((value - 1) as usize)
            .and_then(|source| source.color(palette));
        annotation.set(direction, color);
    }
    annotation
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/persistence.rs"]
mod tests;
