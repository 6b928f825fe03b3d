//! 剪贴板：会话内的标注快照
//!
//! 只保存在内存中，不落盘；同一时间最多一份快照，新的复制会覆盖旧的。

use crate::models::AnnotationSet;

#[derive(Debug, Default)]
pub struct ClipboardBuffer {
    snapshot: Option<AnnotationSet>,
}

impl ClipboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, set: &AnnotationSet) {
        self.snapshot = Some(set.clone());
    }

    /// 返回快照的深拷贝；没有数据（或快照为空）时返回 None
    pub fn paste(&self) -> Option<AnnotationSet> {
        self.snapshot
            .as_ref()
            .filter(|set| !set.is_empty())
            .cloned()
    }

    pub fn has_data(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|set| !set.is_empty())
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/clipboard.rs"]
mod tests;
