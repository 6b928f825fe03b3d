//! 双容器合并/拆分时的文件迁移
//!
//! 双容器的数据始终存放在较小坐标（主半边）的文件里：
//! - 合并：主半边没有文件、副半边有文件时，把副半边的文件移到主半边
//! - 拆分：打掉主半边时先把文件移到幸存的邻居，再按单容器容量截断；
//!   打掉副半边只需截断主半边。最后删除被打掉位置上残留的文件。
//!
//! 迁移失败只记录日志，不影响调用方。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::persistence::PersistenceService;
use crate::models::{ContainerKey, PairedContainer};

/// A container block was destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvent {
    pub container: PairedContainer,
    pub dimension: CompactString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakOutcome {
    /// A single container: its file is gone.
    Cleared,
    /// The main half broke; its data now lives at the surviving neighbour.
    MovedTo(ContainerKey),
    /// The secondary half broke; the main half's data was cut down in place.
    TruncatedAt(ContainerKey),
}

impl BreakOutcome {
    pub fn surviving_key(&self) -> Option<&ContainerKey> {
        match self {
            BreakOutcome::Cleared => None,
            BreakOutcome::MovedTo(key) | BreakOutcome::TruncatedAt(key) => Some(key),
        }
    }
}

/// Canonical key for an interacted block container, migrating a lone half's file onto
/// the main half when a double container has just formed.
pub fn resolve_interaction(
    persistence: &PersistenceService,
    container: &PairedContainer,
    dimension: &str,
) -> ContainerKey {
    let main = ContainerKey::position(container.main_half(), dimension);
    if let Some(secondary) = container.secondary_half() {
        let secondary = ContainerKey::position(secondary, dimension);
        if !persistence.exists(&main) && persistence.exists(&secondary) {
            persistence.move_file(&secondary, &main);
        }
    }
    main
}

/// Keeps persisted data consistent after `event`. Slots at or past `capacity` are
/// dropped from a surviving half.
pub fn handle_break(
    persistence: &PersistenceService,
    event: &BreakEvent,
    capacity: usize,
) -> BreakOutcome {
    let broken = ContainerKey::position(event.container.pos, event.dimension.clone());
    let Some(neighbor) = event.container.neighbor else {
        persistence.delete(&broken);
        return BreakOutcome::Cleared;
    };

    let survivor = ContainerKey::position(neighbor, event.dimension.clone());
    let outcome = if event.container.is_main() {
        persistence.move_file(&broken, &survivor);
        BreakOutcome::MovedTo(survivor.clone())
    } else {
        BreakOutcome::TruncatedAt(survivor.clone())
    };

    match capacity.checked_sub(1) {
        Some(max_slot) => {
            persistence.truncate(&survivor, max_slot);
        }
        None => persistence.delete(&survivor),
    }
    persistence.delete(&broken);

    tracing::info!(broken = %broken, survivor = %survivor, "double container split");
    outcome
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/migration.rs"]
mod tests;
