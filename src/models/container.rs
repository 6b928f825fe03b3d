//! Container identity: which persisted annotation file belongs to an open container.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Block coordinates. Ordering is lexicographic over `(x, y, z)`; the two halves of a
/// double container differ along a single horizontal axis, so the smaller one is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(&self, facing: Facing) -> BlockPos {
        let (dx, dz) = facing.delta();
        BlockPos::new(self.x + dx, self.y, self.z + dz)
    }
}

/// Horizontal facing of a pairable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    North,
    South,
    West,
    East,
}

impl Facing {
    const fn delta(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
            Facing::East => (1, 0),
        }
    }

    pub const fn rotate_clockwise(self) -> Facing {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    pub const fn rotate_counter_clockwise(self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }
}

/// Which half of a double container a block is, as seen by the player facing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairSide {
    Single,
    Left,
    Right,
}

/// A block container as reported by the interaction layer: its own position and, when it
/// is one half of a double container, the linked neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedContainer {
    pub pos: BlockPos,
    #[serde(default)]
    pub neighbor: Option<BlockPos>,
}

impl PairedContainer {
    pub fn single(pos: BlockPos) -> Self {
        Self {
            pos,
            neighbor: None,
        }
    }

    pub fn paired(pos: BlockPos, neighbor: BlockPos) -> Self {
        Self {
            pos,
            neighbor: Some(neighbor),
        }
    }

    /// Derives the neighbour from facing and half: a left half links clockwise, a right
    /// half counter-clockwise.
    pub fn from_facing(pos: BlockPos, facing: Facing, side: PairSide) -> Self {
        let neighbor = match side {
            PairSide::Single => None,
            PairSide::Left => Some(pos.offset(facing.rotate_clockwise())),
            PairSide::Right => Some(pos.offset(facing.rotate_counter_clockwise())),
        };
        Self { pos, neighbor }
    }

    pub fn is_double(&self) -> bool {
        self.neighbor.is_some()
    }

    /// The canonical half every load/save goes through: the smaller position.
    pub fn main_half(&self) -> BlockPos {
        match self.neighbor {
            Some(neighbor) => self.pos.min(neighbor),
            None => self.pos,
        }
    }

    pub fn secondary_half(&self) -> Option<BlockPos> {
        self.neighbor.map(|neighbor| self.pos.max(neighbor))
    }

    pub fn is_main(&self) -> bool {
        self.main_half() == self.pos
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerKey {
    Position {
        pos: BlockPos,
        dimension: CompactString,
    },
    EnderChest,
    Entity {
        id: Uuid,
    },
}

impl ContainerKey {
    pub fn position(pos: BlockPos, dimension: impl Into<CompactString>) -> Self {
        ContainerKey::Position {
            pos,
            dimension: dimension.into(),
        }
    }

    pub fn entity(id: Uuid) -> Self {
        ContainerKey::Entity { id }
    }

    pub fn pos(&self) -> Option<BlockPos> {
        match self {
            ContainerKey::Position { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Option<&str> {
        match self {
            ContainerKey::Position { dimension, .. } => Some(dimension.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKey::Position { pos, dimension } => {
                write!(f, "{}@{},{},{}", dimension, pos.x, pos.y, pos.z)
            }
            ContainerKey::EnderChest => write!(f, "ender_chest"),
            ContainerKey::Entity { id } => write!(f, "entity:{}", id),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/container.rs"]
mod tests;
