//! Per-slot border annotations and the sparse map that holds them for one container.

use rustc_hash::FxHashMap;

use super::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which way a drag travels. Top/bottom borders run along a row, left/right along a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Also the tie-break order used by border hit detection.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Top | Direction::Bottom => Axis::Horizontal,
            Direction::Left | Direction::Right => Axis::Vertical,
        }
    }
}

/// A small set of directions, one bit each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    pub const fn single(direction: Direction) -> Self {
        Self(direction.bit())
    }

    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    pub const fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        DirectionSet::single(direction)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(DirectionSet::EMPTY, DirectionSet::with)
    }
}

/// The four border colours of one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotAnnotation {
    borders: [Option<Rgb>; 4],
}

impl SlotAnnotation {
    pub fn get(&self, direction: Direction) -> Option<Rgb> {
        self.borders[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, color: Option<Rgb>) {
        self.borders[direction.index()] = color;
    }

    pub fn is_empty(&self) -> bool {
        self.borders.iter().all(Option::is_none)
    }

    /// `[top, bottom, left, right]`, `0` for unset.
    pub fn to_packed(&self) -> [u32; 4] {
        self.borders
            .map(|border| border.map(|color| color.to_packed()).unwrap_or(0))
    }

    pub fn from_packed(values: [i64; 4]) -> Self {
        Self {
            borders: values.map(Rgb::from_packed),
        }
    }

    pub fn borders(&self) -> impl Iterator<Item = (Direction, Rgb)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|color| (d, color)))
    }
}

/// Sparse slot index → annotation map for one container.
///
/// Invariant: no stored entry is empty. Clearing the last border of a slot removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    slots: FxHashMap<usize, SlotAnnotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_border(&self, slot: usize, direction: Direction) -> Option<Rgb> {
        self.slots.get(&slot).and_then(|ann| ann.get(direction))
    }

    pub fn set_border(&mut self, slot: usize, directions: DirectionSet, color: Rgb) {
        if directions.is_empty() {
            return;
        }
        let entry = self.slots.entry(slot).or_default();
        for direction in directions.iter() {
            entry.set(direction, Some(color));
        }
    }

    pub fn clear_border(&mut self, slot: usize, directions: DirectionSet) {
        let Some(entry) = self.slots.get_mut(&slot) else {
            return;
        };
        for direction in directions.iter() {
            entry.set(direction, None);
        }
        if entry.is_empty() {
            self.slots.remove(&slot);
        }
    }

    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, slot: usize) -> Option<&SlotAnnotation> {
        self.slots.get(&slot)
    }

    pub fn contains_slot(&self, slot: usize) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Stores a whole annotation; empty ones are dropped to keep the map sparse.
    pub fn insert_slot(&mut self, slot: usize, annotation: SlotAnnotation) {
        if annotation.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, annotation);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &SlotAnnotation)> {
        self.slots.iter().map(|(slot, ann)| (*slot, ann))
    }

    /// Slot indices in ascending order; iteration order of the map itself is unspecified.
    pub fn slot_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.slots.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Drops every slot above `max_slot`. Returns whether anything was removed.
    pub fn truncate(&mut self, max_slot: usize) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot, _| *slot <= max_slot);
        self.slots.len() != before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/annotation.rs"]
mod tests;
