use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub cell_size: f64,
    pub hit_threshold: f64,
    /// Cell count of a single (unpaired) container. Slots at or past this index are
    /// dropped when a double container is split.
    pub single_container_capacity: usize,
    pub flash_ms: u64,
    pub status_ms: u64,
    pub status_fade_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            hit_threshold: 5.0,
            single_container_capacity: 27,
            flash_ms: 200,
            status_ms: 2000,
            status_fade_ms: 500,
        }
    }
}

impl EditorConfig {
    /// Highest slot index that survives a split, or `None` when the capacity is zero.
    pub fn max_single_slot(&self) -> Option<usize> {
        self.single_container_capacity.checked_sub(1)
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    /// Opacity of a status message `elapsed` after it was shown: fully opaque until the
    /// fade window, then linear down to zero. `None` once it has expired.
    pub fn status_alpha(&self, elapsed: Duration) -> Option<u8> {
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms >= self.status_ms {
            return None;
        }
        let fade = self.status_fade_ms.min(self.status_ms);
        let fade_start = self.status_ms - fade;
        if elapsed_ms <= fade_start || fade == 0 {
            return Some(u8::MAX);
        }
        let remaining = 1.0 - (elapsed_ms - fade_start) as f64 / fade as f64;
        Some((255.0 * remaining) as u8)
    }
}
