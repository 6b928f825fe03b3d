//! Paint sources: the fixed standard palette, the per-world custom palette and the eraser.

use super::color::Rgb;

pub const CUSTOM_PALETTE_LEN: usize = 8;
pub const STANDARD_PALETTE_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardColor {
    pub name: &'static str,
    pub color: Rgb,
}

const fn std_color(name: &'static str, value: u32) -> StandardColor {
    StandardColor {
        name,
        color: Rgb::new(value),
    }
}

pub const STANDARD_PALETTE: [StandardColor; STANDARD_PALETTE_LEN] = [
    std_color("red", 0x993333),
    std_color("orange", 0xD87F33),
    std_color("yellow", 0xE5E533),
    std_color("lime", 0x7FCC19),
    std_color("green", 0x667F33),
    std_color("cyan", 0x4C7F99),
    std_color("light_blue", 0x6699D8),
    std_color("blue", 0x334CB2),
    std_color("purple", 0x7F3FB2),
    std_color("magenta", 0xB24CD8),
    std_color("pink", 0xF27FA5),
    std_color("brown", 0x664C33),
    std_color("white", 0xFFFFFF),
    std_color("light_gray", 0x999999),
    std_color("gray", 0x4C4C4C),
    std_color("black", 0x191919),
];

/// Eight user-defined colours shared by every container of one world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomPalette {
    colors: [Option<Rgb>; CUSTOM_PALETTE_LEN],
}

impl CustomPalette {
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, color: Option<Rgb>) -> bool {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    pub fn colors(&self) -> [Option<Rgb>; CUSTOM_PALETTE_LEN] {
        self.colors
    }

    pub fn to_packed(&self) -> [u32; CUSTOM_PALETTE_LEN] {
        self.colors
            .map(|color| color.map(|c| c.to_packed()).unwrap_or(0))
    }

    /// Copies the overlapping prefix of `values`; missing entries stay unset, extra ones
    /// are ignored.
    pub fn from_packed(values: &[i64]) -> Self {
        let mut palette = CustomPalette::default();
        for (slot, value) in palette.colors.iter_mut().zip(values) {
            *slot = Rgb::from_packed(*value);
        }
        palette
    }
}

/// The single active paint tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintSource {
    Eraser,
    Standard(usize),
    Custom(usize),
}

impl Default for PaintSource {
    fn default() -> Self {
        PaintSource::Standard(0)
    }
}

impl PaintSource {
    /// Colour this source paints with. `None` for the eraser and for unset custom slots.
    pub fn color(&self, palette: &CustomPalette) -> Option<Rgb> {
        match *self {
            PaintSource::Eraser => None,
            PaintSource::Standard(i) => STANDARD_PALETTE.get(i).map(|c| c.color),
            PaintSource::Custom(i) => palette.get(i),
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, PaintSource::Eraser)
    }

    pub fn custom_index(&self) -> Option<usize> {
        match *self {
            PaintSource::Custom(i) => Some(i),
            _ => None,
        }
    }

    /// Index in the legacy combined numbering: standard `0..16`, custom `16..24`.
    pub fn from_legacy_index(index: usize) -> Option<PaintSource> {
        if index < STANDARD_PALETTE_LEN {
            Some(PaintSource::Standard(index))
        } else if index < STANDARD_PALETTE_LEN + CUSTOM_PALETTE_LEN {
            Some(PaintSource::Custom(index - STANDARD_PALETTE_LEN))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/palette.rs"]
mod tests;
