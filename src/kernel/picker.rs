use crate::models::color::clamp_unit;
use crate::models::Rgb;

/// Colour used when the picker is opened on an unset slot.
pub const DEFAULT_PICKER_COLOR: Rgb = Rgb::RED;

/// HSV colour picker state: a saturation/value box plus a vertical hue bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPicker {
    hue: f32,
    saturation: f32,
    value: f32,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            value: 1.0,
        }
    }
}

impl ColorPicker {
    pub fn from_rgb(color: Rgb) -> Self {
        let mut picker = Self::default();
        picker.set_from_rgb(color);
        picker
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_from_rgb(&mut self, color: Rgb) {
        let (h, s, v) = color.to_hsv();
        self.hue = h;
        self.saturation = s;
        self.value = v;
    }

    /// Pointer offset inside the saturation/value box; x maps to saturation, y to
    /// inverted value. Positions outside the box are clamped to its edge.
    pub fn update_from_saturation_value_pointer(&mut self, rel_x: f64, rel_y: f64, box_size: f64) {
        if !(box_size > 0.0) {
            return;
        }
        self.saturation = clamp_unit((rel_x / box_size) as f32);
        self.value = 1.0 - clamp_unit((rel_y / box_size) as f32);
    }

    pub fn update_from_hue_pointer(&mut self, rel_y: f64, bar_size: f64) {
        if !(bar_size > 0.0) {
            return;
        }
        self.hue = clamp_unit((rel_y / bar_size) as f32);
    }

    pub fn current_color(&self) -> Rgb {
        Rgb::from_hsv(self.hue, self.saturation, self.value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/picker.rs"]
mod tests;
