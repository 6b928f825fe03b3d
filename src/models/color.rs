use std::fmt;

/// A 24-bit RGB colour. The upper byte is always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rgb(u32);

/// Alpha bits written next to every stored colour so that pure black is distinguishable
/// from "unset" (stored as `0`).
pub const OPAQUE: u32 = 0xFF00_0000;

impl Rgb {
    pub const RED: Rgb = Rgb(0xFF_0000);
    pub const WHITE: Rgb = Rgb(0xFF_FFFF);
    pub const BLACK: Rgb = Rgb(0);

    pub const fn new(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    pub const fn channels(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// ARGB with the given alpha, the layout renderers expect.
    pub const fn with_alpha(&self, alpha: u8) -> u32 {
        ((alpha as u32) << 24) | self.0
    }

    /// Packed on-disk form: `0xFF` alpha plus the colour.
    pub const fn to_packed(&self) -> u32 {
        OPAQUE | self.0
    }

    /// Inverse of [`Rgb::to_packed`]. `0` means "unset"; values written without an alpha
    /// byte are accepted as plain RGB, and negative values as signed 32-bit ARGB.
    pub fn from_packed(value: i64) -> Option<Rgb> {
        let bits = if (i32::MIN as i64..0).contains(&value) {
            value as i32 as u32
        } else if (0..=u32::MAX as i64).contains(&value) {
            value as u32
        } else {
            return None;
        };
        if bits == 0 {
            return None;
        }
        Some(Rgb::new(bits))
    }

    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let (r, g, b) = self.channels();
        rgb_to_hsv(r, g, b)
    }

    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Rgb {
        let (r, g, b) = hsv_to_rgb(hue, saturation, value);
        Rgb::from_channels(r, g, b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb(#{:06X})", self.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// RGB → HSV, every component in `[0, 1]`. Greys report hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let value = max as f32 / 255.0;
    let saturation = if max != 0 {
        (max - min) as f32 / max as f32
    } else {
        0.0
    };

    if saturation == 0.0 {
        return (0.0, 0.0, value);
    }

    let span = (max - min) as f32;
    let rc = (max - r) as f32 / span;
    let gc = (max - g) as f32 / span;
    let bc = (max - b) as f32 / span;

    let mut hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }

    (hue, saturation, value)
}

/// HSV → RGB. Hue wraps (1.0 is red again); saturation and value are clamped.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let saturation = clamp_unit(saturation);
    let value = clamp_unit(value);

    if saturation == 0.0 {
        let v = to_channel(value);
        return (v, v, v);
    }

    let hue = if hue.is_finite() { hue } else { 0.0 };
    let mut h = (hue - hue.floor()) * 6.0;
    // hue - floor(hue) rounds up to 1.0 for tiny negative hues
    if h >= 6.0 {
        h -= 6.0;
    }
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/models/color.rs"]
mod tests;
