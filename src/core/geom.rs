/// Pointer position in screen pixels. The host may report sub-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Half-open containment: left/top edges are inside, right/bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x as f64
            && p.x < self.right() as f64
            && p.y >= self.y as f64
            && p.y < self.bottom() as f64
    }

    /// Closed containment, used for window-sized regions where the frame itself counts.
    pub fn contains_inclusive(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x as f64
            && p.x <= self.right() as f64
            && p.y >= self.y as f64
            && p.y <= self.bottom() as f64
    }

    pub fn expand(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2,
            self.h + margin * 2,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/geom.rs"]
mod tests;
