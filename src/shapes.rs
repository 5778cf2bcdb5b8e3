//! Shapes as independent value types sharing one capability.
//!
//! [`Square`] is not a [`Rectangle`]: resizing one never has side effects on
//! a dimension the caller didn't touch.

/// Anything with an area
pub trait Shape {
    /// Surface area
    fn area(&self) -> f64;
}

/// Axis-aligned rectangle with independently settable sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// New rectangle
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Current width
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Current height
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Changes the width; the height is left alone
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Changes the height; the width is left alone
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Square defined by a single side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    /// New square
    #[must_use]
    pub const fn new(side: f64) -> Self {
        Self { side }
    }

    /// Current side length
    #[must_use]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Changes the side length
    pub fn set_side(&mut self, side: f64) {
        self.side = side;
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// Grows `rectangle` by `by` along its width only
pub fn widen(rectangle: &mut Rectangle, by: f64) {
    rectangle.set_width(rectangle.width() + by);
}

/// Sum of the areas of `shapes`
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
