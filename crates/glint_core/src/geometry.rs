//! Geometry primitives
//!
//! Minimal 2D types for viewport intersection tests and pointer-driven
//! displacement. Coordinates follow the document convention: x grows
//! right, y grows down, and element bounds are expressed in document
//! space (add the scroll offset to convert to viewport space).

use std::ops::{Add, Mul, Sub};

/// A 2D vector / point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate toward `other` by factor `t`
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Check approximate equality componentwise
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Intersection of two rectangles, or `None` when they don't overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Fraction of this rectangle's area visible inside `clip`
    ///
    /// Zero-area rectangles are never considered visible.
    pub fn visible_fraction(&self, clip: &Rect) -> f32 {
        match self.intersect(clip) {
            None => 0.0,
            Some(overlap) => overlap.area() / self.area().max(f32::EPSILON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let overlap = a.intersect(&b).unwrap();
        assert_eq!(overlap, Rect::new(50.0, 50.0, 50.0, 50.0));

        let c = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);

        // Element half inside the viewport vertically
        let element = Rect::new(0.0, 50.0, 100.0, 100.0);
        assert!((element.visible_fraction(&viewport) - 0.5).abs() < 1e-6);

        // Fully outside
        let below = Rect::new(0.0, 200.0, 100.0, 100.0);
        assert_eq!(below.visible_fraction(&viewport), 0.0);

        // Fully inside
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!((inner.visible_fraction(&viewport) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_visible_fraction_zero_area() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let collapsed = Rect::new(10.0, 10.0, 0.0, 0.0);
        // Zero-area elements never produce a positive-area intersection
        assert_eq!(collapsed.visible_fraction(&viewport), 0.0);
    }
}
