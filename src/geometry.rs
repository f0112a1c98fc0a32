use std::f32::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// (x, y) in screen space, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, scalar: f32) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

/// Facing direction in radians, kept in (-pi, pi].
///
/// Angles only combine with other headings; use [`Heading::to_unit`] to get
/// something that can be scaled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Heading(f32);

impl Heading {
    pub fn from_radians(rad: f32) -> Self {
        Heading(normalize(rad))
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn rotate(self, by: Heading) -> Heading {
        Heading::from_radians(self.0 + by.0)
    }

    #[inline]
    pub fn to_unit(self) -> Point {
        Point::new(self.0.cos(), self.0.sin())
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
}

impl Neg for Heading {
    type Output = Heading;

    fn neg(self) -> Heading {
        Heading::from_radians(-self.0)
    }
}

// Wrap into (-pi, pi] to avoid float drift from repeated turns
fn normalize(rad: f32) -> f32 {
    let wrapped = (rad + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Linear remap of `value` from `[from_a, from_b]` onto `[to_a, to_b]`, unclamped.
#[inline]
pub fn linear_map(value: f32, from_a: f32, from_b: f32, to_a: f32, to_b: f32) -> f32 {
    (to_b - to_a) * (value - from_a) / (from_b - from_a) + to_a
}

#[cfg(test)]
pub(crate) fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "expected {b}, got {a}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_close(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn heading_unit_vector() {
        let east = Heading::from_radians(0.0).to_unit();
        assert_close(east.x, 1.0);
        assert_close(east.y, 0.0);

        let down = Heading::from_radians(FRAC_PI_2).to_unit();
        assert_close(down.x, 0.0);
        assert_close(down.y, 1.0);
    }

    #[test]
    fn heading_wraps_into_half_open_range() {
        let h = Heading::from_radians(PI + 0.5);
        assert_close(h.radians(), -PI + 0.5);

        let h = Heading::from_radians(-PI);
        assert_close(h.radians(), PI);

        let turned = Heading::from_radians(PI - 0.1).rotate(Heading::from_radians(0.2));
        assert_close(turned.radians(), -PI + 0.1);
    }

    #[test]
    fn rotate_then_rotate_back_is_identity() {
        let start = Heading::from_radians(1.25);
        let delta = Heading::from_radians(PI / 36.0);
        assert_close(start.rotate(delta).rotate(-delta).radians(), 1.25);
    }

    #[test]
    fn linear_map_endpoints_and_midpoint() {
        assert_close(linear_map(0.0, 0.0, 400.0, 400.0, 50.0), 400.0);
        assert_close(linear_map(400.0, 0.0, 400.0, 400.0, 50.0), 50.0);
        assert_close(linear_map(200.0, 0.0, 400.0, 400.0, 50.0), 225.0);
    }
}
