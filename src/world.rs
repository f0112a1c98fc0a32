use rand::Rng;

use crate::error::GeometryError;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    start: Point, // (x, y) start point in screen space
    end: Point,   // (x, y) end point in screen space
}

impl Wall {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        if (end - start).length_squared() == 0.0 {
            return Err(GeometryError::DegenerateWall { at: start });
        }
        Ok(Self { start, end })
    }

    /// Random wall with integer endpoints in `[0, extent]` on both axes.
    /// Draws again while both endpoints land on the same spot.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, extent: u32) -> Self {
        loop {
            let start = random_point(rng, extent);
            let end = random_point(rng, extent);
            if let Ok(wall) = Wall::new(start, end) {
                return wall;
            }
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, extent: u32) -> Point {
    Point::new(
        rng.gen_range(0..=extent) as f32,
        rng.gen_range(0..=extent) as f32,
    )
}

pub struct World {
    pub walls: Vec<Wall>,
}

impl World {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: u32) -> Self {
        let walls = (0..count).map(|_| Wall::random(rng, extent)).collect();
        Self { walls }
    }
}
