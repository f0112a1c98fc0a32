use crate::geometry::{Heading, Point};

/// Viewer in the top-down field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub pos: Point,       // screen-space position
    pub heading: Heading, // 0 rad faces +x, positive turns clockwise on screen
}

impl Observer {
    pub fn new(pos: Point, heading: Heading) -> Self {
        Self { pos, heading }
    }

    /// Step along the current heading; negative `scalar` walks backwards.
    #[inline]
    pub fn moved(self, scalar: f32) -> Self {
        Self {
            pos: self.pos + self.heading.to_unit() * scalar,
            ..self
        }
    }

    #[inline]
    pub fn turned(self, delta: Heading) -> Self {
        Self {
            heading: self.heading.rotate(delta),
            ..self
        }
    }

    pub fn move_by(&mut self, scalar: f32) {
        *self = self.moved(scalar);
    }

    pub fn turn(&mut self, delta: Heading) {
        *self = self.turned(delta);
    }
}
