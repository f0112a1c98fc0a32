use crate::camera::Observer;
use crate::config::Settings;
use crate::geometry::{Heading, Point};
use crate::world::Wall;

// Below this the ray and the wall are treated as parallel
const PARALLEL_EPS: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Point,
    pub distance: f32,
}

/// Intersection of the ray leaving `origin` along `direction` with the wall segment.
///
/// The ray is the line through `p1 = origin` and `p2 = origin + direction`; `t`
/// runs along the ray (forward is `t >= 0`) and `u` along the wall (`0..=1` is
/// on the segment). Parallel and coincident lines report no hit.
pub fn intersect(origin: Point, direction: Point, wall: &Wall) -> Option<Point> {
    let (x1, y1) = (origin.x, origin.y);
    let p2 = origin + direction;
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (wall.start().x, wall.start().y);
    let (x4, y4) = (wall.end().x, wall.end().y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = ((y1 - y2) * (x1 - x3) - (x1 - x2) * (y1 - y3)) / denom;

    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(origin + (p2 - origin) * t)
    } else {
        None
    }
}

/// Closest wall hit along the ray, if any.
pub fn closest_hit<'a, I>(origin: Point, direction: Point, walls: I) -> Option<Hit>
where
    I: IntoIterator<Item = &'a Wall>,
{
    walls
        .into_iter()
        .filter_map(|wall| intersect(origin, direction, wall))
        .map(|point| Hit {
            point,
            distance: origin.distance_to(point),
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// One ray of the fan. It only stores its angular offset and slot; position and
/// direction come from the observer at cast time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub offset: Heading,
    pub index: usize,
}

impl Probe {
    #[inline]
    pub fn heading(&self, observer: &Observer) -> Heading {
        observer.heading.rotate(self.offset)
    }

    pub fn cast<'a, I>(&self, observer: &Observer, walls: I) -> Option<Hit>
    where
        I: IntoIterator<Item = &'a Wall>,
    {
        closest_hit(observer.pos, self.heading(observer).to_unit(), walls)
    }
}

/// Fan of probes from `-fov_half` to `+fov_half`, one every `probe_step` radians.
pub fn probe_fan(settings: &Settings) -> Vec<Probe> {
    (0..settings.probe_count())
        .map(|index| Probe {
            offset: Heading::from_radians(-settings.fov_half + index as f32 * settings.probe_step),
            index,
        })
        .collect()
}
