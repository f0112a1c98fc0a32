use crate::camera::Observer;
use crate::canvas::{BLACK, Canvas, RED, WHITE, pack_rgb};
use crate::caster::Probe;
use crate::projection::Projection;
use crate::world::World;

const OBSERVER_SIZE: f32 = 4.0;

/// Draws one frame: walls, the observer and its lines of sight on the left,
/// one shaded strip per probe that hits a wall in the side panel.
///
/// Returns how many probes hit a wall.
pub fn render_frame(
    canvas: &mut Canvas,
    world: &World,
    observer: &Observer,
    probes: &[Probe],
    projection: &Projection,
) -> usize {
    canvas.clear(BLACK);

    for wall in &world.walls {
        let (a, b) = (wall.start(), wall.end());
        canvas.draw_line(a.x, a.y, b.x, b.y, WHITE);
    }

    let mut hits = 0;
    for probe in probes {
        let Some(hit) = probe.cast(observer, &world.walls) else {
            continue;
        };
        hits += 1;

        canvas.draw_line(
            observer.pos.x,
            observer.pos.y,
            hit.point.x,
            hit.point.y,
            WHITE,
        );

        let slice = projection.slice(probe, hit.distance);
        canvas.fill_rect(
            slice.x,
            slice.y,
            slice.width,
            slice.height,
            pack_rgb(slice.shade, slice.shade, slice.shade),
        );
    }

    // On top of the lines of sight
    let half = OBSERVER_SIZE / 2.0;
    canvas.fill_rect(
        observer.pos.x - half,
        observer.pos.y - half,
        OBSERVER_SIZE,
        OBSERVER_SIZE,
        RED,
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::probe_fan;
    use crate::config::Settings;
    use crate::geometry::{Heading, Point};
    use crate::world::Wall;

    fn box_world() -> World {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(400.0, 0.0),
            Point::new(400.0, 400.0),
            Point::new(0.0, 400.0),
        ];
        let walls = (0..4)
            .map(|i| Wall::new(corners[i], corners[(i + 1) % 4]).unwrap())
            .collect();
        World { walls }
    }

    fn render(world: &World, observer: &Observer) -> (Canvas, usize) {
        let settings = Settings::default();
        let mut canvas = Canvas::new(800, 400);
        let hits = render_frame(
            &mut canvas,
            world,
            observer,
            &probe_fan(&settings),
            &Projection::new(&settings),
        );
        (canvas, hits)
    }

    #[test]
    fn enclosed_observer_sees_a_wall_with_every_probe() {
        // Off-center so the outermost probes miss the corners
        let observer = Observer::new(Point::new(200.0, 150.0), Heading::default());
        let (canvas, hits) = render(&box_world(), &observer);
        assert_eq!(hits, 19);

        // Observer dot
        assert_eq!(canvas.pixel(200, 150), RED);
        // Central strip: wall 200 ahead -> height 225, shade 128, centered
        let x = (400.0 + 9.5 * 400.0 / 19.0) as usize;
        assert_eq!(canvas.pixel(x, 200), pack_rgb(128, 128, 128));
        assert_eq!(canvas.pixel(x, 100), pack_rgb(128, 128, 128));
        assert_eq!(canvas.pixel(x, 50), BLACK);
    }

    #[test]
    fn empty_world_draws_only_the_observer() {
        let observer = Observer::new(Point::new(200.0, 200.0), Heading::default());
        let (canvas, hits) = render(&World { walls: Vec::new() }, &observer);
        assert_eq!(hits, 0);
        let red = canvas.pixels.iter().filter(|&&p| p == RED).count();
        assert_eq!(red, 16);
        assert_eq!(canvas.pixels.iter().filter(|&&p| p != RED && p != BLACK).count(), 0);
    }
}
