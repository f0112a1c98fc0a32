//! Distance to side-panel strip: fisheye correction, slice height and shade.

use crate::caster::Probe;
use crate::config::Settings;
use crate::geometry::{Heading, linear_map};

/// Vertical strip drawn for one probe in the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub shade: u8,
}

pub struct Projection {
    near: f32,
    far: f32,
    slice_near: f32,
    slice_far: f32,
    shade_near: f32,
    shade_far: f32,
    panel_left: f32,
    panel_height: f32,
    strip_width: f32,
}

impl Projection {
    pub fn new(settings: &Settings) -> Self {
        Self {
            near: settings.near,
            far: settings.far,
            slice_near: settings.slice_near,
            slice_far: settings.slice_far,
            shade_near: settings.shade_near,
            shade_far: settings.shade_far,
            panel_left: settings.panel_left,
            panel_height: settings.panel_height,
            // Every strip of the fan fits inside the panel
            strip_width: settings.panel_width / settings.probe_count().max(1) as f32,
        }
    }

    /// Removes fisheye: distance measured along the central heading instead of the ray.
    #[inline]
    pub fn corrected_distance(distance: f32, offset: Heading) -> f32 {
        distance * offset.cos()
    }

    /// Exact linear map inside `[near, far]`; outside it the height is kept within the panel.
    pub fn slice_height(&self, distance: f32) -> f32 {
        linear_map(distance, self.near, self.far, self.slice_near, self.slice_far)
            .clamp(0.0, self.panel_height)
    }

    /// Exact linear map inside `[near, far]`; outside it the channel value saturates.
    pub fn shade(&self, distance: f32) -> f32 {
        linear_map(distance, self.near, self.far, self.shade_near, self.shade_far)
            .clamp(0.0, 255.0)
    }

    pub fn slice(&self, probe: &Probe, distance: f32) -> Slice {
        let corrected = Self::corrected_distance(distance, probe.offset);
        let height = self.slice_height(corrected);
        Slice {
            x: self.panel_left + probe.index as f32 * self.strip_width,
            y: (self.panel_height - height) / 2.0,
            width: self.strip_width,
            height,
            shade: self.shade(corrected).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::assert_close;
    use std::f32::consts::PI;

    fn projection() -> Projection {
        Projection::new(&Settings::default())
    }

    #[test]
    fn straight_ahead_needs_no_correction() {
        assert_close(Projection::corrected_distance(137.0, Heading::default()), 137.0);
    }

    #[test]
    fn side_rays_are_shortened() {
        let d = Projection::corrected_distance(100.0, Heading::from_radians(PI / 3.0));
        assert_close(d, 50.0);
    }

    #[test]
    fn height_endpoints_and_linearity() {
        let p = projection();
        assert_close(p.slice_height(0.0), 400.0);
        assert_close(p.slice_height(400.0), 50.0);
        assert_close(p.slice_height(100.0), 312.5);
        assert_close(p.slice_height(300.0), 137.5);
    }

    #[test]
    fn shade_is_monotonic_over_range() {
        let p = projection();
        assert_close(p.shade(0.0), 255.0);
        assert_close(p.shade(400.0), 0.0);
        let mut last = p.shade(0.0);
        for d in (10..=400).step_by(10) {
            let s = p.shade(d as f32);
            assert!(s < last, "shade({d}) = {s} not below {last}");
            last = s;
        }
    }

    #[test]
    fn far_walls_saturate() {
        let p = projection();
        assert_close(p.shade(565.0), 0.0);
        assert_close(p.slice_height(565.0), 0.0);
    }

    #[test]
    fn slice_is_centered_in_its_slot() {
        let p = projection();
        let probe = Probe {
            offset: Heading::default(),
            index: 2,
        };
        let s = p.slice(&probe, 400.0);
        assert_close(s.height, 50.0);
        assert_close(s.y, 175.0);
        assert_close(s.x, 400.0 + 2.0 * 400.0 / 19.0);
        assert_close(s.width, 400.0 / 19.0);
        assert_eq!(s.shade, 0);
    }

    #[test]
    fn last_strip_ends_at_panel_edge() {
        let p = projection();
        let probe = Probe {
            offset: Heading::from_radians(PI / 4.0),
            index: 18,
        };
        let s = p.slice(&probe, 10.0);
        assert_close(s.x + s.width, 800.0);
    }
}
