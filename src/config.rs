use std::f32::consts::{FRAC_PI_4, PI};
use std::str::FromStr;
use std::time::Duration;

use crate::geometry::{Heading, Point};

pub const SEED_VAR: &str = "FEBE_SEED";
pub const WALLS_VAR: &str = "FEBE_WALLS";
pub const MAX_WALLS: usize = 1024;

/// Everything the demo treats as a constant. `Default` reproduces the classic layout:
/// a 400x400 top-down field on the left, a 400x400 view panel on the right.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,

    // World
    pub field_extent: u32,
    pub wall_count: usize,
    pub seed: Option<u64>,

    // Observer
    pub start_position: Point,
    pub start_heading: Heading,
    pub move_step: f32,
    pub turn_step: f32, // radians per tick

    // Probe fan, offsets in [-fov_half, fov_half]
    pub fov_half: f32,
    pub probe_step: f32,

    // Side panel
    pub panel_left: f32,
    pub panel_width: f32,
    pub panel_height: f32,

    // Projection ranges (distance -> height, distance -> shade)
    pub near: f32,
    pub far: f32,
    pub slice_near: f32,
    pub slice_far: f32,
    pub shade_near: f32,
    pub shade_far: f32,

    pub tick: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "FEBE".to_string(),
            window_width: 800,
            window_height: 400,

            field_extent: 400,
            wall_count: 8,
            seed: None,

            start_position: Point::new(200.0, 200.0),
            start_heading: Heading::default(), // facing +x
            move_step: 1.0,
            turn_step: PI / 36.0,

            fov_half: FRAC_PI_4,
            probe_step: PI / 36.0,

            panel_left: 400.0,
            panel_width: 400.0,
            panel_height: 400.0,

            near: 0.0,
            far: 400.0,
            slice_near: 400.0,
            slice_far: 50.0,
            shade_near: 255.0,
            shade_far: 0.0,

            tick: Duration::from_nanos(16_666_667), // 60 Hz
        }
    }
}

impl Settings {
    /// Defaults with `FEBE_SEED` / `FEBE_WALLS` applied from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up through `var`. Unparsable values are logged and ignored.
    pub fn with_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse_var::<u64>(SEED_VAR, var(SEED_VAR)) {
            self.seed = Some(seed);
        }
        match parse_var::<usize>(WALLS_VAR, var(WALLS_VAR)) {
            Some(count) if count <= MAX_WALLS => self.wall_count = count,
            Some(count) => log::warn!("ignoring {WALLS_VAR}={count}: more than {MAX_WALLS} walls"),
            None => {}
        }
        self
    }

    /// Number of probes in the fan; both ends of the range are included.
    pub fn probe_count(&self) -> usize {
        ((2.0 * self.fov_half) / self.probe_step).round() as usize + 1
    }
}

fn parse_var<T: FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a valid number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn default_fan_has_nineteen_probes() {
        assert_eq!(Settings::default().probe_count(), 19);
    }

    #[test]
    fn overrides_are_applied() {
        let s = Settings::default()
            .with_overrides(vars(&[(SEED_VAR, "1234"), (WALLS_VAR, " 3 ")]));
        assert_eq!(s.seed, Some(1234));
        assert_eq!(s.wall_count, 3);
    }

    #[test]
    fn malformed_overrides_fall_back_to_defaults() {
        let s = Settings::default()
            .with_overrides(vars(&[(SEED_VAR, "abc"), (WALLS_VAR, "-1")]));
        assert_eq!(s.seed, None);
        assert_eq!(s.wall_count, 8);
    }

    #[test]
    fn oversized_wall_count_is_rejected() {
        let s = Settings::default().with_overrides(vars(&[(WALLS_VAR, "18446744073709551615")]));
        assert_eq!(s.wall_count, 8);

        let s = Settings::default().with_overrides(vars(&[(WALLS_VAR, "1025")]));
        assert_eq!(s.wall_count, 8);

        let s = Settings::default().with_overrides(vars(&[(WALLS_VAR, "1024")]));
        assert_eq!(s.wall_count, MAX_WALLS);
    }
}
