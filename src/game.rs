use rand::Rng;

use crate::camera::Observer;
use crate::canvas::Canvas;
use crate::caster::{Probe, probe_fan};
use crate::config::Settings;
use crate::geometry::Heading;
use crate::input::{Key, KeySet};
use crate::projection::Projection;
use crate::renderer;
use crate::world::World;

/// Demo state advanced by the window loop: `update` once per tick, `draw` once per frame.
pub struct Game {
    world: World,
    observer: Observer,
    probes: Vec<Probe>,
    projection: Projection,
    keys: KeySet,
    move_step: f32,
    turn_step: Heading,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let world = World::random(rng, settings.wall_count, settings.field_extent);
        Self::with_world(settings, world)
    }

    pub fn with_world(settings: &Settings, world: World) -> Self {
        Self {
            world,
            observer: Observer::new(settings.start_position, settings.start_heading),
            probes: probe_fan(settings),
            projection: Projection::new(settings),
            keys: KeySet::default(),
            move_step: settings.move_step,
            turn_step: Heading::from_radians(settings.turn_step),
        }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn press(&mut self, key: Key) {
        self.keys.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Forgets every held key, for when key releases can no longer be observed.
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Applies every held key once.
    pub fn update(&mut self) {
        for key in self.keys.iter() {
            match key {
                Key::Forward => self.observer.move_by(self.move_step),
                Key::Back => self.observer.move_by(-self.move_step),
                Key::TurnLeft => self.observer.turn(-self.turn_step),
                Key::TurnRight => self.observer.turn(self.turn_step),
            }
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let hits = renderer::render_frame(
            canvas,
            &self.world,
            &self.observer,
            &self.probes,
            &self.projection,
        );
        log::trace!("{hits}/{} probes hit a wall", self.probes.len());
    }
}
