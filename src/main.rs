use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::config::Settings;
use crate::game::Game;
use crate::input::Key;
use crate::scaler::{ScaleLut, blit_nearest, build_scale_lut};
use crate::ticker::Ticker;

mod camera;
mod canvas;
mod caster;
mod config;
mod error;
mod game;
mod geometry;
mod input;
mod projection;
mod renderer;
mod scaler;
mod ticker;
mod world;

// Longest stretch of time replayed as ticks after a stall
const MAX_CATCH_UP: Duration = Duration::from_millis(100);

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    settings: Settings,
    game: Game,

    // HUD
    frame_counter: u32,
    last_fps_print: Instant,

    // Logical 800x400 canvas, stretched onto the surface
    canvas: Canvas,
    scale_lut: ScaleLut,

    // Fixed-rate updates
    last_tick: Instant,
    ticker: Ticker,
}

impl App {
    fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "walls: {}, seed: {seed} (set {} to replay)",
            settings.wall_count,
            config::SEED_VAR
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let game = Game::new(&settings, &mut rng);
        let canvas = Canvas::new(
            settings.window_width as usize,
            settings.window_height as usize,
        );
        let ticker = Ticker::new(settings.tick, MAX_CATCH_UP);

        Self {
            window: None,
            surface: None,
            settings,
            game,

            frame_counter: 0,
            last_fps_print: Instant::now(),

            canvas,
            scale_lut: ScaleLut::empty(),

            last_tick: Instant::now(),
            ticker,
        }
    }

    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> anyhow::Result<(Rc<Window>, softbuffer::Surface<Rc<Window>, Rc<Window>>)> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.window_width as f64,
                self.settings.window_height as f64,
            ))
            .with_resizable(false);

        let window = Rc::new(event_loop.create_window(attributes).context("create window")?);
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;
        Ok((window, surface))
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let ticks = self.ticker.advance(now.duration_since(self.last_tick));
        self.last_tick = now;

        for _ in 0..ticks {
            self.game.update();
        }
    }

    fn rebuild_lut(&mut self, dst_w: usize, dst_h: usize) {
        if self.scale_lut.dst_size() == (dst_w, dst_h) {
            return;
        }
        log::debug!(
            "surface {}x{} for canvas {}x{}",
            dst_w,
            dst_h,
            self.canvas.width,
            self.canvas.height
        );
        self.scale_lut = build_scale_lut(dst_w, dst_h, self.canvas.width, self.canvas.height);
    }

    fn redraw(&mut self, id: WindowId) {
        self.tick();

        let size = match &self.window {
            Some(w) if w.id() == id => w.inner_size(),
            _ => return,
        };
        let (Some(dw), Some(dh)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return; // Minimized window, skip drawing
        };
        self.rebuild_lut(dw.get() as usize, dh.get() as usize);

        self.game.draw(&mut self.canvas);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(e) = surface.resize(dw, dh) {
            log::warn!("surface resize failed: {e}");
            return;
        }
        let mut buf = match surface.buffer_mut() {
            Ok(buf) => buf,
            Err(e) => {
                log::warn!("surface buffer unavailable: {e}");
                return;
            }
        };
        blit_nearest(
            &mut buf,
            dw.get() as usize,
            &self.canvas.pixels,
            self.canvas.width,
            &self.scale_lut,
        );
        if let Err(e) = buf.present() {
            log::warn!("present failed: {e}");
        }

        self.frame_counter += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print).as_secs_f32();
        if elapsed >= 1.0 {
            log::debug!("FPS: {:.1}", self.frame_counter as f32 / elapsed);
            self.frame_counter = 0;
            self.last_fps_print = now;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.create_window(event_loop) {
            Ok((window, surface)) => {
                window.request_redraw();
                self.surface = Some(surface);
                self.window = Some(window);
                self.last_tick = Instant::now();
                self.ticker.reset();
            }
            Err(e) => {
                log::error!("{e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(key) = Key::from_code(code) else {
                    return;
                };
                log::debug!("{key:?} {state:?}");
                match state {
                    ElementState::Pressed => self.game.press(key),
                    ElementState::Released => {
                        self.game.release(key);
                        let observer = self.game.observer();
                        log::debug!(
                            "observer at ({:.1}, {:.1}) facing {:.3} rad",
                            observer.pos.x,
                            observer.pos.y,
                            observer.heading.radians()
                        );
                    }
                }
            }

            // Releases that happen while unfocused are never delivered
            WindowEvent::Focused(false) => {
                log::debug!("focus lost, releasing held keys");
                self.game.release_all();
            }

            WindowEvent::RedrawRequested => self.redraw(id),

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    log::info!(
        "starting {} ({}x{})",
        settings.title,
        settings.window_width,
        settings.window_height
    );

    let event_loop = EventLoop::new().context("create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).context("event loop")
}
