use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
pub use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::EngineError;
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::renderer::text::FontAsset;
use crate::ui::UI;
use crate::window::{WindowConfig, apply_window_settings};

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const GRAY: Self = Self([0.6, 0.6, 0.6, 1.0]);
    pub const DARK_GRAY: Self = Self([0.2, 0.2, 0.2, 1.0]);
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Self = Self([0.0, 1.0, 0.0, 1.0]);
    pub const YELLOW: Self = Self([1.0, 1.0, 0.0, 1.0]);
    pub const CYAN: Self = Self([0.0, 1.0, 1.0, 1.0]);
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    pub const ORANGE: Self = Self([1.0, 0.55, 0.0, 1.0]);

    /// Opaque colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self([self.0[0], self.0[1], self.0[2], a])
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine);
    fn render(&mut self, engine: &mut Engine);
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Per-run state handed to game code: draw list, input, timing.
///
/// Owns no GPU resources, so a headless `Engine` can drive scenes in tests.
pub struct Engine {
    /// Draw list and mouse state. Game code draws via `engine.ui.ui_*()`.
    pub ui: UI,
    /// Unified input state (keyboard, mouse).
    pub input: InputState,
    /// Logical resolution all drawing happens in.
    pub logical_size: [f32; 2],
    dt: f32,
    tick: u64,
    /// Set to `true` by `request_quit()`; the event loop exits after the current tick.
    pub(crate) quit_requested: bool,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Engine without a window. `font` may be `None`; text calls then no-op.
    pub fn headless(logical_size: [f32; 2], font: Option<crate::renderer::text::Font>) -> Self {
        Self {
            ui: UI::new(font),
            input: InputState::new(),
            logical_size,
            dt: 0.0,
            tick: 0,
            quit_requested: false,
        }
    }

    pub fn dt(&self) -> f32 { self.dt }
    pub fn tick(&self) -> u64 { self.tick }

    /// Advance the clock by one fixed step. The event loop calls this before
    /// every update; tests call it to step a headless engine.
    pub fn begin_tick(&mut self, dt: f32) {
        self.dt = dt;
        self.tick += 1;
        self.ui.mouse_clicked = self.input.is_mouse_pressed(MouseButton::Left);
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.input.is_key_held(key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.input.is_key_pressed(key) }

    /// Signal that the application should exit.  The event loop will call
    /// `exit()` after the current update tick completes.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Convert a physical cursor position into logical coordinates.
    pub fn to_logical(&self, physical: [f32; 2], surface: [u32; 2]) -> [f32; 2] {
        let sx = self.logical_size[0] / surface[0].max(1) as f32;
        let sy = self.logical_size[1] / surface[1].max(1) as f32;
        [physical[0] * sx, physical[1] * sy]
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

pub struct EngineBuilder {
    title: String,
    window: WindowConfig,
    target_ups: u32,
    font_dir: PathBuf,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            title: "walkabout".into(),
            window: WindowConfig::default(),
            target_ups: 60,
            font_dir: PathBuf::from("assets/fonts"),
        }
    }
}

impl EngineBuilder {
    pub fn with_title(mut self, title: &str) -> Self { self.title = title.into(); self }
    pub fn with_window(mut self, window: WindowConfig) -> Self { self.window = window; self }
    pub fn with_ups(mut self, ups: u32) -> Self { self.target_ups = ups.max(1); self }

    /// Directory holding `atlas.png` and `glyphs.json`.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into(); self
    }

    pub fn run(self, game: impl Game + 'static) -> Result<(), EngineError> {
        let event_loop = EventLoop::new()?;
        let fixed_dt = 1.0 / self.target_ups as f32;
        let mut app = App {
            config: self,
            game: Box::new(game),
            engine: None,
            renderer: None,
            last_instant: None,
            accumulator: 0.0,
            fixed_dt,
        };
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: EngineBuilder,
    game: Box<dyn Game>,
    engine: Option<Engine>,
    renderer: Option<Renderer>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        let win = &self.config.window;
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(win.physical_width, win.physical_height))
            .with_resizable(false);
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        apply_window_settings(&window, win);

        let font = match FontAsset::load(&self.config.font_dir) {
            Ok(asset) => {
                tracing::info!(
                    "loaded font from {} ({} glyphs)",
                    self.config.font_dir.display(),
                    asset.font.glyphs.len()
                );
                Some(asset)
            }
            Err(e) => {
                tracing::error!("font unavailable, text will not be drawn: {e}");
                None
            }
        };

        let logical = [win.logical_width as f32, win.logical_height as f32];
        let renderer = match pollster::block_on(Renderer::new(
            window,
            logical,
            font.as_ref().map(|f| &f.atlas),
        )) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("renderer initialisation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut engine = Engine::headless(logical, font.map(|f| f.font));
        self.game.on_enter(&mut engine);
        self.engine = Some(engine);
        self.renderer = Some(renderer);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(engine), Some(renderer)) = (self.engine.as_mut(), self.renderer.as_mut()) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => renderer.resize(size),

            WindowEvent::CursorMoved { position, .. } => {
                let physical = [position.x as f32, position.y as f32];
                engine.input.mouse_pos = engine.to_logical(physical, renderer.surface_size());
                engine.ui.mouse_pos = engine.input.mouse_pos;
            }

            WindowEvent::MouseInput { button, state, .. } => match state {
                ElementState::Pressed => {
                    if engine.input.mouse_held.insert(button) {
                        engine.input.mouse_pressed.insert(button);
                    }
                }
                ElementState::Released => {
                    engine.input.mouse_held.remove(&button);
                    engine.input.mouse_released.insert(button);
                }
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32().min(0.25),
                    None => self.fixed_dt,
                };
                self.last_instant = Some(now);
                self.accumulator += elapsed;

                let mut ticked = false;
                while self.accumulator >= self.fixed_dt {
                    engine.begin_tick(self.fixed_dt);
                    self.game.update(engine);
                    if engine.quit_requested {
                        tracing::info!("quit requested after {} ticks", engine.tick());
                        event_loop.exit();
                        return;
                    }
                    self.accumulator -= self.fixed_dt;
                    // Edge-triggered input is consumed by the first tick only.
                    engine.input.clear_frame_state();
                    engine.ui.mouse_clicked = false;
                    ticked = true;
                }
                if ticked {
                    tracing::trace!(tick = engine.tick(), "frame");
                }

                engine.ui.clear();
                self.game.render(engine);

                match renderer.render(&engine.ui.vertices) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = renderer.window.inner_size();
                        renderer.resize(size);
                    }
                    Err(e) => tracing::warn!("render error: {e}"),
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    if engine.input.keys_held.insert(code) {
                        engine.input.keys_pressed.insert(code);
                    }
                }
                ElementState::Released => {
                    engine.input.keys_held.remove(&code);
                    engine.input.keys_released.insert(code);
                }
            },

            _ => {}
        }
    }
}
