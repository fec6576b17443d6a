pub mod config;

pub use config::{WindowConfig, WindowMode};

use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window};

/// Apply `config` to `window`.
///
/// `Windowed` leaves fullscreen, restores decorations and requests the
/// configured physical size; the resize arrives later as
/// `WindowEvent::Resized`. `Borderless` fills the current monitor and the
/// renderer scales the logical resolution to it.
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    match config.mode {
        WindowMode::Windowed => {
            window.set_fullscreen(None);
            window.set_decorations(true);
            window.set_resizable(false);
            let _ = window.request_inner_size(PhysicalSize::new(
                config.physical_width,
                config.physical_height,
            ));
        }
        WindowMode::Borderless => {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }
    tracing::debug!(?config.mode, "window settings applied");
}
