// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WindowMode {
    /// Standard decorated window at the configured resolution.
    #[default]
    Windowed,
    /// Borderless window sized to the monitor; the game resolution is scaled.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **physical** dimensions are the requested pixel size of the OS window.
/// - **logical** dimensions are the game's coordinate space. Every position in
///   the world data and the HUD layout is expressed in it.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub physical_width: u32,
    pub physical_height: u32,
    pub logical_width: u32,
    pub logical_height: u32,
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    /// 800 × 600, windowed.
    fn default() -> Self {
        Self {
            physical_width:  800,
            physical_height: 600,
            logical_width:   800,
            logical_height:  600,
            mode:            WindowMode::Windowed,
        }
    }
}

impl WindowConfig {
    /// Aspect ratio of the **logical** resolution (`logical_width / logical_height`).
    ///
    /// Returns `0.0` when `logical_height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }

    /// Physical window twice the logical size, for high-DPI screens.
    pub fn doubled(self) -> Self {
        Self {
            physical_width: self.logical_width * 2,
            physical_height: self.logical_height * 2,
            ..self
        }
    }
}
