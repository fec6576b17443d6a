use std::path::PathBuf;

/// Errors that can occur while loading the bitmap font.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("I/O error loading '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to decode image '{0}': {1}")]
    Image(PathBuf, #[source] image::ImageError),

    #[error("malformed glyph map '{0}': {1}")]
    GlyphMap(PathBuf, #[source] serde_json::Error),
}

/// Errors in the world data tables.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed world data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("trigger {index} leads from {area} back into itself")]
    SelfLoop { index: usize, area: String },

    #[error("npc '{0}' has no dialogue lines")]
    Mute(String),
}

/// Errors raised while bringing up the GPU surface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Errors that end the application before or during the event loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
