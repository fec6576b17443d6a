use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use walkabout::config::GameConfig;
use walkabout::engine::Engine;
use walkabout::scene::SceneStack;
use walkabout::scenes::{MenuScene, TITLE};
use walkabout::window::WindowConfig;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting {TITLE}");

    Engine::builder()
        .with_title(TITLE)
        .with_window(WindowConfig::default())
        .with_ups(60)
        .with_font_dir("assets/fonts")
        .run(SceneStack::new(Box::new(MenuScene::new(GameConfig::default()))))
        .context("event loop failed")?;

    info!("Goodbye");
    Ok(())
}
