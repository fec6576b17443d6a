//! The four screens of the game, stacked on a `SceneStack`.

pub mod credits;
pub mod menu;
pub mod pause;
pub mod play;

pub use credits::CreditsScene;
pub use menu::MenuScene;
pub use pause::PauseScene;
pub use play::PlayScene;

use crate::engine::Color;

pub const TITLE: &str = "Nolan's Wild Adventures";

const BUTTON_FILL: Color = Color::rgb(40, 60, 40);
const BUTTON_ACCENT: Color = Color::rgb(100, 200, 100);
