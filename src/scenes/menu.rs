use tracing::error;

use super::{BUTTON_ACCENT, BUTTON_FILL, PlayScene, TITLE};
use crate::config::GameConfig;
use crate::engine::{Color, Engine};
use crate::input::{Action, ActionMap};
use crate::scene::{Scene, SceneAction};
use crate::session::Session;

const BACKGROUND: Color = Color::rgb(50, 50, 50);
const PLAY_BUTTON: [f32; 4] = [300.0, 350.0, 200.0, 60.0];
const QUIT_BUTTON: [f32; 4] = [300.0, 430.0, 200.0, 60.0];

pub struct MenuScene {
    actions: ActionMap<Action>,
    config: GameConfig,
    /// Set when the world data failed to load; shown instead of starting.
    load_error: Option<String>,
}

impl MenuScene {
    pub fn new(config: GameConfig) -> Self {
        Self { actions: Action::default_map(), config, load_error: None }
    }

    fn start(&mut self) -> SceneAction {
        match Session::embedded(self.config.clone()) {
            Ok(session) => SceneAction::Switch(Box::new(PlayScene::new(session))),
            Err(e) => {
                error!("cannot start a session: {e}");
                self.load_error = Some(e.to_string());
                SceneAction::None
            }
        }
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Scene for MenuScene {
    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        let [px, py, pw, ph] = PLAY_BUTTON;
        let [qx, qy, qw, qh] = QUIT_BUTTON;

        if self.actions.is_pressed(Action::Confirm, &engine.input) || engine.ui.was_clicked(px, py, pw, ph) {
            return self.start();
        }
        if engine.ui.was_clicked(qx, qy, qw, qh) {
            return SceneAction::Quit;
        }
        SceneAction::None
    }

    fn draw(&mut self, engine: &mut Engine) {
        let [w, h] = engine.logical_size;
        let ui = &mut engine.ui;
        ui.ui_rect(0.0, 0.0, w, h, BACKGROUND);
        ui.ui_text_centered(w / 2.0, 150.0, TITLE, Color::WHITE, 48.0);

        let [px, py, pw, ph] = PLAY_BUTTON;
        ui.ui_button(px, py, pw, ph, "PLAY", BUTTON_FILL, BUTTON_ACCENT);
        let [qx, qy, qw, qh] = QUIT_BUTTON;
        ui.ui_button(qx, qy, qw, qh, "QUIT", BUTTON_FILL, BUTTON_ACCENT);

        ui.ui_text_centered(w / 2.0, 520.0, "Enter to play - WASD to walk - E to talk", Color::GRAY, 16.0);
        if let Some(err) = &self.load_error {
            ui.ui_text_centered(w / 2.0, 560.0, err, Color::RED, 16.0);
        }
    }

    fn name(&self) -> &'static str { "menu" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn enter_starts_play() {
        let mut menu = MenuScene::default();
        let mut engine = Engine::headless([800.0, 600.0], None);
        engine.input.press_key(KeyCode::Enter);
        engine.begin_tick(1.0 / 60.0);
        assert!(matches!(menu.update(&mut engine), SceneAction::Switch(s) if s.name() == "play"));
    }

    #[test]
    fn quit_button_quits() {
        let mut menu = MenuScene::default();
        let mut engine = Engine::headless([800.0, 600.0], None);
        engine.ui.mouse_pos = [400.0, 460.0];
        engine.ui.mouse_clicked = true;
        assert!(matches!(menu.update(&mut engine), SceneAction::Quit));
    }
}
