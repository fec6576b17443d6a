use super::{BUTTON_ACCENT, BUTTON_FILL, MenuScene};
use crate::engine::{Color, Engine};
use crate::input::{Action, ActionMap};
use crate::scene::{Scene, SceneAction};

const RESUME_BUTTON: [f32; 4] = [300.0, 260.0, 200.0, 50.0];
const MENU_BUTTON: [f32; 4] = [300.0, 330.0, 200.0, 50.0];

/// Drawn over the frozen play scene.
pub struct PauseScene {
    actions: ActionMap<Action>,
}

impl PauseScene {
    pub fn new() -> Self {
        Self { actions: Action::default_map() }
    }
}

impl Default for PauseScene {
    fn default() -> Self { Self::new() }
}

impl Scene for PauseScene {
    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        let [rx, ry, rw, rh] = RESUME_BUTTON;
        let [mx, my, mw, mh] = MENU_BUTTON;

        if self.actions.is_pressed(Action::Pause, &engine.input) || engine.ui.was_clicked(rx, ry, rw, rh) {
            return SceneAction::Pop;
        }
        if engine.ui.was_clicked(mx, my, mw, mh) {
            tracing::info!("session abandoned from the pause menu");
            return SceneAction::ReplaceAll(Box::new(MenuScene::default()));
        }
        SceneAction::None
    }

    fn draw(&mut self, engine: &mut Engine) {
        let [w, h] = engine.logical_size;
        let ui = &mut engine.ui;
        ui.ui_rect(0.0, 0.0, w, h, Color::BLACK.with_alpha(0.6));
        ui.ui_text_centered(w / 2.0, 190.0, "PAUSED", Color::WHITE, 40.0);

        let [rx, ry, rw, rh] = RESUME_BUTTON;
        ui.ui_button(rx, ry, rw, rh, "Resume", BUTTON_FILL, BUTTON_ACCENT);
        let [mx, my, mw, mh] = MENU_BUTTON;
        ui.ui_button(mx, my, mw, mh, "Main menu", BUTTON_FILL, BUTTON_ACCENT);
    }

    fn is_transparent(&self) -> bool { true }

    fn name(&self) -> &'static str { "pause" }
}
