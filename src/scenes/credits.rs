use super::{MenuScene, TITLE};
use crate::engine::{Color, Engine, KeyCode};
use crate::hud::format_clock;
use crate::input::{Action, ActionMap};
use crate::scene::{Scene, SceneAction};

const SCROLL_SPEED: f32 = 40.0;
const LINE_SPACING: f32 = 36.0;

pub struct CreditsScene {
    actions: ActionMap<Action>,
    lines: Vec<String>,
    /// How far the block has scrolled up, in pixels.
    scroll: f32,
}

impl CreditsScene {
    pub fn new(play_time: f32) -> Self {
        tracing::info!("credits after {}", format_clock(play_time));
        let lines = vec![
            "Well done! Nolan has no class today!".to_owned(),
            String::new(),
            TITLE.to_owned(),
            format!("Play time  {}", format_clock(play_time)),
            String::new(),
            "Thanks for playing".to_owned(),
            String::new(),
            "Press Enter to return to the menu".to_owned(),
        ];
        Self { actions: Action::default_map(), lines, scroll: 0.0 }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block stops once its last line reaches the middle of the screen.
    fn max_scroll(&self, height: f32) -> f32 {
        height / 2.0 + (self.lines.len() as f32 - 1.0) * LINE_SPACING
    }
}

impl Scene for CreditsScene {
    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        let height = engine.logical_size[1];
        self.scroll = (self.scroll + SCROLL_SPEED * engine.dt()).min(self.max_scroll(height));

        let [w, h] = engine.logical_size;
        if self.actions.is_pressed(Action::Confirm, &engine.input)
            || engine.is_key_pressed(KeyCode::Escape)
            || engine.ui.was_clicked(0.0, 0.0, w, h)
        {
            return SceneAction::ReplaceAll(Box::new(MenuScene::default()));
        }
        SceneAction::None
    }

    fn draw(&mut self, engine: &mut Engine) {
        let [w, h] = engine.logical_size;
        let ui = &mut engine.ui;
        ui.ui_rect(0.0, 0.0, w, h, Color::BLACK);
        let top = h - self.scroll;
        for (i, line) in self.lines.iter().enumerate() {
            let color = if i == 0 { Color::YELLOW } else { Color::WHITE };
            ui.ui_text_centered(w / 2.0, top + i as f32 * LINE_SPACING, line, color, 24.0);
        }
    }

    fn name(&self) -> &'static str { "credits" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_time_is_listed() {
        let credits = CreditsScene::new(125.0);
        assert!(credits.lines().iter().any(|l| l.ends_with("02:05")));
    }

    #[test]
    fn enter_returns_to_menu() {
        let mut credits = CreditsScene::new(10.0);
        let mut engine = Engine::headless([800.0, 600.0], None);
        engine.input.press_key(KeyCode::Enter);
        engine.begin_tick(1.0 / 60.0);
        assert!(matches!(credits.update(&mut engine), SceneAction::ReplaceAll(s) if s.name() == "menu"));
    }

    #[test]
    fn scrolling_stops() {
        let mut credits = CreditsScene::new(10.0);
        let mut engine = Engine::headless([800.0, 600.0], None);
        for _ in 0..10_000 {
            engine.begin_tick(1.0 / 60.0);
            credits.update(&mut engine);
        }
        assert_eq!(credits.scroll, credits.max_scroll(600.0));
    }
}
