use super::{CreditsScene, PauseScene};
use crate::engine::{Color, Engine};
use crate::entity::Entity;
use crate::input::{Action, ActionMap};
use crate::scene::{Scene, SceneAction};
use crate::session::{Controls, Outcome, Session};
use crate::ui::UI;

const ZONE_OUTLINE: Color = Color::CYAN;
const OBSTACLE_OUTLINE: Color = Color::ORANGE;

pub struct PlayScene {
    session: Session,
    actions: ActionMap<Action>,
    /// F1 debug overlay: doorway and obstacle outlines.
    show_zones: bool,
}

impl PlayScene {
    pub fn new(session: Session) -> Self {
        Self { session, actions: Action::default_map(), show_zones: false }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn controls(&self, engine: &Engine) -> Controls {
        Controls {
            movement: Action::movement(&self.actions, &engine.input),
            interact: self.actions.is_pressed(Action::Interact, &engine.input),
        }
    }

    fn draw_zones(&self, ui: &mut UI) {
        for zone in self.session.triggers().leaving(self.session.area()) {
            let r = zone.bounds;
            let color = if zone.used { ZONE_OUTLINE.with_alpha(0.4) } else { ZONE_OUTLINE };
            ui.ui_outline(r.pos.x, r.pos.y, r.size.x, r.size.y, 2.0, color);
            ui.ui_text(r.pos.x + 4.0, r.pos.y + 4.0, zone.to.label(), color, 12.0);
        }
        for r in self.session.obstacles() {
            ui.ui_outline(r.pos.x, r.pos.y, r.size.x, r.size.y, 1.0, OBSTACLE_OUTLINE);
        }
        let margin = self.session.config().interact_margin;
        for npc in self.session.visible_npcs() {
            let reach = npc.bounds().expanded(margin);
            ui.ui_outline(reach.pos.x, reach.pos.y, reach.size.x, reach.size.y, 1.0, Color::YELLOW.with_alpha(0.5));
        }
    }
}

impl Scene for PlayScene {
    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        if self.actions.is_pressed(Action::ToggleZones, &engine.input) {
            self.show_zones = !self.show_zones;
        }
        if self.actions.is_pressed(Action::Pause, &engine.input) {
            return SceneAction::Push(Box::new(PauseScene::new()));
        }

        let controls = self.controls(engine);
        match self.session.tick(engine.dt(), &controls) {
            Outcome::Continue => SceneAction::None,
            Outcome::Finished => {
                SceneAction::Switch(Box::new(CreditsScene::new(self.session.play_time())))
            }
        }
    }

    fn draw(&mut self, engine: &mut Engine) {
        let [w, h] = engine.logical_size;
        let ui = &mut engine.ui;

        ui.ui_rect(0.0, 0.0, w, h, self.session.world().backdrop(self.session.area()));
        if let Some(layout) = self.session.layout() {
            for prop in layout.decor.iter().chain(&layout.obstacles) {
                let r = prop.rect;
                ui.ui_rect(r.pos.x, r.pos.y, r.size.x, r.size.y, prop.color());
            }
        }

        for npc in self.session.visible_npcs() {
            npc.draw(ui);
        }
        self.session.player().draw(ui);

        if self.show_zones {
            self.draw_zones(ui);
        }

        self.session.hud_mut().draw(ui);

        // Always last: covers the world and the HUD alike.
        let fade = self.session.fade();
        if fade.is_active() {
            ui.ui_rect(0.0, 0.0, w, h, Color::BLACK.with_alpha(fade.opacity()));
        }
    }

    fn name(&self) -> &'static str { "play" }
}
