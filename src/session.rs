//! One play-through: the area the player is in, everyone standing there,
//! the doorways between areas and the fade that hides each crossing.
//!
//! `Session` never touches the GPU or the window. A scene feeds it a
//! [`Controls`] snapshot every fixed step and draws whatever it exposes.

use glam::Vec2;
use tracing::{debug, info};

use crate::area::Area;
use crate::config::GameConfig;
use crate::content::{AreaLayout, World};
use crate::entity::Entity;
use crate::error::ContentError;
use crate::fade::{Fade, FadeEvent};
use crate::geometry::{Rect, resolve_obstacles};
use crate::hud::Hud;
use crate::npc::{Npc, NpcKind};
use crate::player::Player;
use crate::spawn::SpawnTable;
use crate::trigger::{TriggerSet, Transition};

/// Player input for one fixed step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Controls {
    /// Desired direction, y down. Need not be normalised.
    pub movement: Vec2,
    /// Interact was pressed this step.
    pub interact: bool,
}

impl Controls {
    pub fn moving(direction: Vec2) -> Self {
        Self { movement: direction, interact: false }
    }

    pub fn interact() -> Self {
        Self { movement: Vec2::ZERO, interact: true }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The story is over; show the credits.
    Finished,
}

pub struct Session {
    config: GameConfig,
    world: World,
    area: Area,
    player: Player,
    npcs: Vec<Npc>,
    triggers: TriggerSet,
    spawns: SpawnTable,
    fade: Fade,
    /// Crossing waiting for the screen to go black.
    pending: Option<Transition>,
    hud: Hud,
    /// Index into `npcs` of the open conversation.
    conversation: Option<usize>,
    /// Index into `npcs` of the character the player may talk to.
    target: Option<usize>,
    finished: bool,
}

impl Session {
    /// A fresh play-through of the embedded world.
    pub fn embedded(config: GameConfig) -> Result<Self, ContentError> {
        Ok(Self::new(World::embedded()?, config))
    }

    pub fn new(world: World, config: GameConfig) -> Self {
        let area = world.start;
        let spawns = SpawnTable::new(world.spawns.clone());
        let start = spawns.lookup(area, None, config.player_size);
        let player = Player::new(start, config.player_size, config.player_speed);
        let npcs = world.npcs.iter().map(|entry| entry.build(config.npc_size)).collect();
        let triggers = TriggerSet::new(world.triggers.clone());
        info!("new session in {area} with {} doorways", triggers.len());

        Self {
            fade: Fade::new(config.fade_rate),
            hud: Hud::new(area),
            config,
            world,
            area,
            player,
            npcs,
            triggers,
            spawns,
            pending: None,
            conversation: None,
            target: None,
            finished: false,
        }
    }

    /// Advance the world by `dt` seconds.
    ///
    /// Order per step: timers and animation, the fade (nothing else moves
    /// while it runs), interaction, then movement and doorways.
    pub fn tick(&mut self, dt: f32, controls: &Controls) -> Outcome {
        if self.finished {
            return Outcome::Finished;
        }

        self.hud.tick(dt);
        for npc in &mut self.npcs {
            npc.update(dt);
        }

        if self.fade.is_active() {
            match self.fade.tick(dt) {
                Some(FadeEvent::Covered) => self.arrive(),
                Some(FadeEvent::Cleared) => debug!("fade cleared in {}", self.area),
                None => {}
            }
            return Outcome::Continue;
        }

        if self.conversation.is_none() {
            self.target = self.find_target();
        }
        self.hud.set_interact_available(self.target.is_some());

        if controls.interact && self.interact() == Outcome::Finished {
            self.finished = true;
            return Outcome::Finished;
        }

        if self.conversation.is_none() {
            self.walk(dt, controls.movement);
        } else {
            self.player.stop();
        }

        Outcome::Continue
    }

    fn walk(&mut self, dt: f32, direction: Vec2) {
        self.player.steer(direction);
        self.player.update(dt);

        let moved = self.player.bounds().clamped_within(&self.config.play_bounds);
        let resolved = resolve_obstacles(moved, &self.world.obstacles(self.area));
        self.player.set_position(resolved.pos);

        if let Some(transition) = self.triggers.fire(self.area, &self.player.bounds()) {
            info!("doorway {} -> {}", transition.from, transition.to);
            self.hud.flash(&transition.message, self.config.event_ttl);
            self.fade.start();
            self.pending = Some(transition);
        }
    }

    /// First visible character whose reach covers the player's centre.
    fn find_target(&self) -> Option<usize> {
        let player = self.player.bounds();
        self.npcs
            .iter()
            .position(|npc| self.area.allows(npc.kind) && npc.is_in_range(&player, self.config.interact_margin))
    }

    fn interact(&mut self) -> Outcome {
        if let Some(index) = self.conversation {
            let npc = &mut self.npcs[index];
            if npc.dialogue.has_more() {
                npc.dialogue.advance();
                self.hud.show_dialogue(&npc.name, npc.dialogue.current());
                return Outcome::Continue;
            }

            let ends_story = npc.kind == NpcKind::Friend && self.area == Area::School;
            info!("conversation with {} closed", npc.name);
            self.close_conversation();
            if ends_story {
                info!("story finished after {}", self.hud.clock());
                return Outcome::Finished;
            }
            return Outcome::Continue;
        }

        let Some(index) = self.target else {
            return Outcome::Continue;
        };
        let npc = &mut self.npcs[index];
        npc.dialogue.reset();
        npc.dialogue.set_shown(true);
        npc.mark_greeted();
        info!("conversation with {} opened", npc.name);
        self.hud.show_dialogue(&npc.name, npc.dialogue.current());
        self.conversation = Some(index);
        Outcome::Continue
    }

    fn close_conversation(&mut self) {
        if let Some(index) = self.conversation.take() {
            self.npcs[index].dialogue.reset();
        }
        self.hud.hide_dialogue();
    }

    /// The screen is black: swap the world underneath it.
    fn arrive(&mut self) {
        let Some(transition) = self.pending.take() else {
            return;
        };
        self.close_conversation();
        self.area = transition.to;
        let at = self.spawns.lookup(transition.to, Some(transition.from), self.config.player_size);
        self.player.set_position(at);
        self.player.stop();
        self.target = None;
        self.hud.set_area(self.area);
        self.hud.set_interact_available(false);
        self.triggers.rearm(self.area);
        info!("arrived in {} at ({}, {})", self.area, at.x, at.y);
    }

    // ── Read access for drawing and tests ──────────────────────────────────

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Place the player directly, e.g. to set up a scenario.
    pub fn teleport_player(&mut self, pos: Vec2) {
        self.player.set_position(pos);
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Characters shown in the current area, in declaration order.
    pub fn visible_npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter().filter(|npc| self.area.allows(npc.kind))
    }

    pub fn target(&self) -> Option<&Npc> {
        self.target.map(|i| &self.npcs[i])
    }

    pub fn in_conversation(&self) -> bool {
        self.conversation.is_some()
    }

    pub fn fade(&self) -> &Fade {
        &self.fade
    }

    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    pub fn layout(&self) -> Option<&AreaLayout> {
        self.world.layout(self.area)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn obstacles(&self) -> Vec<Rect> {
        self.world.obstacles(self.area)
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn hud_mut(&mut self) -> &mut Hud {
        &mut self.hud
    }

    pub fn play_time(&self) -> f32 {
        self.hud.elapsed()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
