use crate::area::Area;
use crate::engine::Color;
use crate::ui::{Label, UI};

/// `MM:SS` from a number of seconds. Minutes keep counting past 59.
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

const DIALOGUE_BOX: [f32; 4] = [20.0, 460.0, 760.0, 120.0];
const DIALOGUE_FILL: Color = Color([0.0, 0.0, 0.0, 200.0 / 255.0]);
const PROMPT: &str = "Press E to talk";

/// What the dialogue box is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogueView {
    pub speaker: String,
    pub line: String,
}

/// Heads-up display state. The session pushes changes in; `draw` renders
/// whatever is current.
pub struct Hud {
    area_label: Label,
    elapsed: f32,
    event: Option<(String, f32)>,
    dialogue: Option<DialogueView>,
    interact_available: bool,
    /// Phase of the pulsing prompt.
    blink: f32,
}

impl Hud {
    pub fn new(area: Area) -> Self {
        let mut area_label = Label::new([10.0, 10.0], 20.0, Color::WHITE.0);
        area_label.set_text(area.label());
        Self {
            area_label,
            elapsed: 0.0,
            event: None,
            dialogue: None,
            interact_available: false,
            blink: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.blink += dt * 3.0;
        if let Some((_, ttl)) = &mut self.event {
            *ttl -= dt;
            if *ttl <= 0.0 {
                self.event = None;
            }
        }
    }

    pub fn set_area(&mut self, area: Area) {
        self.area_label.set_text(area.label());
    }

    pub fn area_label(&self) -> &str {
        self.area_label.text()
    }

    /// Show `message` for `ttl` seconds, replacing any current event text.
    /// Empty messages are ignored.
    pub fn flash(&mut self, message: &str, ttl: f32) {
        if !message.is_empty() {
            self.event = Some((message.to_owned(), ttl));
        }
    }

    pub fn event_text(&self) -> Option<&str> {
        self.event.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn show_dialogue(&mut self, speaker: &str, line: &str) {
        self.dialogue = Some(DialogueView { speaker: speaker.to_owned(), line: line.to_owned() });
    }

    pub fn hide_dialogue(&mut self) {
        self.dialogue = None;
    }

    pub fn dialogue(&self) -> Option<&DialogueView> {
        self.dialogue.as_ref()
    }

    pub fn set_interact_available(&mut self, available: bool) {
        self.interact_available = available;
    }

    pub fn interact_available(&self) -> bool {
        self.interact_available
    }

    /// The prompt only shows while nobody is talking.
    pub fn prompt_visible(&self) -> bool {
        self.interact_available && self.dialogue.is_none()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn clock(&self) -> String {
        format_clock(self.elapsed)
    }

    pub fn draw(&mut self, ui: &mut UI) {
        self.area_label.draw(ui);
        ui.ui_text(700.0, 10.0, &self.clock(), Color::WHITE, 20.0);

        if let Some(text) = self.event_text() {
            ui.ui_text(250.0, 10.0, text, Color::YELLOW, 18.0);
        }

        if self.prompt_visible() {
            let pulse = (self.blink.sin() + 1.0) / 2.0;
            let alpha = (150.0 + pulse * 105.0) / 255.0;
            ui.ui_text_centered(400.0, 520.0, PROMPT, Color::YELLOW.with_alpha(alpha), 16.0);
        }

        if let Some(view) = &self.dialogue {
            let [x, y, w, h] = DIALOGUE_BOX;
            ui.ui_rect(x, y, w, h, DIALOGUE_FILL);
            ui.ui_outline(x, y, w, h, 2.0, Color::WHITE);
            ui.ui_text(x + 10.0, y + 10.0, &view.speaker, Color::YELLOW, 18.0);
            ui.ui_text_wrapped(x + 10.0, y + 40.0, w - 20.0, h - 50.0, &view.line, Color::WHITE, 16.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(65.9), "01:05");
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn event_text_expires() {
        let mut hud = Hud::new(Area::House);
        hud.flash("You leave the house!", 3.0);
        hud.tick(2.9);
        assert_eq!(hud.event_text(), Some("You leave the house!"));
        hud.tick(0.2);
        assert_eq!(hud.event_text(), None);
    }

    #[test]
    fn empty_flash_keeps_previous_text() {
        let mut hud = Hud::new(Area::House);
        hud.flash("first", 3.0);
        hud.flash("", 3.0);
        assert_eq!(hud.event_text(), Some("first"));
    }

    #[test]
    fn prompt_hidden_during_dialogue() {
        let mut hud = Hud::new(Area::Street);
        hud.set_interact_available(true);
        assert!(hud.prompt_visible());
        hud.show_dialogue("Mum", "Hello");
        assert!(!hud.prompt_visible());
    }

    #[test]
    fn dialogue_box_draws_without_font() {
        let mut hud = Hud::new(Area::Street);
        hud.show_dialogue("Mum", "Hello");
        let mut ui = UI::new(None);
        hud.draw(&mut ui);
        // fill plus four outline strips
        assert_eq!(ui.vertices.len(), 30);
    }
}
