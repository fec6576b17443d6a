/// Fully opaque overlay alpha.
pub const OPAQUE: f32 = 255.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Idle,
    /// Alpha rising toward opaque.
    Out,
    /// Alpha falling back to clear.
    In,
}

/// Reported by [`Fade::tick`] on the two phase boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FadeEvent {
    /// Alpha just reached 255. Swap the world now, while the screen is black.
    Covered,
    /// Alpha returned to 0; the fade is over.
    Cleared,
}

/// Two-phase linear cross-fade through black.
///
/// Not cancellable and not reentrant: [`Fade::start`] refuses while a fade is
/// already running.
#[derive(Clone, Debug)]
pub struct Fade {
    phase: FadePhase,
    alpha: f32,
    /// Alpha units per second, shared by both phases.
    rate: f32,
}

impl Fade {
    pub fn new(rate: f32) -> Self {
        Self { phase: FadePhase::Idle, alpha: 0.0, rate }
    }

    /// Begin fading out. Returns `false` (and changes nothing) if already active.
    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = FadePhase::Out;
        self.alpha = 0.0;
        true
    }

    pub fn tick(&mut self, dt: f32) -> Option<FadeEvent> {
        match self.phase {
            FadePhase::Idle => None,
            FadePhase::Out => {
                self.alpha += self.rate * dt;
                if self.alpha >= OPAQUE {
                    self.alpha = OPAQUE;
                    self.phase = FadePhase::In;
                    Some(FadeEvent::Covered)
                } else {
                    None
                }
            }
            FadePhase::In => {
                self.alpha -= self.rate * dt;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.phase = FadePhase::Idle;
                    Some(FadeEvent::Cleared)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_active(&self) -> bool { self.phase != FadePhase::Idle }
    pub fn phase(&self) -> FadePhase { self.phase }
    pub fn alpha(&self) -> f32 { self.alpha }

    /// Overlay alpha in `[0, 1]` for the renderer.
    pub fn opacity(&self) -> f32 {
        (self.alpha / OPAQUE).clamp(0.0, 1.0)
    }
}
