use crate::engine::{Engine, Game};

pub enum SceneAction {
    None,
    Push(Box<dyn Scene>),
    Pop,
    Switch(Box<dyn Scene>),
    ReplaceAll(Box<dyn Scene>),
    Quit,
}

pub trait Scene {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    fn on_exit(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine) -> SceneAction;
    fn draw(&mut self, engine: &mut Engine);
    /// A transparent scene lets the scene below it keep drawing (but not updating).
    fn is_transparent(&self) -> bool { false }
    fn name(&self) -> &'static str;
}

pub struct SceneStack {
    scenes: Vec<Box<dyn Scene>>,
    initialized: bool,
}

impl SceneStack {
    pub fn new(initial: Box<dyn Scene>) -> Self {
        Self { scenes: vec![initial], initialized: false }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Name of the scene receiving updates.
    pub fn top_name(&self) -> Option<&'static str> {
        self.scenes.last().map(|s| s.name())
    }

    fn update_inner(&mut self, engine: &mut Engine) {
        let action = if let Some(top) = self.scenes.last_mut() {
            top.update(engine)
        } else {
            return;
        };

        match action {
            SceneAction::None => {}
            SceneAction::Push(mut s) => {
                tracing::debug!("push scene {}", s.name());
                s.on_enter(engine);
                self.scenes.push(s);
            }
            SceneAction::Pop => {
                if let Some(mut top) = self.scenes.pop() {
                    tracing::debug!("pop scene {}", top.name());
                    top.on_exit(engine);
                }
            }
            SceneAction::Switch(mut s) => {
                if let Some(mut top) = self.scenes.pop() {
                    top.on_exit(engine);
                }
                tracing::debug!("switch to scene {}", s.name());
                s.on_enter(engine);
                self.scenes.push(s);
            }
            SceneAction::ReplaceAll(mut s) => {
                while let Some(mut top) = self.scenes.pop() {
                    top.on_exit(engine);
                }
                tracing::debug!("replace all scenes with {}", s.name());
                s.on_enter(engine);
                self.scenes.push(s);
            }
            SceneAction::Quit => {
                engine.request_quit();
            }
        }
    }

    fn draw_inner(&mut self, engine: &mut Engine) {
        let start = self.scenes.iter().rposition(|s| !s.is_transparent()).unwrap_or(0);
        for scene in &mut self.scenes[start..] {
            scene.draw(engine);
        }
    }
}

impl Game for SceneStack {
    fn update(&mut self, engine: &mut Engine) {
        if !self.initialized {
            self.initialized = true;
            if let Some(s) = self.scenes.first_mut() {
                s.on_enter(engine);
            }
        }
        self.update_inner(engine);
    }

    fn render(&mut self, engine: &mut Engine) {
        self.draw_inner(engine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
        transparent: bool,
        next: Option<SceneAction>,
    }

    impl Probe {
        fn boxed(name: &'static str, log: &Log, transparent: bool, next: Option<SceneAction>) -> Box<dyn Scene> {
            Box::new(Self { name, log: Rc::clone(log), transparent, next })
        }
    }

    impl Scene for Probe {
        fn on_enter(&mut self, _: &mut Engine) { self.log.borrow_mut().push(format!("enter {}", self.name)); }
        fn on_exit(&mut self, _: &mut Engine) { self.log.borrow_mut().push(format!("exit {}", self.name)); }
        fn update(&mut self, _: &mut Engine) -> SceneAction {
            self.next.take().unwrap_or(SceneAction::None)
        }
        fn draw(&mut self, _: &mut Engine) { self.log.borrow_mut().push(format!("draw {}", self.name)); }
        fn is_transparent(&self) -> bool { self.transparent }
        fn name(&self) -> &'static str { self.name }
    }

    #[test]
    fn transparent_top_draws_scene_below() {
        let log: Log = Rc::default();
        let overlay = Probe::boxed("pause", &log, true, None);
        let mut stack = SceneStack::new(Probe::boxed("play", &log, false, Some(SceneAction::Push(overlay))));
        let mut engine = Engine::headless([800.0, 600.0], None);

        stack.update(&mut engine);
        assert_eq!(stack.top_name(), Some("pause"));

        log.borrow_mut().clear();
        stack.render(&mut engine);
        assert_eq!(*log.borrow(), vec!["draw play", "draw pause"]);
    }

    #[test]
    fn replace_all_exits_every_scene() {
        let log: Log = Rc::default();
        let fresh = Probe::boxed("menu", &log, false, None);
        let mut stack = SceneStack::new(Probe::boxed("credits", &log, false, Some(SceneAction::ReplaceAll(fresh))));
        let mut engine = Engine::headless([800.0, 600.0], None);

        stack.update(&mut engine);
        assert_eq!(*log.borrow(), vec!["enter credits", "exit credits", "enter menu"]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn quit_sets_engine_flag() {
        let log: Log = Rc::default();
        let mut stack = SceneStack::new(Probe::boxed("menu", &log, false, Some(SceneAction::Quit)));
        let mut engine = Engine::headless([800.0, 600.0], None);
        stack.update(&mut engine);
        assert!(engine.quit_requested());
    }
}
