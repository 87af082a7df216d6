//! Scene state machine
//!
//! Requests are validated against the transition table and latched into a
//! pending slot; [`SceneMachine::commit`] applies them at a single point per
//! tick. Illegal requests (e.g. pausing from the menu) are no-ops.

/// Top-level scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Menu => "Menu",
            Scene::Playing => "Playing",
            Scene::Paused => "Paused",
            Scene::GameOver => "GameOver",
        }
    }
}

/// Why a scene change was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Start a new game from the menu
    Start,
    Pause,
    Resume,
    /// The player died or fell off the screen
    End,
    /// Start a new game from the game-over screen
    Restart,
    /// Back out to the menu
    Cancel,
}

impl SceneAction {
    /// Whether committing this action begins a fresh session
    pub fn resets_session(&self) -> bool {
        matches!(self, SceneAction::Start | SceneAction::Restart)
    }
}

/// The transition table. `None` means the action is ignored in `from`.
pub fn next_scene(from: Scene, action: SceneAction) -> Option<Scene> {
    use Scene::*;
    use SceneAction::*;
    match (from, action) {
        (Menu, Start) => Some(Playing),
        (Playing, Pause) => Some(Paused),
        (Paused, Resume) => Some(Playing),
        (Paused, Cancel) => Some(Menu),
        (Playing, End) => Some(GameOver),
        (GameOver, Cancel) => Some(Menu),
        (GameOver, Restart) => Some(Playing),
        _ => None,
    }
}

/// A committed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Scene,
    pub to: Scene,
    pub action: SceneAction,
}

/// Current scene plus a one-slot pending transition
#[derive(Debug, Clone, Default)]
pub struct SceneMachine {
    current: Scene,
    pending: Option<Transition>,
}

impl SceneMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Scene {
        self.current
    }

    #[inline]
    pub fn pending(&self) -> Option<Transition> {
        self.pending
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.current == Scene::Playing
    }

    /// Latch a transition. Returns false when the action is illegal in the
    /// current scene or another transition is already pending (first wins).
    pub fn request(&mut self, action: SceneAction) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match next_scene(self.current, action) {
            Some(to) => {
                self.pending = Some(Transition {
                    from: self.current,
                    to,
                    action,
                });
                true
            }
            None => false,
        }
    }

    /// Apply the pending transition, if any
    pub fn commit(&mut self) -> Option<Transition> {
        let transition = self.pending.take()?;
        self.current = transition.to;
        log::info!(
            "Scene {} -> {} ({:?})",
            transition.from.as_str(),
            transition.to.as_str(),
            transition.action
        );
        Some(transition)
    }
}
