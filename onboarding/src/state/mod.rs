use crate::config::Config;

pub use message::Msg;

pub mod message;
pub mod update;
pub mod views;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Registration,
    Confirmation,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct State {
    pub current: Screen,
    pub views: views::ViewsState,
    pub config: Config,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            current: Screen::Login,
            views: views::ViewsState::new(),
            config,
        }
    }

    /// Whether a warning is waiting to be acknowledged by the user.
    pub fn has_warning(&self) -> bool {
        self.views.modals.warning.is_some()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
