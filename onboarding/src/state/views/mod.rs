pub mod confirmation;
pub mod modals;
pub mod registration;

pub use confirmation::{Confirmation, ContactMethod, Section};
pub use modals::ModalsState;
pub use registration::Registration;

/// View-specific states
#[derive(Debug, Clone)]
pub struct ViewsState {
    pub modals: ModalsState,
    pub registration: Registration,
    pub confirmation: Confirmation,
}

impl ViewsState {
    pub fn new() -> Self {
        Self {
            modals: ModalsState::default(),
            registration: Registration::default(),
            confirmation: Confirmation::default(),
        }
    }
}

impl Default for ViewsState {
    fn default() -> Self {
        Self::new()
    }
}
