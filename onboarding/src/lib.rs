pub mod config;
pub mod form;
pub mod state;
pub mod validation;

pub use state::{Msg, Screen, State};
