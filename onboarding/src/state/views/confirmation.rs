//! The confirmation screen is a small wizard: the user picks how to receive a code, types it,
//! and lands on the confirmed section. Exactly one section is shown at a time.

use std::fmt;

use tracing::debug;

use crate::{form, validation};

/// Sections of the confirmation screen, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    RequestMethod,
    CodeEntry,
    Confirmed,
}

/// Where the confirmation code is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    /// Map the raw choice of the method buttons. Anything but "email" is the phone.
    pub fn from_choice(choice: &str) -> Self {
        if choice == "email" {
            Self::Email
        } else {
            Self::Phone
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Confirmation wizard state
#[derive(Debug, Clone, Default)]
pub struct Confirmation {
    active: Section,
    method: Option<ContactMethod>,
    pub code: form::Value<String>,
}

impl Confirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn method(&self) -> Option<ContactMethod> {
        self.method
    }

    /// Record the method and show the code entry. Picking again while the code
    /// entry is shown only changes the method.
    pub fn select_method(&mut self, method: ContactMethod) {
        match self.active {
            Section::RequestMethod | Section::CodeEntry => {
                self.method = Some(method);
                self.transition(Section::RequestMethod, Section::CodeEntry);
            }
            Section::Confirmed => {
                debug!("select_method: flow already confirmed, ignored");
            }
        }
    }

    /// The typed code is not checked against anything.
    pub fn confirm_code(&mut self) {
        self.transition(Section::CodeEntry, Section::Confirmed);
    }

    /// Leave the flow. The wizard starts over the next time it is entered.
    pub fn go_back(&mut self) {
        self.restart();
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn on_update_code(&mut self, code: String, max_len: usize) {
        let check = validation::check_code(&code, max_len);
        self.code.set(code);
        if let Err(e) = check {
            self.code.invalidate(e.message());
        }
    }

    fn transition(&mut self, from: Section, to: Section) {
        if self.active == from {
            debug!("confirmation: {:?} -> {:?}", from, to);
            self.active = to;
        } else {
            debug!(
                "confirmation: {:?} -> {:?} skipped, {:?} is active",
                from, to, self.active
            );
        }
    }
}
