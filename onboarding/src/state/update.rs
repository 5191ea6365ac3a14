use super::{message::Msg, views::ContactMethod, Screen, State};
use crate::state::views::modals::WarningModalState;
use tracing::{debug, info};

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) {
        debug!("received message {:?}", message);
        match message {
            // Navigation
            Msg::NavigateToLogin => self.on_navigate_to_login(),
            Msg::NavigateToRegistration => self.on_navigate_to_registration(),

            // Registration form
            Msg::RegistrationUpdateName(name) => self.views.registration.on_update_name(name),
            Msg::RegistrationUpdatePhone(phone) => self.views.registration.on_update_phone(phone),
            Msg::RegistrationUpdateBirthdate(raw) => self.views.registration.on_update_birthdate(raw),
            Msg::RegistrationSubmit => self.on_registration_submit(),

            // Confirmation wizard
            Msg::ConfirmationSelectMethod(method) => self.on_confirmation_select_method(method),
            Msg::ConfirmationUpdateCode(code) => self.on_confirmation_update_code(code),
            Msg::ConfirmationConfirmCode => self.on_confirmation_confirm_code(),
            Msg::ConfirmationGoBack => self.on_confirmation_go_back(),

            // Warnings
            Msg::WarningShowModal(title, message) => self.on_warning_show_modal(title, message),
            Msg::WarningCloseModal => self.on_warning_close_modal(),
        }
    }
}

// Navigation
impl State {
    fn set_screen(&mut self, screen: Screen) {
        if self.current != screen {
            debug!("screen: {:?} -> {:?}", self.current, screen);
            self.current = screen;
        }
    }

    fn on_navigate_to_login(&mut self) {
        if self.current == Screen::Confirmation {
            self.views.confirmation.restart();
        }
        self.set_screen(Screen::Login);
    }

    fn on_navigate_to_registration(&mut self) {
        if self.current == Screen::Confirmation {
            self.views.confirmation.restart();
        }
        self.set_screen(Screen::Registration);
    }
}

// Registration
impl State {
    fn on_registration_submit(&mut self) {
        if self.current != Screen::Registration {
            debug!("on_registration_submit: not on registration, ignored");
            return;
        }
        match self.views.registration.validate() {
            Ok(()) => {
                self.views.confirmation.restart();
                self.set_screen(Screen::Confirmation);
            }
            Err(e) => {
                info!("on_registration_submit: {}", e);
                self.views.modals.warning = Some(WarningModalState::invalid_registration(e));
            }
        }
    }
}

// Confirmation
impl State {
    fn on_confirmation_select_method(&mut self, method: ContactMethod) {
        if self.current == Screen::Confirmation {
            self.views.confirmation.select_method(method);
        }
    }

    fn on_confirmation_update_code(&mut self, code: String) {
        let max_len = self.config.code_length;
        self.views.confirmation.on_update_code(code, max_len);
    }

    fn on_confirmation_confirm_code(&mut self) {
        if self.current == Screen::Confirmation {
            self.views.confirmation.confirm_code();
        }
    }

    fn on_confirmation_go_back(&mut self) {
        if self.current != Screen::Confirmation {
            return;
        }
        self.views.confirmation.go_back();
        self.views.registration.reset();
        self.set_screen(Screen::Login);
    }
}

// Warnings
impl State {
    fn on_warning_show_modal<T: Into<String>, M: Into<String>>(&mut self, title: T, message: M) {
        self.views.modals.warning = Some(WarningModalState::new(title.into(), message.into()));
    }

    fn on_warning_close_modal(&mut self) {
        self.views.modals.warning = None;
    }
}
