use std::fmt::Write;

use onboarding::{
    form,
    state::views::{Confirmation, Section},
    Screen, State,
};

pub fn prompt(state: &State) -> &'static str {
    match state.current {
        Screen::Login => "login> ",
        Screen::Registration => "registration> ",
        Screen::Confirmation => "confirmation> ",
    }
}

fn field(out: &mut String, label: &str, value: &form::Value<String>) {
    let _ = write!(out, "  {:<10} [{}]", label, value.value);
    if let Some(warning) = value.warning {
        let _ = write!(out, "  ! {}", warning);
    }
    out.push('\n');
}

fn confirmation(out: &mut String, confirmation: &Confirmation) {
    match confirmation.active() {
        Section::RequestMethod => {
            out.push_str("  How do you want to receive your code? (method email|phone)\n");
        }
        Section::CodeEntry => {
            if let Some(method) = confirmation.method() {
                let _ = writeln!(out, "  A code was requested by {}.", method);
            }
            field(out, "code", &confirmation.code);
            out.push_str("  (confirm | back)\n");
        }
        Section::Confirmed => {
            out.push_str("  Your account is confirmed. (back)\n");
        }
    }
}

/// Text rendering of the current screen.
pub fn render(state: &State) -> String {
    let mut out = String::new();
    match state.current {
        Screen::Login => {
            out.push_str("== Login ==\n  (register to create an account)\n");
        }
        Screen::Registration => {
            out.push_str("== Registration ==\n");
            let registration = &state.views.registration;
            field(&mut out, "name", &registration.name);
            field(&mut out, "phone", &registration.phone);
            field(&mut out, "birthdate", &registration.birthdate);
            out.push_str("  (submit | login)\n");
        }
        Screen::Confirmation => {
            out.push_str("== Confirmation ==\n");
            confirmation(&mut out, &state.views.confirmation);
        }
    }
    if let Some(warning) = &state.views.modals.warning {
        let _ = writeln!(
            out,
            "** {}: {} ** (dismiss)",
            warning.title, warning.message
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboarding::{state::views::ContactMethod, Msg};

    #[test]
    fn test_render_registration() {
        let mut state = State::default();
        assert!(render(&state).starts_with("== Login =="));
        assert_eq!(prompt(&state), "login> ");

        state.update(Msg::NavigateToRegistration);
        state.update(Msg::RegistrationUpdateName("Maria".to_string()));
        state.update(Msg::RegistrationUpdateBirthdate("0102".to_string()));
        state.update(Msg::RegistrationSubmit);
        let screen = render(&state);
        assert!(screen.contains("[01/02]"));
        assert!(screen.contains("! please enter at least one surname"));
        assert!(screen.contains("** Invalid registration: please enter at least one surname **"));
        assert_eq!(prompt(&state), "registration> ");
    }

    #[test]
    fn test_render_confirmation() {
        let mut state = State::default();
        state.update(Msg::NavigateToRegistration);
        state.update(Msg::RegistrationUpdateName("Maria Silva".to_string()));
        state.update(Msg::RegistrationUpdatePhone("11987654321".to_string()));
        state.update(Msg::RegistrationSubmit);
        assert!(render(&state).contains("How do you want to receive your code?"));

        state.update(Msg::ConfirmationSelectMethod(ContactMethod::Phone));
        assert!(render(&state).contains("A code was requested by phone."));

        state.update(Msg::ConfirmationConfirmCode);
        assert!(render(&state).contains("Your account is confirmed."));
    }
}
