use onboarding::{state::views::ContactMethod, Msg};
use thiserror::Error;

pub const HELP: &str = r#"Commands:
    login               Go to the login screen
    register            Go to the registration form
    name <TEXT>         Type the full name
    phone <TEXT>        Type the phone number
    birthdate <TEXT>    Type the birth date
    submit              Submit the registration form
    method <CHOICE>     Receive the code by "email" or phone
    code <TEXT>         Type the confirmation code
    confirm             Confirm the code
    back                Leave the confirmation, back to login
    dismiss             Close the warning
    help                Print this help
    quit                Exit"#;

/// A line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' to list the commands")]
    Unknown(String),
    #[error("'{0}' expects a value")]
    MissingValue(&'static str),
    #[error("'{0}' does not take a value")]
    UnexpectedValue(&'static str),
}

/// Parse one input line. Field commands keep their value as typed, only the
/// separating space is dropped.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (name, value) = match line.split_once(' ') {
        Some((name, value)) => (name, Some(value)),
        None => (line, None),
    };

    let field = |msg: fn(String) -> Msg| Command::Apply(msg(value.unwrap_or_default().to_string()));
    let no_value = |cmd: &'static str, command: Command| match value {
        Some(v) if !v.trim().is_empty() => Err(CommandError::UnexpectedValue(cmd)),
        _ => Ok(command),
    };

    match name {
        "login" => no_value("login", Command::Apply(Msg::NavigateToLogin)),
        "register" => no_value("register", Command::Apply(Msg::NavigateToRegistration)),
        "name" => Ok(field(Msg::RegistrationUpdateName)),
        "phone" => Ok(field(Msg::RegistrationUpdatePhone)),
        "birthdate" => Ok(field(Msg::RegistrationUpdateBirthdate)),
        "submit" => no_value("submit", Command::Apply(Msg::RegistrationSubmit)),
        "method" => match value.map(str::trim) {
            Some(choice) if !choice.is_empty() => Ok(Command::Apply(
                Msg::ConfirmationSelectMethod(ContactMethod::from_choice(choice)),
            )),
            _ => Err(CommandError::MissingValue("method")),
        },
        "code" => Ok(field(Msg::ConfirmationUpdateCode)),
        "confirm" => no_value("confirm", Command::Apply(Msg::ConfirmationConfirmCode)),
        "back" => no_value("back", Command::Apply(Msg::ConfirmationGoBack)),
        "dismiss" => no_value("dismiss", Command::Apply(Msg::WarningCloseModal)),
        "help" => no_value("help", Command::Help),
        "quit" | "exit" => no_value("quit", Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            parse_command("phone (11) 98765-4321\n"),
            Ok(Command::Apply(Msg::RegistrationUpdatePhone(
                "(11) 98765-4321".to_string()
            )))
        );
        assert_eq!(
            parse_command("name   Maria Silva  "),
            Ok(Command::Apply(Msg::RegistrationUpdateName(
                "  Maria Silva  ".to_string()
            )))
        );
        // Clearing a field
        assert_eq!(
            parse_command("birthdate"),
            Ok(Command::Apply(Msg::RegistrationUpdateBirthdate(
                String::new()
            )))
        );
        assert_eq!(
            parse_command("code 1234\r\n"),
            Ok(Command::Apply(Msg::ConfirmationUpdateCode("1234".to_string())))
        );
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(
            parse_command("method email"),
            Ok(Command::Apply(Msg::ConfirmationSelectMethod(
                ContactMethod::Email
            )))
        );
        assert_eq!(
            parse_command("method celular"),
            Ok(Command::Apply(Msg::ConfirmationSelectMethod(
                ContactMethod::Phone
            )))
        );
        assert_eq!(
            parse_command("method"),
            Err(CommandError::MissingValue("method"))
        );
        assert_eq!(
            parse_command("method  "),
            Err(CommandError::MissingValue("method"))
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse_command("submit"),
            Ok(Command::Apply(Msg::RegistrationSubmit))
        );
        assert_eq!(
            parse_command("  confirm "),
            Ok(Command::Apply(Msg::ConfirmationConfirmCode))
        );
        assert_eq!(
            parse_command("back"),
            Ok(Command::Apply(Msg::ConfirmationGoBack))
        );
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(
            parse_command("submit now"),
            Err(CommandError::UnexpectedValue("submit"))
        );
        assert_eq!(
            parse_command("fly"),
            Err(CommandError::Unknown("fly".to_string()))
        );
    }
}
