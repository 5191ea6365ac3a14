use super::views::ContactMethod;

/// All application messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // Navigation
    NavigateToLogin,
    NavigateToRegistration,

    // Registration form
    RegistrationUpdateName(String),
    RegistrationUpdatePhone(String),
    RegistrationUpdateBirthdate(String), // Raw keystrokes, stored masked
    RegistrationSubmit,

    // Confirmation wizard
    ConfirmationSelectMethod(ContactMethod),
    ConfirmationUpdateCode(String),
    ConfirmationConfirmCode,
    ConfirmationGoBack, // Leave the flow, back to login

    // Warnings
    WarningShowModal(String, String), // title, message
    WarningCloseModal,
}
