use crate::validation::ValidationError;

/// A message the user has to acknowledge before going on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningModalState {
    pub title: String,
    pub message: String,
}

impl WarningModalState {
    pub fn new(title: String, message: String) -> Self {
        Self { title, message }
    }

    /// Raised when the registration form is submitted with an invalid field.
    pub fn invalid_registration(error: ValidationError) -> Self {
        Self::new("Invalid registration".to_string(), error.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalsState {
    pub warning: Option<WarningModalState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_registration() {
        let modal = WarningModalState::invalid_registration(ValidationError::InvalidPhone);
        assert_eq!(modal.title, "Invalid registration");
        assert_eq!(modal.message, "invalid phone number");
    }
}
