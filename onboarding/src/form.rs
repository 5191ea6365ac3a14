/// The value of a text input along with its validation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl Value<String> {
    /// Replace the value and drop any previous warning.
    pub fn set(&mut self, value: String) {
        self.value = value;
        self.warning = None;
        self.valid = true;
    }

    pub fn invalidate(&mut self, warning: &'static str) {
        self.warning = Some(warning);
        self.valid = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clears_warning() {
        let mut field = Value::default();
        field.invalidate("nope");
        assert!(!field.valid);
        assert_eq!(field.warning, Some("nope"));

        field.set("Maria".to_string());
        assert!(field.valid);
        assert_eq!(field.warning, None);
        assert_eq!(field.value, "Maria");
    }

    #[test]
    fn clear_resets_to_default() {
        let mut field = Value::default();
        field.set("x".to_string());
        field.invalidate("bad");
        field.clear();
        assert_eq!(field, Value::default());
    }
}
