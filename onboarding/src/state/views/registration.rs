use crate::{
    form,
    validation::{self, ValidationError},
};

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: form::Value<String>,
    pub phone: form::Value<String>,
    /// Always holds the masked value, this is what is displayed.
    pub birthdate: form::Value<String>,
}

impl Registration {
    pub fn on_update_name(&mut self, name: String) {
        self.name.set(name);
    }

    pub fn on_update_phone(&mut self, phone: String) {
        self.phone.set(phone);
    }

    pub fn on_update_birthdate(&mut self, raw: String) {
        self.birthdate.set(validation::format_date(&raw));
    }

    /// Validate the fields checked before leaving the form. Every failing field is
    /// flagged, the first failure (in form order) is returned.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let name = validation::validate_full_name(&self.name.value);
        if let Err(e) = name {
            self.name.invalidate(e.message());
        }

        let phone = validation::validate_phone(&self.phone.value);
        if let Err(e) = phone {
            self.phone.invalidate(e.message());
        }

        name.and(phone)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.birthdate.clear();
    }
}
