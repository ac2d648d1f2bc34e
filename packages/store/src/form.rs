use crate::name::join_name;

/// Which remote call a submit triggers. The form is shown in every mode but `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    /// Editing the record with this id, captured when editing began.
    Editing(i64),
}

/// One of the three text inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
}

/// Form inputs plus the mode they are being edited in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl FormState {
    pub fn is_visible(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }

    /// Store typed text. Does not change the mode.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
        }
    }

    /// Empty every field and hide the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
