//! Signup form field state.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Values bound to the signup form's email input and activity selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    /// Selected activity name; empty means the placeholder option.
    pub activity: String,
}

impl SignupFormState {
    /// Return every field to its initial value, like a native form reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
