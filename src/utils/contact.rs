use crate::error::FormError;

pub const INCOMPLETE_NOTICE: &str = "Please fill out all fields.";
pub const DEMO_NOTICE: &str =
    "Thanks! This demo form does not send yet. Replace with your backend or mailto.";

/// Field values of the demo contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// Handles a submit: an incomplete form is left untouched, a complete one
    /// is cleared. Returns the blocking notice to show.
    pub fn submit(&mut self) -> &'static str {
        match self.validate() {
            Err(e) => {
                log::debug!("Rejected contact form: {}", e);
                INCOMPLETE_NOTICE
            }
            Ok(()) => {
                log::info!("Demo contact form submitted");
                self.reset();
                DEMO_NOTICE
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
