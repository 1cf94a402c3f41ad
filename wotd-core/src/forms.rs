use wotd_api::{AppendWordRequest, ContactMessage};

/// Largest contact message body the backend accepts.
pub const MAX_CONTACT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill out all required fields.")]
    MissingField(&'static str),
    #[error("Message is too large to send. Please reduce the size of your input.")]
    TooLarge(usize),
    #[error("Could not encode form: {0}")]
    Encode(String),
}

/// Trims the contact form fields and checks them before sending.
pub fn contact_message(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactMessage, FormError> {
    let contact = ContactMessage {
        name: name.trim().to_owned(),
        email: required("email", email)?,
        subject: required("subject", subject)?,
        message: required("message", message)?,
    };

    let size = serde_json::to_vec(&contact)
        .map_err(|e| FormError::Encode(e.to_string()))?
        .len();
    if size > MAX_CONTACT_BYTES {
        return Err(FormError::TooLarge(size));
    }
    Ok(contact)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendWordForm {
    pub word: String,
    pub ipa: String,
    pub pos: String,
    pub definition: String,
    /// Empty means "next free day".
    pub date: String,
}

impl AppendWordForm {
    pub fn to_request(&self, admin_password: &str) -> Result<AppendWordRequest, FormError> {
        let date = self.date.trim();
        Ok(AppendWordRequest {
            word: required("word", &self.word)?,
            ipa: self.ipa.trim().to_owned(),
            pos: required("part of speech", &self.pos)?,
            definition: required("definition", &self.definition)?,
            date: (!date.is_empty()).then(|| date.to_owned()),
            admin_password: required("admin password", admin_password)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_owned())
    }
}
