use thiserror::Error;

/// Upper bound on `message_text`, counted in characters.
pub const MAX_MESSAGE_CHARS: usize = 255;

/// Passwords must be strictly longer than this many characters.
pub const MIN_PASSWORD_EXCLUSIVE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must be longer than {min} characters", min = MIN_PASSWORD_EXCLUSIVE)]
    PasswordTooShort,

    #[error("message_text must not be empty")]
    EmptyMessageText,

    #[error("message_text is {0} characters, limit is {max}", max = MAX_MESSAGE_CHARS)]
    MessageTextTooLong(usize),
}

pub fn validate_registration(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.chars().count() <= MIN_PASSWORD_EXCLUSIVE {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_message_text(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyMessageText);
    }
    let len = text.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTextTooLong(len));
    }
    Ok(())
}
