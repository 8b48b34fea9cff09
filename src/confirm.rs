//! Destructive-action confirmation.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Prompt text: the attribute value, or `default` when missing or empty.
pub fn confirm_message<'a>(attribute: Option<&'a str>, default: &'a str) -> &'a str {
    match attribute {
        Some(message) if !message.is_empty() => message,
        _ => default,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

impl Decision {
    /// Map the prompt outcome. A prompt that could not be shown cancels.
    pub fn from_prompt<E>(answer: Result<bool, E>) -> Self {
        match answer {
            Ok(true) => Self::Proceed,
            Ok(false) | Err(_) => Self::Cancel,
        }
    }

    /// Whether the click's default action must be suppressed.
    pub fn prevents_default(self) -> bool {
        self == Self::Cancel
    }
}
