// Argument sanitizer
// Allow-list filtering for every value interpolated into a remote console command

use std::fmt;

use thiserror::Error;

/// Role of a value inside a command. Each role has its own allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentClass {
    Username,
    Rank,
    Item,
    Broadcast,
}

impl ArgumentClass {
    pub fn allows(&self, ch: char) -> bool {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            return true;
        }
        match self {
            ArgumentClass::Username | ArgumentClass::Rank => false,
            ArgumentClass::Item => ch == ':',
            // Line breaks would end the console command early.
            ArgumentClass::Broadcast => matches!(ch, ' ' | '\t' | '.' | ',' | '!' | '?' | '-'),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentClass::Username => "username",
            ArgumentClass::Rank => "rank",
            ArgumentClass::Item => "item",
            ArgumentClass::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for ArgumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0} is empty")]
    Empty(ArgumentClass),
    #[error("{0} contains disallowed characters")]
    Disallowed(ArgumentClass),
    #[error("amount must be a positive integer")]
    InvalidAmount,
}

/// Drops every character the class does not allow. Never fails.
pub fn sanitize(class: ArgumentClass, raw: &str) -> String {
    raw.chars().filter(|ch| class.allows(*ch)).collect()
}

/// A value that passed its allow-list unchanged. Only `verify` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedArg(String);

impl VerifiedArg {
    /// Fails closed: the filtered form must equal the raw input exactly.
    pub fn verify(class: ArgumentClass, raw: &str) -> Result<Self, CommandError> {
        if raw.is_empty() {
            return Err(CommandError::Empty(class));
        }
        let filtered = sanitize(class, raw);
        if filtered != raw {
            return Err(CommandError::Disallowed(class));
        }
        Ok(Self(filtered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerifiedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
