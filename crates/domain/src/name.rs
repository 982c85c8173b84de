use derive_more::Display;

pub const MAX_LEN: usize = 64;

/// Display name of the operator, as shown in the HUD and the leaderboard.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Keeps the first [`MAX_LEN`] characters of an overlong name instead of rejecting it.
    pub fn truncated(name: &str) -> Result<Self, NameError> {
        let truncated_name = name.trim().chars().take(MAX_LEN).collect::<String>();
        Name::new(&truncated_name)
    }

    /// Name used before anyone has logged in.
    #[must_use]
    pub fn guest() -> Self {
        Name("Guest".to_string())
    }

    /// Name used when logging in without entering one.
    #[must_use]
    pub fn operator() -> Self {
        Name("Operator".to_string())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
