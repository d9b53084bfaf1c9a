use serde::{Deserialize, Serialize};

/// Email address claim identifying the caller of an operation.
///
/// Tokens are issued by an external identity provider; the backend only ever
/// sees the email claim and scopes all user-owned data by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserEmail(String);

impl UserEmail {
    /// Creates a new UserEmail from any type that can be converted into a String.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserEmail {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserEmail {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
