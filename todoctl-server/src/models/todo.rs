//! Todo title validation

use super::ValidationError;

/// Validated todo title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new todo title.
    ///
    /// # Rules
    /// - Non-empty; stored verbatim, including surrounding whitespace
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
