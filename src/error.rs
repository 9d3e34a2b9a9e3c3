// Error handling for appseed

use std::fmt;

/// Seeding error type
///
/// Carried inside `anyhow::Error`; callers that need to tell the cases apart
/// use `downcast_ref::<SeedError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A required config key is absent or blank
    MissingConfig(String),
    /// A config key is present but unusable: (key, reason)
    InvalidConfig(String, String),
    /// The user factory was asked to create a record without a required attribute
    MissingAttribute(&'static str),
    /// A user with this email already exists
    DuplicateEmail(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::MissingConfig(key) => write!(f, "Missing config value: {}", key),
            SeedError::InvalidConfig(key, reason) => {
                write!(f, "Invalid config value for {}: {}", key, reason)
            }
            SeedError::MissingAttribute(attr) => write!(f, "Missing user attribute: {}", attr),
            SeedError::DuplicateEmail(email) => {
                write!(f, "A user with email {} already exists", email)
            }
        }
    }
}

impl std::error::Error for SeedError {}

// Extension trait for pulling a SeedError back out of an anyhow chain
pub trait SeedErrorExt {
    fn seed_error(&self) -> Option<&SeedError>;
}

impl SeedErrorExt for anyhow::Error {
    fn seed_error(&self) -> Option<&SeedError> {
        self.chain().find_map(|e| e.downcast_ref::<SeedError>())
    }
}
