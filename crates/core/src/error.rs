use std::error::Error as StdError;

/// Boxed error raised by a collaborator (delivery client, navigation source).
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration value for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },
    #[error("content delivery request failed: {0}")]
    Delivery(#[source] BoxError),
    #[error("navigation root item '{0}' is not a navigation item")]
    NotNavigationItem(String),
}

impl CoreError {
    /// Wrap any collaborator error as a delivery failure.
    pub fn delivery<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Delivery(Box::new(err))
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
