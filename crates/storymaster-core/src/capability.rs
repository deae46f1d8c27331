//! Browser capabilities resolved once at startup.

/// A platform service that may or may not exist in the running browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    /// Wrap the result of a feature test.
    pub fn from_option(service: Option<T>) -> Self {
        match service {
            Some(service) => Self::Available(service),
            None => Self::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Borrow the service if present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Available(service) => Some(service),
            Self::Unavailable => None,
        }
    }
}

impl<T> Default for Capability<T> {
    fn default() -> Self {
        Self::Unavailable
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(service: Option<T>) -> Self {
        Self::from_option(service)
    }
}
