//! Registry error types

/// Errors from timer registry operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry capacity reached
    Full,
    /// The same timer was registered twice
    AlreadyRegistered,
    /// No timer with the given id
    UnknownTimer,
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::Full => write!(f, "timer registry full"),
            RegistryError::AlreadyRegistered => write!(f, "timer already registered"),
            RegistryError::UnknownTimer => write!(f, "unknown timer id"),
        }
    }
}

impl core::error::Error for RegistryError {}
