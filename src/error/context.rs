//! Error context types for better error messages.

/// Filesystem operations that can fail while persisting artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Write,
    CreateDir,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::CreateDir => write!(f, "create directory"),
        }
    }
}
