//! Registry error type.

/// Error type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Reasons a registry operation rejects its input.
///
/// The `Display` text of each variant is the message shown to the user.
/// A rejected operation never changes registry state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Fewer than three credential tokens
    #[error("Incorrect credentials.")]
    IncorrectCredentials,

    /// First name fails the name rule
    #[error("Incorrect first name.")]
    IncorrectFirstName,

    /// Some last name part fails the name rule
    #[error("Incorrect last name.")]
    IncorrectLastName,

    /// Email fails the address pattern
    #[error("Incorrect email.")]
    IncorrectEmail,

    /// Another student already uses the email
    #[error("This email is already taken.")]
    EmailTaken,

    /// Points line has the wrong shape or a bad value
    #[error("Incorrect points format.")]
    IncorrectPointsFormat,

    /// No student with this id (as typed or as parsed)
    #[error("No student is found for id={0}.")]
    StudentNotFound(String),

    /// Lookup input is not a plain number
    #[error("Incorrect ID format.")]
    IncorrectIdFormat,
}
