//! Fingerprint identifiers and the records stored for them.

use std::fmt;

/// Owner name given to a fingerprint on first sighting. An administrator
/// replaces it once the fingerprint is matched to a person.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Opaque identifier reported by a fingerprint sensor.
///
/// The value is untrusted input and is kept byte-for-byte, including blank
/// values, so lookups remain exact matches. Anything the store cannot hold
/// is rejected by the store when the identifier is recorded.
///
/// # Examples
/// ```
/// use fingerprint_registrar::domain::FingerprintId;
///
/// let id = FingerprintId::new("ABC123");
/// assert_eq!(id.as_str(), "ABC123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FingerprintId(String);

impl FingerprintId {
    /// Wrap a raw identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FingerprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FingerprintId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for FingerprintId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A registered fingerprint and the name of its owner.
///
/// Records are created once, by the registrar, and are never updated or
/// deleted by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintRecord {
    pub fingerprint_id: FingerprintId,
    pub user_name: String,
}

impl FingerprintRecord {
    /// Record for a fingerprint seen for the first time, owned by
    /// [`UNKNOWN_USER`].
    pub fn pending(fingerprint_id: FingerprintId) -> Self {
        Self {
            fingerprint_id,
            user_name: UNKNOWN_USER.to_owned(),
        }
    }
}
