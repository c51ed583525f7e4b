use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// A lookup probed for a key that is not among the map's entries.
///
/// Carries the probe key itself, so callers can report exactly what was asked
/// for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFound<K> {
    /// The key that was looked up.
    pub key: K,
}

impl<K: Display> Display for KeyNotFound<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} was not found among the map's entries!", self.key)
    }
}

impl<K: Debug + Display> Error for KeyNotFound<K> {}
