//! Postal address value object.
//!
//! The backend stores a single display string; forms edit the four parts.
//! `compose`/`parse` convert between the two using the same comma-split
//! heuristic on both sides so a composed address survives a round trip.

use serde::{Deserialize, Serialize};

/// Decomposed postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// Compose the display string: `"{street}, {city}, {state} {zip}"`.
    pub fn compose(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }

    /// Parse a display string back into parts.
    ///
    /// Heuristic: two comma splits (street, city, rest), then the rest is
    /// split at its last whitespace into state and zip. Returns `None` when
    /// the string does not have that shape.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, ',');
        let street = parts.next()?.trim();
        let city = parts.next()?.trim();
        let rest = parts.next()?.trim();

        let (state, zip) = rest.rsplit_once(char::is_whitespace)?;
        let state = state.trim();
        let zip = zip.trim();

        if street.is_empty() || city.is_empty() || state.is_empty() || zip.is_empty() {
            return None;
        }

        Some(Self::new(street, city, state, zip))
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.compose())
    }
}
