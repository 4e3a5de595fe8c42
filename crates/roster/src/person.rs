//! Person records.
//!
//! A [`PersonRecord`] is one entry of the loaded directory. Records are built
//! once by the loader and never modified afterwards.

use serde::{Deserialize, Serialize};

/// Street part of a postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    /// House number, kept as text since sources disagree on its type.
    pub number: String,
    /// Street name.
    pub name: String,
}

/// One person's directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Position in load order; the stable identity key of the record.
    pub index: usize,
    /// URL of the large profile picture.
    pub photo_url: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Street address.
    pub street: Street,
    /// City.
    pub city: String,
    /// State or region.
    pub region: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Phone number (the source's cell number).
    pub phone: String,
    /// Birthday, already formatted for display.
    pub birth_date: String,
}

impl PersonRecord {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `"City, Region"` as shown on a summary card.
    #[must_use]
    pub fn locality(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }

    /// Single-line postal address.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street.number, self.street.name, self.region, self.country, self.postal_code
        )
    }

    /// Check whether the first or last name contains `needle`.
    ///
    /// `needle` must already be uppercased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.first_name.to_uppercase().contains(needle)
            || self.last_name.to_uppercase().contains(needle)
    }
}
