//! The loaded directory.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::loader::RawResponse;
use crate::person::PersonRecord;

/// An ordered batch of person records, in API response order.
///
/// Every record's `index` equals its position in the directory; the index is
/// used as the lookup key by the gallery and the navigator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Directory {
    records: Vec<PersonRecord>,
}

impl Directory {
    /// Build a directory from an API response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] for the first entry that cannot be
    /// mapped; no partial directory is produced.
    pub fn from_response(response: RawResponse, birthday_format: &str) -> Result<Self> {
        let records = response
            .results
            .into_iter()
            .enumerate()
            .map(|(index, person)| person.into_record(index, birthday_format))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Build a directory from already-mapped records, renumbering each
    /// record's index to its position.
    #[must_use]
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| PersonRecord { index, ..record })
            .collect();
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.records.get(index)
    }

    /// Look up a record by index, failing when it is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn record(&self, index: usize) -> Result<&PersonRecord> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Iterate over records in directory order.
    pub fn iter(&self) -> std::slice::Iter<'_, PersonRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    #[must_use]
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a PersonRecord;
    type IntoIter = std::slice::Iter<'a, PersonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
