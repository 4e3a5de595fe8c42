//! Detail view navigation.
//!
//! The navigator is a cursor over `[0, len - 1]`. Moving past either end
//! clamps: `prev` at the first record and `next` at the last record leave the
//! cursor where it is. The matching control is reported as disabled so a
//! front end never offers the move, but the clamp holds whatever the trigger.

use serde::Serialize;
use tracing::trace;

use crate::directory::Directory;
use crate::error::{Error, Result};
use crate::person::PersonRecord;

/// Which navigation controls are enabled for the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavControls {
    /// `false` at the first record.
    pub prev_enabled: bool,
    /// `false` at the last record.
    pub next_enabled: bool,
}

/// Full detail for one record, as displayed in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Index of the displayed record.
    pub index: usize,
    /// Profile picture URL.
    pub photo_url: String,
    /// `"First Last"`.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// City.
    pub city: String,
    /// Phone number.
    pub phone: String,
    /// Single-line postal address.
    pub address: String,
    /// Formatted birthday.
    pub birthday: String,
    /// Navigation control state.
    pub controls: NavControls,
}

impl DetailView {
    fn new(record: &PersonRecord, controls: NavControls) -> Self {
        Self {
            index: record.index,
            photo_url: record.photo_url.clone(),
            full_name: record.full_name(),
            email: record.email.clone(),
            city: record.city.clone(),
            phone: record.phone.clone(),
            address: record.address_line(),
            birthday: record.birth_date.clone(),
            controls,
        }
    }
}

/// An open detail view's cursor.
///
/// Dropping or [closing](Navigator::close) the navigator discards the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    cursor: usize,
    len: usize,
}

impl Navigator {
    /// Open the detail view at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid record
    /// index, which includes every index of an empty directory.
    pub fn open(directory: &Directory, index: usize) -> Result<Self> {
        let len = directory.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        trace!(index, "Opened detail view");
        Ok(Self { cursor: index, len })
    }

    /// The index currently displayed.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move to the previous record, clamping at the first. Returns the new
    /// cursor.
    pub fn prev(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        trace!(cursor = self.cursor, "prev");
        self.cursor
    }

    /// Move to the next record, clamping at the last. Returns the new cursor.
    pub fn next(&mut self) -> usize {
        self.cursor = (self.cursor + 1).min(self.len - 1);
        trace!(cursor = self.cursor, "next");
        self.cursor
    }

    /// Control state for the current cursor.
    #[must_use]
    pub fn controls(&self) -> NavControls {
        NavControls {
            prev_enabled: self.cursor > 0,
            next_enabled: self.cursor + 1 < self.len,
        }
    }

    /// Render the detail for the current cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `directory` is not the
    /// directory this navigator was opened on and is too short.
    pub fn view(&self, directory: &Directory) -> Result<DetailView> {
        let record = directory.record(self.cursor)?;
        Ok(DetailView::new(record, self.controls()))
    }

    /// Close the detail view.
    pub fn close(self) {
        trace!(cursor = self.cursor, "Closed detail view");
    }
}
