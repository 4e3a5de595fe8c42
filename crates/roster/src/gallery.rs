//! Summary cards and the gallery listing.
//!
//! Cards are built once per record when the gallery is created and cached by
//! record index. Rendering, filtered or not, only selects which cached cards
//! appear in the display list; it never rebuilds them.

use serde::Serialize;
use tracing::trace;

use crate::directory::Directory;
use crate::person::PersonRecord;

/// The summary projection of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Index of the owning record. Choosing the card opens the detail view
    /// at this index.
    pub index: usize,
    /// Profile picture URL.
    pub photo_url: String,
    /// `"First Last"`.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// `"City, Region"`.
    pub locality: String,
}

impl Card {
    /// Build the card for a record.
    #[must_use]
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            index: record.index,
            photo_url: record.photo_url.clone(),
            full_name: record.full_name(),
            email: record.email.clone(),
            locality: record.locality(),
        }
    }
}

/// The card cache for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    /// Build one card per record, in directory order.
    #[must_use]
    pub fn build(directory: &Directory) -> Self {
        Self {
            cards: directory.iter().map(Card::from_record).collect(),
        }
    }

    /// The cached card for a record index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cached cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the gallery holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card, in directory order.
    #[must_use]
    pub fn render_all(&self) -> Vec<&Card> {
        self.cards.iter().collect()
    }

    /// The cards whose record's first or last name contains `query`,
    /// ignoring case and surrounding whitespace. A blank query selects every
    /// card.
    #[must_use]
    pub fn render_filtered<'a>(&'a self, directory: &Directory, query: &str) -> Vec<&'a Card> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return self.render_all();
        }

        let shown: Vec<&Card> = directory
            .iter()
            .filter(|record| record.name_contains(&needle))
            .filter_map(|record| self.card(record.index))
            .collect();
        trace!(query = %needle, shown = shown.len(), "Filtered gallery");
        shown
    }
}

/// Trim and uppercase a search query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_uppercase()
}
