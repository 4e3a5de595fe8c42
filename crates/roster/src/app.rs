//! Application state and the interaction session.
//!
//! [`AppState`] is created once a load succeeds and is replaced wholesale on
//! reload; nothing mutates it in place. [`Session`] applies user events to it
//! one at a time and reports what should be on screen afterwards.

use tracing::{debug, trace};

use crate::directory::Directory;
use crate::error::Result;
use crate::gallery::{Card, Gallery};
use crate::navigator::{DetailView, Navigator};

/// A loaded directory together with its card cache.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    directory: Directory,
    gallery: Gallery,
}

impl AppState {
    /// Build the state for a freshly loaded directory.
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        let gallery = Gallery::build(&directory);
        Self { directory, gallery }
    }

    /// The loaded directory.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The card cache.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Every card, in directory order.
    #[must_use]
    pub fn render_all(&self) -> Vec<&Card> {
        self.gallery.render_all()
    }

    /// The cards matching `query`.
    #[must_use]
    pub fn render_filtered(&self, query: &str) -> Vec<&Card> {
        self.gallery.render_filtered(&self.directory, query)
    }

    /// Open the detail view at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn open(&self, index: usize) -> Result<Navigator> {
        Navigator::open(&self.directory, index)
    }
}

/// A user interaction.
#[derive(Debug, Clone)]
pub enum Event {
    /// The search text changed.
    Search(String),
    /// A card was chosen.
    Open(usize),
    /// The detail view's "previous" control.
    Prev,
    /// The detail view's "next" control.
    Next,
    /// The detail view's "close" control.
    Close,
    /// A new directory finished loading.
    Reload(AppState),
}

/// What is on screen after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// The gallery listing for the current query.
    Gallery {
        /// The current search text.
        query: &'a str,
        /// Cards shown, in directory order.
        cards: Vec<&'a Card>,
    },
    /// The detail view, overlaid on the gallery.
    Detail(DetailView),
}

/// The state of one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
    query: String,
    navigator: Option<Navigator>,
}

impl Session {
    /// Start a session over a loaded state.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            query: String::new(),
            navigator: None,
        }
    }

    /// The current application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The open detail view's cursor, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.navigator.as_ref().map(Navigator::cursor)
    }

    /// Cards shown for the current query, whether or not a detail view
    /// covers them.
    #[must_use]
    pub fn gallery(&self) -> Vec<&Card> {
        self.state.render_filtered(&self.query)
    }

    /// Apply one event and return the resulting screen.
    ///
    /// `Prev`, `Next` and `Close` without an open detail view are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if `Open` names an index outside the directory. The
    /// session is left unchanged in that case.
    pub fn apply(&mut self, event: Event) -> Result<Screen<'_>> {
        trace!(?event, "Applying event");
        match event {
            Event::Search(query) => {
                self.query = query;
            }
            Event::Open(index) => {
                let navigator = self.state.open(index)?;
                if let Some(previous) = self.navigator.replace(navigator) {
                    previous.close();
                }
            }
            Event::Prev => {
                if let Some(navigator) = self.navigator.as_mut() {
                    navigator.prev();
                }
            }
            Event::Next => {
                if let Some(navigator) = self.navigator.as_mut() {
                    navigator.next();
                }
            }
            Event::Close => {
                if let Some(navigator) = self.navigator.take() {
                    navigator.close();
                }
            }
            Event::Reload(state) => {
                debug!(records = state.directory().len(), "Replacing directory");
                if let Some(navigator) = self.navigator.take() {
                    navigator.close();
                }
                self.state = state;
            }
        }
        self.screen()
    }

    /// The current screen.
    ///
    /// # Errors
    ///
    /// Returns an error only if the open cursor does not fit the directory,
    /// which the session never allows to happen.
    pub fn screen(&self) -> Result<Screen<'_>> {
        match &self.navigator {
            Some(navigator) => Ok(Screen::Detail(navigator.view(self.state.directory())?)),
            None => Ok(Screen::Gallery {
                query: &self.query,
                cards: self.gallery(),
            }),
        }
    }
}
